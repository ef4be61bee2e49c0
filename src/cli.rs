//! CLI argument definitions for jwt-peek.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! `TokenInput` implements a custom `Debug` to redact the token and
//! prevent accidental leakage through debug formatting, error chains,
//! or logging.

use std::fmt;

use clap::{Args, Parser, Subcommand};

/// An offline JWT inspector: decodes the header and payload of a token
/// and reports the state of its `exp`, `iat`, and `nbf` claims.
///
/// Signatures are displayed but never verified.
#[derive(Debug, Parser)]
#[command(name = "jwt-peek")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Emit debug logs to stderr (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode and inspect a JWT without verifying its signature.
    Decode(DecodeArgs),

    /// Exit successfully only if the token has not expired.
    Check(CheckArgs),
}

/// Where to read the token from.
#[derive(Args)]
pub struct TokenInput {
    /// The JWT token. If omitted, reads from stdin.
    pub token: Option<String>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for TokenInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenInput")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .finish()
    }
}

/// Arguments for the `decode` subcommand.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    #[command(flatten)]
    pub input: TokenInput,

    /// Evaluate time claims at a different instant.
    ///
    /// Accepts relative expressions like "+7d", "-1h", "+30m" or
    /// absolute timestamps in ISO 8601 or Unix epoch format.
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    pub at: Option<String>,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` subcommand.
#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub input: TokenInput,

    /// Evaluate time claims at a different instant.
    ///
    /// Accepts the same expressions as `decode --at`.
    #[arg(long, value_name = "EXPR", allow_hyphen_values = true)]
    pub at: Option<String>,

    /// Also fail while the token's `nbf` lies in the future.
    #[arg(long)]
    pub require_nbf: bool,
}
