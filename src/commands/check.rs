//! Handler for the `check` subcommand.
//!
//! Decodes a token and reports whether it is still within its validity
//! window, for use in shell scripts. Nothing is printed to stdout beyond
//! a single status line.

use anyhow::Result;
use jwt_peek::{decode_token, decode_token_at};
use tracing::info;

use crate::cli::CheckArgs;
use crate::commands::input::{read_token, resolve_instant};

/// Execute the `check` subcommand.
///
/// Returns `true` if the token is usable at the evaluated instant.
pub fn execute(args: &CheckArgs) -> Result<bool> {
    let token = read_token(&args.input)?;
    let decoded = match resolve_instant(args.at.as_deref())? {
        Some(now) => decode_token_at(&token, now)?,
        None => decode_token(&token)?,
    };
    let claims = &decoded.claims;

    let status = if decoded.is_expired {
        "expired"
    } else if args.require_nbf && claims.not_yet_valid {
        "not yet valid"
    } else {
        "valid"
    };
    info!(
        status,
        is_expired = decoded.is_expired,
        not_yet_valid = claims.not_yet_valid,
        "token checked"
    );
    println!("{status}");

    Ok(status == "valid")
}
