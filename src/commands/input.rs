//! Token acquisition shared by all subcommands.
//!
//! The token is taken from the positional argument, then the environment
//! variable named by `--token-env`, then stdin. It is held in a
//! `Zeroizing` buffer so it is wiped when dropped.

use std::env::VarError;
use std::ffi::OsString;
use std::io::{IsTerminal, Read};

use jwt_peek::core::time_travel;
use jwt_peek::error::JwtPeekError;
use tracing::debug;
use zeroize::Zeroizing;

use crate::cli::TokenInput;

/// Read the token from the first configured source.
///
/// Surrounding whitespace (such as a trailing newline from a pipe) is
/// stripped.
///
/// # Errors
///
/// Returns an error if the environment variable name is invalid or unset,
/// stdin cannot be read, or the resulting token is empty.
pub(crate) fn read_token(input: &TokenInput) -> Result<Zeroizing<String>, JwtPeekError> {
    let raw = if let Some(token) = &input.token {
        debug!(source = "argument", "reading token");
        Zeroizing::new(token.clone())
    } else if let Some(name) = &input.token_env {
        debug!(source = "environment", "reading token");
        read_env(name)?
    } else {
        debug!(source = "stdin", "reading token");
        read_stdin()?
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(JwtPeekError::NoTokenProvided);
    }
    Ok(Zeroizing::new(trimmed.to_string()))
}

/// Resolve an optional `--at` expression to Unix seconds.
pub(crate) fn resolve_instant(at: Option<&str>) -> Result<Option<i64>, JwtPeekError> {
    at.map(|expression| {
        let target = time_travel::parse_time_expression(expression)?;
        debug!(at = %target.timestamp, "evaluating claims at simulated time");
        Ok(target.unix_seconds())
    })
    .transpose()
}

fn read_env(name: &str) -> Result<Zeroizing<String>, JwtPeekError> {
    if !is_valid_env_var_name(name) {
        return Err(JwtPeekError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }
    std::env::var(name)
        .map(Zeroizing::new)
        .map_err(|e| env_var_error(name, e))
}

fn env_var_error(name: &str, err: VarError) -> JwtPeekError {
    let name = name.to_string();
    match err {
        VarError::NotPresent => JwtPeekError::EnvVarNotFound { name },
        VarError::NotUnicode(_) => JwtPeekError::EnvVarNotUnicode { name },
    }
}

fn read_stdin() -> Result<Zeroizing<String>, JwtPeekError> {
    let stdin = std::io::stdin();
    if stdin.is_terminal() {
        return Err(JwtPeekError::NoTokenProvided);
    }
    read_all(stdin)
}

fn read_all(mut reader: impl Read) -> Result<Zeroizing<String>, JwtPeekError> {
    let mut buffer = Zeroizing::new(String::new());
    reader
        .read_to_string(&mut buffer)
        .map_err(|e| JwtPeekError::StdinRead {
            reason: e.kind().to_string(),
        })?;
    Ok(buffer)
}

/// Reject names `std::env::var` cannot look up.
fn is_valid_env_var_name(name: &str) -> bool {
    !name.is_empty() && !name.contains('=') && !name.contains('\0')
}
