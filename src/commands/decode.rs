//! Handler for the `decode` subcommand.
//!
//! Decodes and pretty-prints a JWT's header and payload without
//! verifying its signature, followed by the status of its time claims.
//! Supports reading the token from a CLI argument, environment
//! variable, or stdin.

use anyhow::{Context, Result};
use jwt_peek::{DecodedToken, decode_token, decode_token_at};

use crate::cli::DecodeArgs;
use crate::commands::input::{read_token, resolve_instant};
use crate::display::{json_printer, token_status, use_color};

/// Execute the `decode` subcommand with the given arguments.
pub fn execute(args: &DecodeArgs) -> Result<()> {
    let token = read_token(&args.input)?;
    let decoded = match resolve_instant(args.at.as_deref())? {
        Some(now) => decode_token_at(&token, now)?,
        None => decode_token(&token)?,
    };

    if args.json {
        let rendered =
            serde_json::to_string_pretty(&decoded).context("failed to serialize decoded token")?;
        println!("{rendered}");
    } else {
        print_human(&decoded, use_color());
    }
    Ok(())
}

fn print_human(decoded: &DecodedToken, color: bool) {
    println!("--- Header ---");
    json_printer::print_json(&decoded.header, color);
    println!();
    println!("--- Payload ---");
    json_printer::print_json(&decoded.payload, color);
    println!();
    println!("--- Signature ---");
    if decoded.signature.is_empty() {
        println!("(empty, unsigned or detached)");
    } else {
        println!("{} (not verified)", decoded.signature);
    }
    println!();
    println!("--- Token Status ---");
    print!("{}", token_status::render_token_status(&decoded.claims, color));
}
