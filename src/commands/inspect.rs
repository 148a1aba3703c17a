//! Handler for the `inspect` subcommand.
//!
//! Decodes and pretty-prints a token's header and claims without
//! verifying its signature. Sensitive claim values and the signature
//! segment are masked before anything reaches stdout. Supports reading
//! the token from a CLI argument, environment variable, or stdin.

use std::io::IsTerminal;

use anyhow::Result;
use serde_json::Value;

use crate::cli::InspectArgs;
use crate::core::inspector::{self, DecodedToken};
use crate::display::{json_printer, token_status};
use crate::error::TokenLensError;

/// Execute the `inspect` subcommand with the given arguments.
pub fn execute(args: &InspectArgs) -> Result<()> {
    let token = super::resolve_token(args.token.as_ref(), args.token_env.as_deref())?;
    let now = super::resolve_now(args.now)?;

    let decoded = inspector::decode(&token, now);
    if let Some(error) = decoded.error {
        return Err(TokenLensError::from(error).into());
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
    } else {
        render_human(&decoded, now);
    }
    Ok(())
}

/// Render the decoded token as sectioned, colorized terminal output.
fn render_human(decoded: &DecodedToken, now: i64) {
    let use_color = std::io::stdout().is_terminal();

    if let Some(header) = &decoded.header {
        println!("--- Header ---");
        json_printer::print_json(&Value::Object(header.clone()), use_color);
        println!();
    }

    if let Some(claims) = &decoded.claims {
        println!("--- Claims ---");
        json_printer::print_json(&Value::Object(claims.clone()), use_color);
        println!();
    }

    if let Some(signature) = &decoded.signature_redacted {
        println!("--- Signature ---");
        println!("{signature} (masked, not verified)");
        println!();
    }

    println!("--- Token Status ---");
    token_status::print_status(decoded, now, use_color);
}
