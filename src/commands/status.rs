//! Handler for the `status` subcommand.
//!
//! Prints a one-line temporal verdict and reports it through the exit
//! code, for use in scripts: success when the token is not expired,
//! failure when it is. A token without an `exp` claim counts as not
//! expired, since nothing disproves its validity.

use std::io::IsTerminal;

use anyhow::Result;

use crate::cli::StatusArgs;
use crate::core::inspector;
use crate::display::token_status;
use crate::error::TokenLensError;

/// Execute the `status` subcommand with the given arguments.
///
/// Returns `true` when the token is not expired at the reference
/// instant, so the caller can map the verdict onto the exit code.
pub fn execute(args: &StatusArgs) -> Result<bool> {
    let token = super::resolve_token(args.token.as_ref(), args.token_env.as_deref())?;
    let now = super::resolve_now(args.now)?;

    let decoded = inspector::decode(&token, now);
    if let Some(error) = decoded.error {
        return Err(TokenLensError::from(error).into());
    }

    let use_color = std::io::stdout().is_terminal();
    println!("{}", token_status::expiry_line(&decoded, now, use_color));

    Ok(decoded.is_expired != Some(true))
}
