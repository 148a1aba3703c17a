//! CLI argument definitions for token-lens.
//!
//! Uses `clap` derive macros to define the command-line interface.
//! Each subcommand has its own argument struct for type-safe parsing.
//!
//! # Security
//!
//! Tokens are held in `Zeroizing<String>` so the credential text is wiped
//! when the arguments drop, and the argument structs implement custom
//! `Debug` that redacts the token to prevent accidental leakage through
//! debug formatting, error chains, or logging.

use std::fmt;

use clap::{Parser, Subcommand};
use zeroize::Zeroizing;

/// An offline-first CLI for inspecting bearer tokens with sensitive
/// claims masked. Decodes JWT structure without verifying signatures.
#[derive(Debug, Parser)]
#[command(name = "token-lens")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Decode and inspect a bearer token without verifying its signature.
    Inspect(InspectArgs),

    /// Report whether a token is expired, through the exit code.
    Status(StatusArgs),
}

/// Arguments for the `inspect` subcommand.
#[derive(clap::Args)]
pub struct InspectArgs {
    /// The token to inspect. A leading "Bearer " scheme prefix is
    /// stripped, so Authorization header values can be pasted wholesale.
    /// If omitted, reads from stdin.
    #[arg(value_parser = parse_zeroizing_string)]
    pub token: Option<Zeroizing<String>>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// Reference instant for expiry checks, in Unix epoch seconds.
    /// Defaults to the current time.
    #[arg(long, value_name = "EPOCH_SECONDS")]
    pub now: Option<u64>,

    /// Output raw JSON without colors (machine-readable).
    #[arg(long)]
    pub json: bool,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for InspectArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InspectArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("now", &self.now)
            .field("json", &self.json)
            .finish()
    }
}

/// Arguments for the `status` subcommand.
#[derive(clap::Args)]
pub struct StatusArgs {
    /// The token to check. A leading "Bearer " scheme prefix is
    /// stripped. If omitted, reads from stdin.
    #[arg(value_parser = parse_zeroizing_string)]
    pub token: Option<Zeroizing<String>>,

    /// Read the token from the specified environment variable.
    #[arg(long, value_name = "VAR_NAME")]
    pub token_env: Option<String>,

    /// Reference instant for expiry checks, in Unix epoch seconds.
    /// Defaults to the current time.
    #[arg(long, value_name = "EPOCH_SECONDS")]
    pub now: Option<u64>,
}

/// Custom `Debug` that redacts the token field to prevent accidental leakage.
impl fmt::Debug for StatusArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatusArgs")
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .field("token_env", &self.token_env)
            .field("now", &self.now)
            .finish()
    }
}

/// Parse a string into a `Zeroizing<String>` for secure CLI arguments.
fn parse_zeroizing_string(s: &str) -> Result<Zeroizing<String>, std::convert::Infallible> {
    Ok(Zeroizing::new(s.to_string()))
}
