//! Token status display for temporal claims.
//!
//! Renders human-readable status information for JWT temporal claims
//! (`exp`, `iat`, `nbf`) including expiry status with color coding.

use chrono::DateTime;
use colored::Colorize;
use serde_json::Value;

use crate::core::inspector::DecodedToken;

/// Print the temporal status of a decoded token.
///
/// The first line is the expiry verdict from [`expiry_line`]. When the
/// claims carry numeric `exp`, `iat`, or `nbf` values, their absolute
/// instants are printed on the following lines.
pub fn print_status(decoded: &DecodedToken, now: i64, use_color: bool) {
    println!("{}", expiry_line(decoded, now, use_color));

    if let Some(exp) = decoded.expires_at {
        println!("Expires at: {}", format_instant(exp));
    }

    let Some(claims) = &decoded.claims else {
        return;
    };
    if let Some(iat) = claims.get("iat").and_then(Value::as_i64) {
        println!("Issued at:  {}", format_instant(iat));
    }
    if let Some(nbf) = claims.get("nbf").and_then(Value::as_i64) {
        println!("Not before: {}", format_instant(nbf));
    }
}

/// The one-line expiry verdict for a decoded token.
///
/// - Expired: red `EXPIRED (<duration> ago)`
/// - Valid with `exp`: green `VALID (expires in <duration>)`
/// - No usable `exp` claim: a neutral note
pub fn expiry_line(decoded: &DecodedToken, now: i64, use_color: bool) -> String {
    match (decoded.is_expired, decoded.expires_at) {
        (Some(true), Some(exp)) => {
            let text = format!("EXPIRED ({} ago)", humanize(now - exp));
            if use_color {
                text.red().bold().to_string()
            } else {
                text
            }
        }
        (Some(false), Some(exp)) => {
            let text = format!("VALID (expires in {})", humanize(exp - now));
            if use_color {
                text.green().bold().to_string()
            } else {
                text
            }
        }
        _ => {
            let text = "NO EXPIRY (token carries no exp claim)".to_string();
            if use_color {
                text.yellow().to_string()
            } else {
                text
            }
        }
    }
}

/// Format an epoch-seconds instant as a UTC timestamp.
fn format_instant(epoch_seconds: i64) -> String {
    match DateTime::from_timestamp(epoch_seconds, 0) {
        Some(instant) => instant.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        None => format!("{epoch_seconds} (out of range)"),
    }
}

/// Render a non-negative duration in its largest whole unit.
fn humanize(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds >= 86_400 {
        format!("{}d", seconds / 86_400)
    } else if seconds >= 3_600 {
        format!("{}h", seconds / 3_600)
    } else if seconds >= 60 {
        format!("{}m", seconds / 60)
    } else {
        format!("{seconds}s")
    }
}
