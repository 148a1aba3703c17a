//! Command handlers for each CLI subcommand.
//!
//! Each subcommand is implemented in its own module and exposes a single
//! `execute` function that receives the parsed arguments. Token
//! acquisition (argument, environment variable, stdin) and reference
//! instant resolution are shared here.

pub mod inspect;
pub mod status;

use std::io::Read;

use chrono::Utc;
use zeroize::Zeroizing;

use crate::error::TokenLensError;

/// Resolve the token from the argument, environment variable, or stdin,
/// in that order of precedence.
///
/// The resolved value is trimmed and stripped of a single leading
/// `Bearer ` scheme prefix, so Authorization header values can be
/// pasted wholesale.
///
/// # Errors
///
/// Returns an error if the environment variable name is invalid or the
/// variable is unset, or if no non-empty token reaches the CLI.
pub(crate) fn resolve_token(
    token: Option<&Zeroizing<String>>,
    token_env: Option<&str>,
) -> Result<Zeroizing<String>, TokenLensError> {
    let raw: Zeroizing<String> = if let Some(token) = token {
        token.clone()
    } else if let Some(name) = token_env {
        read_env_token(name)?
    } else {
        read_stdin_token()?
    };

    let normalized = Zeroizing::new(normalize_token(&raw));
    if normalized.is_empty() {
        return Err(TokenLensError::NoTokenProvided);
    }
    Ok(normalized)
}

/// Resolve the reference instant for expiry checks.
///
/// Uses the `--now` override when given, otherwise the wall clock. The
/// pure inspection core always receives the instant explicitly; this is
/// the only place the clock is consulted.
pub(crate) fn resolve_now(now: Option<u64>) -> Result<i64, TokenLensError> {
    match now {
        Some(value) => i64::try_from(value).map_err(|_| TokenLensError::InvalidTimestamp {
            value: value.to_string(),
        }),
        None => Ok(Utc::now().timestamp()),
    }
}

/// Read the token from an environment variable, validating the name first.
fn read_env_token(name: &str) -> Result<Zeroizing<String>, TokenLensError> {
    if name.is_empty() || name.contains('=') {
        return Err(TokenLensError::InvalidEnvVarName {
            name: name.to_string(),
        });
    }
    std::env::var(name)
        .map(Zeroizing::new)
        .map_err(|_| TokenLensError::EnvVarNotFound {
            name: name.to_string(),
        })
}

/// Read the token from stdin until EOF.
fn read_stdin_token() -> Result<Zeroizing<String>, TokenLensError> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|_| TokenLensError::NoTokenProvided)?;
    Ok(Zeroizing::new(buffer))
}

/// Trim whitespace and strip at most one leading `Bearer ` scheme prefix,
/// matched case-insensitively.
fn normalize_token(raw: &str) -> String {
    let trimmed = raw.trim();
    let token = match trimmed.split_once(char::is_whitespace) {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim_start(),
        _ => trimmed,
    };
    token.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token_trims_whitespace() {
        assert_eq!(normalize_token("  a.b.c \n"), "a.b.c");
    }

    #[test]
    fn test_normalize_token_strips_bearer_prefix() {
        assert_eq!(normalize_token("Bearer a.b.c"), "a.b.c");
        assert_eq!(normalize_token("bearer a.b.c"), "a.b.c");
        assert_eq!(normalize_token("BEARER a.b.c"), "a.b.c");
    }

    #[test]
    fn test_normalize_token_strips_at_most_one_prefix() {
        assert_eq!(normalize_token("Bearer Bearer a.b.c"), "Bearer a.b.c");
    }

    #[test]
    fn test_normalize_token_keeps_bare_word() {
        // "Bearer" alone is treated as the token itself, not a prefix.
        assert_eq!(normalize_token("Bearer"), "Bearer");
        assert_eq!(normalize_token("a.b.c"), "a.b.c");
    }

    #[test]
    fn test_resolve_token_rejects_empty_argument() {
        let token = Zeroizing::new(String::new());
        let err = resolve_token(Some(&token), None).unwrap_err();
        assert!(matches!(err, TokenLensError::NoTokenProvided));
    }

    #[test]
    fn test_resolve_token_rejects_invalid_env_var_name() {
        let err = resolve_token(None, Some("BAD=NAME")).unwrap_err();
        assert!(matches!(err, TokenLensError::InvalidEnvVarName { .. }));

        let err = resolve_token(None, Some("")).unwrap_err();
        assert!(matches!(err, TokenLensError::InvalidEnvVarName { .. }));
    }

    #[test]
    fn test_resolve_now_prefers_override() {
        assert_eq!(resolve_now(Some(1234)).unwrap(), 1234);
    }

    #[test]
    fn test_resolve_now_rejects_out_of_range_override() {
        let err = resolve_now(Some(u64::MAX)).unwrap_err();
        assert!(matches!(err, TokenLensError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_resolve_now_falls_back_to_wall_clock() {
        // Any plausible wall-clock reading is after 2020-01-01.
        assert!(resolve_now(None).unwrap() > 1_577_836_800);
    }
}
