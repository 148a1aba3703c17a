//! Domain error types for token-lens.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.

use thiserror::Error;

use crate::core::inspector::InspectionError;

/// Errors that can occur while acquiring or inspecting a token.
#[derive(Debug, Error)]
pub enum TokenLensError {
    /// The provided credential does not have the expected three-part structure.
    #[error("invalid token format: expected 'header.payload.signature' structure")]
    InvalidTokenFormat,

    /// The credential looked like a JWT but a segment could not be decoded.
    #[error("malformed token segment: header or payload is not valid base64url-encoded JSON")]
    MalformedSegment,

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The environment variable name is empty or contains `=`.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },

    /// The `--now` value is not a usable epoch-seconds timestamp.
    #[error("invalid timestamp '{value}': expected Unix epoch seconds")]
    InvalidTimestamp {
        /// The rejected value.
        value: String,
    },
}

/// Map an inspection failure onto its CLI-boundary error.
///
/// `EmptyInput` folds into `NoTokenProvided`: by the time the inspector
/// runs, an empty credential means no usable input reached the CLI.
impl From<InspectionError> for TokenLensError {
    fn from(kind: InspectionError) -> Self {
        match kind {
            InspectionError::EmptyInput => TokenLensError::NoTokenProvided,
            InspectionError::NotAJwt => TokenLensError::InvalidTokenFormat,
            InspectionError::MalformedSegment => TokenLensError::MalformedSegment,
        }
    }
}
