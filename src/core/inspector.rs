//! Structural JWT inspection.
//!
//! Splits a credential string into its three JWT parts, base64url-decodes
//! and parses the header and claims segments as JSON, masks sensitive
//! claim values, and derives expiry against a caller-supplied instant.
//!
//! This is a structural decoder for display only. It never verifies
//! signatures and must not be treated as an authentication decision-maker.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use crate::core::redact::{mask_signature, redact_claims};

/// Why a credential could not be decoded.
///
/// Carried as data inside [`DecodedToken`]; [`decode`] never returns
/// `Err` and never panics, so callers branch on this instead of
/// unwinding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionError {
    /// The credential was empty or whitespace-only.
    #[error("no credential supplied")]
    EmptyInput,

    /// The credential does not split into three non-empty dot-separated
    /// segments.
    #[error("credential does not have 'header.payload.signature' structure")]
    NotAJwt,

    /// The shape matched but the header or payload segment is not
    /// base64url-encoded JSON.
    #[error("header or payload segment is not valid base64url-encoded JSON")]
    MalformedSegment,
}

/// The outcome of structurally decoding a credential.
///
/// Exactly one of `{header and claims populated, error populated}` holds.
/// Sensitive claim values and the signature segment are already masked,
/// so nothing in this struct is unsafe to print.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedToken {
    /// True iff the credential splits into exactly three non-empty
    /// dot-separated segments. Says nothing about cryptographic validity.
    pub is_structurally_valid: bool,

    /// The parsed JWT header (typically `alg` and `typ`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<Map<String, Value>>,

    /// The parsed claims, with sensitive values masked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub claims: Option<Map<String, Value>>,

    /// Masked form of the signature segment, never the raw text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signature_redacted: Option<String>,

    /// Whether `exp` lies before the reference instant. `None` when the
    /// token carries no numeric `exp` claim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_expired: Option<bool>,

    /// The `exp` claim in epoch seconds, when present and numeric.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<i64>,

    /// The failure, when decoding did not succeed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<InspectionError>,
}

impl DecodedToken {
    /// A failed decode with no decoded content.
    fn failure(is_structurally_valid: bool, error: InspectionError) -> Self {
        DecodedToken {
            is_structurally_valid,
            header: None,
            claims: None,
            signature_redacted: None,
            is_expired: None,
            expires_at: None,
            error: Some(error),
        }
    }
}

/// Structurally decode `credential`, judging expiry against `now`.
///
/// `now` is the caller's reference instant in epoch seconds (expected to
/// be non-negative); the wall clock is never consulted here, so identical
/// arguments always produce identical output. Every failure is reported
/// through the result's `error` field, never as a panic.
pub fn decode(credential: &str, now: i64) -> DecodedToken {
    if credential.trim().is_empty() {
        return DecodedToken::failure(false, InspectionError::EmptyInput);
    }

    let parts: Vec<&str> = credential.split('.').collect();
    if parts.len() != 3 || parts.iter().any(|p| p.is_empty()) {
        return DecodedToken::failure(false, InspectionError::NotAJwt);
    }

    // The shape is a JWT from here on, even if the segments turn out to
    // hold garbage. The signature is masked in every outcome.
    let signature_redacted = mask_signature(parts[2]);

    let (header, claims) = match (decode_segment(parts[0]), decode_segment(parts[1])) {
        (Some(header), Some(claims)) => (header, claims),
        _ => {
            let mut decoded = DecodedToken::failure(true, InspectionError::MalformedSegment);
            decoded.signature_redacted = Some(signature_redacted);
            return decoded;
        }
    };

    let claims = redact_claims(claims, credential);
    let exp = claims.get("exp").and_then(Value::as_i64);

    DecodedToken {
        is_structurally_valid: true,
        header: Some(header),
        claims: Some(claims),
        signature_redacted: Some(signature_redacted),
        is_expired: exp.map(|exp| exp < now),
        expires_at: exp,
        error: None,
    }
}

/// Base64url-decode a segment and parse it as a JSON object.
///
/// Valid JSON that is not an object (a bare string or number) is
/// rejected too: the decoded token promises mappings.
fn decode_segment(encoded: &str) -> Option<Map<String, Value>> {
    let bytes = URL_SAFE_NO_PAD.decode(encoded).ok()?;
    match serde_json::from_slice(&bytes).ok()? {
        Value::Object(map) => Some(map),
        _ => None,
    }
}
