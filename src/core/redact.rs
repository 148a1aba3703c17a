//! Masking rules for credential display.
//!
//! The original analyzers carried two slightly different copies of these
//! rules; this module is the single deterministic version. All lengths
//! and slices are measured in characters, never bytes, so multi-byte
//! values cannot split a UTF-8 boundary.

use serde_json::{Map, Value};

/// Longest run of `*` the generic mask will emit.
const MAX_MASK_RUN: usize = 20;

/// Mask a value for display, keeping enough structure to confirm
/// presence without revealing the content.
///
/// Values shorter than 10 characters are returned unchanged: masking
/// them would either reveal everything or nothing. Longer values keep
/// their first 6 and last 4 characters with a bounded `*` run between.
/// The run is never empty, so any masked value differs from its input.
pub fn mask_value(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() < 10 {
        return value.to_string();
    }

    let run = (chars.len() - 10).clamp(1, MAX_MASK_RUN);
    let start: String = chars[..6].iter().collect();
    let end: String = chars[chars.len() - 4..].iter().collect();
    format!("{start}{}{end}", "*".repeat(run))
}

/// Mask an email address, keeping the domain readable.
///
/// Applies only to values containing exactly one `@`; anything else
/// falls back to [`mask_value`]. Local parts of one or two characters
/// are left as-is, since masking them would erase the whole local part.
pub fn mask_email(value: &str) -> String {
    if value.matches('@').count() != 1 {
        return mask_value(value);
    }
    let Some((local, domain)) = value.split_once('@') else {
        return mask_value(value);
    };

    let chars: Vec<char> = local.chars().collect();
    if chars.len() <= 2 {
        return value.to_string();
    }

    let first = chars[0];
    let last = chars[chars.len() - 1];
    format!("{first}{}{last}@{domain}", "*".repeat(chars.len() - 2))
}

/// Mask a signature segment.
///
/// Unlike claim values, the signature never gets the "too short to mask"
/// escape: a result that would reproduce the raw segment is replaced by
/// a fixed placeholder, so no usable signature fragment ever leaks.
pub fn mask_signature(segment: &str) -> String {
    let masked = mask_value(segment);
    if masked == segment {
        "***".to_string()
    } else {
        masked
    }
}

/// Redact sensitive values in a claims mapping.
///
/// `sub` and `email` (case-sensitive key match) are always masked, as is
/// any claim whose string value equals the inspected credential itself,
/// which guards against a token accidentally embedding its own text.
/// Keys are kept so callers can see that a sensitive field existed.
pub fn redact_claims(claims: Map<String, Value>, credential: &str) -> Map<String, Value> {
    claims
        .into_iter()
        .map(|(key, value)| {
            let value = if key == "email" {
                redact_value(value, mask_email)
            } else if key == "sub" || value.as_str() == Some(credential) {
                redact_value(value, mask_value)
            } else {
                value
            };
            (key, value)
        })
        .collect()
}

/// Apply `mask` to a claim value's text.
///
/// Non-string values are rendered to their compact JSON text before
/// masking so they are never emitted verbatim either; when the mask
/// leaves the text unchanged, the original value (and its JSON type)
/// is preserved.
fn redact_value(value: Value, mask: fn(&str) -> String) -> Value {
    match value {
        Value::String(s) => Value::String(mask(&s)),
        other => {
            let text = other.to_string();
            let masked = mask(&text);
            if masked == text {
                other
            } else {
                Value::String(masked)
            }
        }
    }
}
