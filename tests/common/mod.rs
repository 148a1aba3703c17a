//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known claims, plus helpers for
//! minting structurally-valid tokens with arbitrary claims, for use in
//! the CLI integration tests.
#![allow(dead_code)]

/// A valid HS256-signed JWT for testing.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"Test User","iat":1516239022}`
/// Secret: `"test-secret"`
pub const VALID_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IlRlc3QgVXNlciIsImlhdCI6MTUxNjIzOTAyMn0.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// The raw signature segment of [`VALID_HS256_TOKEN`], for asserting it
/// never reaches the output verbatim.
pub const VALID_HS256_SIGNATURE: &str = "SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// A token whose claims are `{"sub":"user1234567890","exp":1000}`.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`; the signature segment is a
/// placeholder, which structural decoding never inspects.
pub const EXPIRED_AT_1000_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiJ1c2VyMTIzNDU2Nzg5MCIsImV4cCI6MTAwMH0.\
     sig";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-valid-jwt";

/// An empty string for edge case testing.
pub const EMPTY_TOKEN: &str = "";

/// Create an HS256-signed token with the given claims.
pub fn create_hs256_token(secret: &str, claims: &serde_json::Value) -> String {
    use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
    let header = Header::new(Algorithm::HS256);
    let key = EncodingKey::from_secret(secret.as_bytes());
    encode(&header, claims, &key).unwrap()
}

/// Standard test claims with an `exp` chosen relative to `now = 2000`.
pub fn claims_expiring_at(exp: i64) -> serde_json::Value {
    serde_json::json!({
        "sub": "1234567890",
        "name": "Test User",
        "iat": 1516239022,
        "exp": exp
    })
}
