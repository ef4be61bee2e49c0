//! Shared test fixtures and helper utilities.
//!
//! Provides pre-built JWT tokens with known claims for use in the
//! integration tests, plus a builder for tokens with arbitrary claims.
#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;

/// The jwt.io sample token.
///
/// Header: `{"alg":"HS256","typ":"JWT"}`
/// Payload: `{"sub":"1234567890","name":"Test User","iat":1516239022}`
pub const VALID_HS256_TOKEN: &str = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
     eyJzdWIiOiIxMjM0NTY3ODkwIiwibmFtZSI6IlRlc3QgVXNlciIsImlhdCI6MTUxNjIzOTAyMn0.\
     SflKxwRJSMeKKF2QT4fwpMeJf36POk6yJV_adQssw5c";

/// Header `{"alg":"HS256"}`, payload `{"sub":"1234567890"}`, empty signature.
pub const UNSIGNED_TOKEN: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.";

/// Header `{}`, payload `{"exp":1000}`, empty signature.
pub const EXPIRES_AT_1000: &str = "e30.eyJleHAiOjEwMDB9.";

/// A malformed token with only two parts (missing signature).
pub const MALFORMED_TOKEN_TWO_PARTS: &str = "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0";

/// A completely invalid token string.
pub const INVALID_TOKEN: &str = "not-a-jwt";

/// A token whose header decodes to the JSON array `[1,2,3]`.
pub const ARRAY_HEADER_TOKEN: &str = "WzEsMiwzXQ.e30.";

/// An empty string for edge case testing.
pub const EMPTY_TOKEN: &str = "";

/// Build an unsigned token from header and payload JSON.
pub fn create_token(header: &serde_json::Value, payload: &serde_json::Value) -> String {
    format!(
        "{}.{}.",
        URL_SAFE_NO_PAD.encode(header.to_string()),
        URL_SAFE_NO_PAD.encode(payload.to_string())
    )
}

/// Build an unsigned token with the given claims and a `none` header.
pub fn create_token_with_claims(claims: &serde_json::Value) -> String {
    create_token(&serde_json::json!({"alg": "none", "typ": "JWT"}), claims)
}
