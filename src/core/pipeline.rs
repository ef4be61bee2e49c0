//! The decode pipeline: structural parse followed by claims evaluation.

use std::fmt;

use chrono::Utc;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::core::claims::{self, ClaimsReport};
use crate::core::decoder;
use crate::error::DecodeTokenError;

/// A fully decoded token, evaluated at a single instant.
///
/// Implements a custom `Debug` that redacts `payload` and `signature`
/// to prevent accidental leakage of sensitive claim data.
#[derive(Clone, PartialEq, Serialize)]
pub struct DecodedToken {
    /// The decoded header object.
    pub header: Map<String, Value>,
    /// The decoded payload object.
    pub payload: Map<String, Value>,
    /// The raw, unverified signature segment.
    pub signature: String,
    /// `payload.exp < now`.
    pub is_expired: bool,
    /// Time-claim details derived at the same instant as `is_expired`.
    pub claims: ClaimsReport,
}

impl fmt::Debug for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DecodedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .field("is_expired", &self.is_expired)
            .finish()
    }
}

/// Decode a token and evaluate its time claims against the current time.
///
/// The wall clock is read exactly once per call.
///
/// # Errors
///
/// Returns the first structural error encountered; see [`decoder::parse`].
pub fn decode_token(token: &str) -> Result<DecodedToken, DecodeTokenError> {
    decode_token_at(token, Utc::now().timestamp())
}

/// Decode a token and evaluate its time claims against `now` (Unix seconds).
///
/// # Errors
///
/// Returns the first structural error encountered; see [`decoder::parse`].
pub fn decode_token_at(token: &str, now: i64) -> Result<DecodedToken, DecodeTokenError> {
    let parsed = decoder::parse(token).inspect_err(|e| {
        debug!(kind = ?e.kind(), segment = ?e.segment(), "token rejected");
    })?;

    let claims = claims::validate(&parsed.payload, now);
    debug!(
        header_claims = parsed.header.len(),
        payload_claims = parsed.payload.len(),
        is_expired = claims.is_expired,
        "token decoded"
    );

    Ok(DecodedToken {
        header: parsed.header,
        payload: parsed.payload,
        signature: parsed.signature,
        is_expired: claims.is_expired,
        claims,
    })
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use serde_json::json;

    use super::*;
    use crate::core::base64url;
    use crate::error::{ErrorKind, Segment};

    fn token_from(header: &Value, payload: &Value, signature: &str) -> String {
        format!(
            "{}.{}.{}",
            base64url::encode(header.to_string()),
            base64url::encode(payload.to_string()),
            signature
        )
    }

    #[test]
    fn test_scenario_token_without_exp_is_not_expired() {
        let decoded =
            decode_token_at("eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.", 2000).unwrap();
        assert_eq!(decoded.header["alg"], "HS256");
        assert_eq!(decoded.payload["sub"], "1234567890");
        assert_eq!(decoded.signature, "");
        assert!(!decoded.is_expired);
    }

    #[test]
    fn test_expired_token() {
        // {"exp":1000}
        let decoded = decode_token_at("e30.eyJleHAiOjEwMDB9.", 2000).unwrap();
        assert!(decoded.is_expired);
        assert_eq!(decoded.is_expired, decoded.claims.is_expired);
    }

    #[test]
    fn test_token_at_expiry_boundary_is_not_expired() {
        // {"exp":2000}
        let decoded = decode_token_at("e30.eyJleHAiOjIwMDB9.", 2000).unwrap();
        assert!(!decoded.is_expired);
    }

    #[test]
    fn test_not_a_jwt_is_shape_error() {
        let err = decode_token_at("not-a-jwt", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Shape);
        assert_eq!(err.segment(), None);
    }

    #[test]
    fn test_header_encoding_error_wins_over_payload() {
        let err = decode_token_at("__4.abcde.", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Encoding);
        assert_eq!(err.segment(), Some(Segment::Header));
    }

    #[test]
    fn test_array_header_is_content_shape_error() {
        let err = decode_token_at("WzEsMiwzXQ.e30.", 0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ContentShape);
        assert_eq!(err.segment(), Some(Segment::Header));
    }

    #[test]
    fn test_claims_share_evaluation_instant() {
        let token = token_from(
            &json!({"alg": "none"}),
            &json!({"iat": 10, "nbf": 20, "exp": 30}),
            "",
        );
        let decoded = decode_token_at(&token, 25).unwrap();
        assert_eq!(decoded.claims.evaluated_at, 25);
        assert!(!decoded.claims.not_yet_valid);
        assert!(!decoded.is_expired);
    }

    #[test]
    fn test_decode_token_uses_wall_clock() {
        let token = token_from(&json!({"alg": "none"}), &json!({"exp": 1}), "");
        let decoded = decode_token(&token).unwrap();
        assert!(decoded.is_expired);

        let far_future = token_from(&json!({"alg": "none"}), &json!({"exp": i64::MAX}), "");
        assert!(!decode_token(&far_future).unwrap().is_expired);
    }

    #[test]
    fn test_debug_redacts_payload_and_signature() {
        let token = token_from(
            &json!({"alg": "HS256"}),
            &json!({"email": "someone@example.com"}),
            "c2lnbmF0dXJl",
        );
        let debug_output = format!("{:?}", decode_token_at(&token, 0).unwrap());
        assert!(debug_output.contains("HS256"));
        assert!(!debug_output.contains("someone@example.com"));
        assert!(!debug_output.contains("c2lnbmF0dXJl"));
    }

    #[test]
    fn test_decoded_token_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<DecodedToken>();
    }

    fn json_leaf() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(Value::from),
            "[a-zA-Z0-9 ._-]{0,16}".prop_map(Value::String),
        ]
    }

    fn json_object() -> impl Strategy<Value = Map<String, Value>> {
        let value = json_leaf().prop_recursive(3, 24, 4, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..4)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        });
        prop::collection::btree_map("[a-z]{1,8}", value, 0..6)
            .prop_map(|m| m.into_iter().collect())
    }

    proptest! {
        #[test]
        fn prop_malformed_shapes_are_rejected(input in "[A-Za-z0-9_.!+/= -]{0,40}") {
            let well_formed = {
                let parts: Vec<&str> = input.split('.').collect();
                parts.len() == 3
                    && !parts[0].is_empty()
                    && !parts[1].is_empty()
                    && parts.iter().all(|p| {
                        p.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
                    })
            };
            prop_assume!(!well_formed);
            let err = decode_token_at(&input, 0).unwrap_err();
            prop_assert_eq!(err.kind(), ErrorKind::Shape);
        }

        #[test]
        fn prop_objects_survive_a_round_trip(
            header in json_object(),
            payload in json_object(),
            signature in "[A-Za-z0-9_-]{0,24}",
            now in any::<i64>(),
        ) {
            let token = token_from(
                &Value::Object(header.clone()),
                &Value::Object(payload.clone()),
                &signature,
            );
            let decoded = decode_token_at(&token, now).unwrap();
            prop_assert_eq!(&decoded.header, &header);
            prop_assert_eq!(&decoded.payload, &payload);
            prop_assert_eq!(&decoded.signature, &signature);
        }

        #[test]
        fn prop_decode_is_idempotent(exp in any::<i64>(), now in any::<i64>()) {
            let token = token_from(&json!({"alg": "none"}), &json!({ "exp": exp }), "");
            let first = decode_token_at(&token, now).unwrap();
            let second = decode_token_at(&token, now).unwrap();
            prop_assert_eq!(first.is_expired, exp < now);
            prop_assert_eq!(first, second);
        }
    }
}
