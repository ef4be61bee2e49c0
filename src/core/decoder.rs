//! Structural JWT parsing.
//!
//! Checks that a raw string has the `header.payload.signature` shape,
//! base64url-decodes the header and payload segments, and parses each as
//! a JSON object. The signature is kept as its raw encoded text.

use std::fmt;

use serde_json::{Map, Value};
use tracing::trace;

use crate::core::base64url;
use crate::error::{FormatError, JsonKind, Segment};

/// The structurally decoded parts of a JWT.
///
/// Implements a custom `Debug` that redacts `payload` and `signature`
/// to prevent accidental leakage of sensitive claim data.
#[derive(Clone, PartialEq)]
pub struct ParsedToken {
    /// The decoded header object (typically contains `alg` and `typ`).
    pub header: Map<String, Value>,
    /// The decoded payload object (the claims).
    pub payload: Map<String, Value>,
    /// The raw base64url-encoded signature segment, possibly empty.
    pub signature: String,
}

impl fmt::Debug for ParsedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParsedToken")
            .field("header", &self.header)
            .field("payload", &"[REDACTED]")
            .field("signature", &"[REDACTED]")
            .finish()
    }
}

/// Parse a raw JWT string into its header, payload, and signature.
///
/// The header is decoded before the payload, so a broken header is
/// reported even when the payload is also broken.
///
/// # Errors
///
/// Returns [`FormatError::MalformedShape`] if the token is not three
/// base64url segments joined by two dots (the first two non-empty),
/// and the segment-specific variants if a segment fails base64url
/// decoding, UTF-8 decoding, JSON parsing, or is not a JSON object.
pub fn parse(token: &str) -> Result<ParsedToken, FormatError> {
    let (header_b64, payload_b64, signature) =
        split_segments(token).ok_or(FormatError::MalformedShape {
            length: token.len(),
        })?;

    let header = decode_segment(header_b64, Segment::Header)?;
    let payload = decode_segment(payload_b64, Segment::Payload)?;

    Ok(ParsedToken {
        header,
        payload,
        signature: signature.to_string(),
    })
}

/// Split a token into its three segments if it is well-formed.
fn split_segments(token: &str) -> Option<(&str, &str, &str)> {
    let mut parts = token.split('.');
    let header = parts.next()?;
    let payload = parts.next()?;
    let signature = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let well_formed = !header.is_empty()
        && !payload.is_empty()
        && [header, payload, signature]
            .iter()
            .all(|segment| segment.bytes().all(is_base64url_byte));

    well_formed.then_some((header, payload, signature))
}

fn is_base64url_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'-' || b == b'_'
}

/// Base64url-decode a segment and parse it as a JSON object.
fn decode_segment(encoded: &str, segment: Segment) -> Result<Map<String, Value>, FormatError> {
    trace!(%segment, encoded_len = encoded.len(), "decoding segment");

    let bytes =
        base64url::decode(encoded).map_err(|_| FormatError::InvalidBase64 { segment })?;
    let text =
        std::str::from_utf8(&bytes).map_err(|_| FormatError::InvalidEncoding { segment })?;

    let value: Value =
        serde_json::from_str(text).map_err(|e| FormatError::InvalidJson {
            segment,
            message: e.to_string(),
        })?;

    let found = match value {
        Value::Object(map) => return Ok(map),
        Value::Array(_) => JsonKind::Array,
        Value::String(_) => JsonKind::String,
        Value::Number(_) => JsonKind::Number,
        Value::Bool(_) => JsonKind::Bool,
        Value::Null => JsonKind::Null,
    };
    Err(FormatError::UnexpectedJsonShape { segment, found })
}
