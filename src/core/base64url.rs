//! Unpadded, URL-safe base64 codec for token segments.
//!
//! Decoding maps the URL-safe alphabet back onto the standard one, restores
//! `=` padding, and runs a standard base64 decode. Non-canonical trailing
//! bits are accepted, matching what browsers' `atob` tolerates.

use base64::Engine;
use base64::alphabet;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

use crate::error::DecodeError;

/// Standard-alphabet engine that expects restored padding and tolerates
/// non-zero trailing bits.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::RequireCanonical),
);

/// Decode an unpadded base64url segment into raw bytes.
///
/// An empty segment decodes to an empty buffer.
///
/// # Errors
///
/// Returns [`DecodeError::InvalidBase64`] if the segment contains characters
/// outside the base64url alphabet, or its length leaves a remainder of one
/// when divided by four (no valid base64 string has that length).
pub fn decode(segment: &str) -> Result<Vec<u8>, DecodeError> {
    if segment.len() % 4 == 1 {
        return Err(DecodeError::InvalidBase64);
    }

    let mut standard: String = segment
        .chars()
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    while standard.len() % 4 != 0 {
        standard.push('=');
    }

    LENIENT_STANDARD
        .decode(standard.as_bytes())
        .map_err(|_| DecodeError::InvalidBase64)
}

/// Encode bytes as an unpadded base64url segment.
pub fn encode(bytes: impl AsRef<[u8]>) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}
