//! jwt-peek: an offline JWT structural decoder and time-claims inspector.
//!
//! Decodes the header and payload of a compact JWT, reports its raw
//! signature, and evaluates the `exp`, `iat`, and `nbf` claims against a
//! single instant. Signatures are never verified.
//!
//! ```
//! let decoded = jwt_peek::decode_token_at(
//!     "eyJhbGciOiJIUzI1NiJ9.eyJzdWIiOiIxMjM0NTY3ODkwIn0.",
//!     1_700_000_000,
//! )
//! .unwrap();
//! assert_eq!(decoded.header["alg"], "HS256");
//! assert!(!decoded.is_expired);
//! ```

#![forbid(unsafe_code)]

pub mod core;
pub mod error;

pub use crate::core::claims::{ClaimsReport, Direction, RelativeTime};
pub use crate::core::pipeline::{DecodedToken, decode_token, decode_token_at};
pub use crate::error::{DecodeTokenError, ErrorKind, FormatError, Segment};
