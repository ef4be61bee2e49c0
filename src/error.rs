//! Domain error types for jwt-peek.
//!
//! All business-logic errors are defined here using `thiserror`.
//! These errors are converted to user-friendly messages at the CLI boundary.
//!
//! No variant ever carries raw token bytes: malformed input is described
//! by its length, the segment it came from, and the kind of failure.

use std::fmt;

use thiserror::Error;

/// One of the two decodable token segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
    /// The first segment (typically carries `alg` and `typ`).
    Header,
    /// The second segment (the claims).
    Payload,
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Header => f.write_str("header"),
            Segment::Payload => f.write_str("payload"),
        }
    }
}

/// The JSON type a segment decoded to when an object was expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Array,
    String,
    Number,
    Bool,
    Null,
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            JsonKind::Array => "an array",
            JsonKind::String => "a string",
            JsonKind::Number => "a number",
            JsonKind::Bool => "a boolean",
            JsonKind::Null => "null",
        };
        f.write_str(name)
    }
}

/// Coarse classification of decode failures, for callers that render
/// one message per category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The token is not three base64url segments separated by two dots.
    Shape,
    /// A segment is not valid base64, or does not decode to UTF-8.
    Encoding,
    /// A decoded segment is not syntactically valid JSON.
    Syntax,
    /// A decoded segment is valid JSON but not an object.
    ContentShape,
}

/// Errors from the base64url codec.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input is not decodable as unpadded base64url.
    #[error("invalid base64url encoding")]
    InvalidBase64,
}

/// Errors from the structural parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The token does not have the `header.payload.signature` shape.
    #[error(
        "invalid token format: expected 'header.payload.signature' structure \
         (input was {length} bytes)"
    )]
    MalformedShape {
        /// Byte length of the rejected input.
        length: usize,
    },

    /// A segment failed base64url decoding.
    #[error("failed to decode {segment}: invalid base64url encoding")]
    InvalidBase64 {
        /// Which segment failed to decode.
        segment: Segment,
    },

    /// A segment decoded to bytes that are not valid UTF-8.
    #[error("failed to decode {segment}: content is not valid UTF-8")]
    InvalidEncoding {
        /// Which segment failed to decode.
        segment: Segment,
    },

    /// A segment decoded to text that is not valid JSON.
    #[error("failed to parse {segment} as JSON: {message}")]
    InvalidJson {
        /// Which segment failed to parse.
        segment: Segment,
        /// Description of the parsing failure.
        message: String,
    },

    /// A segment parsed as JSON, but not as an object.
    #[error("{segment} must be a JSON object, found {found}")]
    UnexpectedJsonShape {
        /// Which segment had the wrong shape.
        segment: Segment,
        /// What it decoded to instead.
        found: JsonKind,
    },
}

impl FormatError {
    /// The category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FormatError::MalformedShape { .. } => ErrorKind::Shape,
            FormatError::InvalidBase64 { .. } | FormatError::InvalidEncoding { .. } => {
                ErrorKind::Encoding
            }
            FormatError::InvalidJson { .. } => ErrorKind::Syntax,
            FormatError::UnexpectedJsonShape { .. } => ErrorKind::ContentShape,
        }
    }

    /// The segment the failure belongs to, if it got that far.
    pub fn segment(&self) -> Option<Segment> {
        match self {
            FormatError::MalformedShape { .. } => None,
            FormatError::InvalidBase64 { segment }
            | FormatError::InvalidEncoding { segment }
            | FormatError::InvalidJson { segment, .. }
            | FormatError::UnexpectedJsonShape { segment, .. } => Some(*segment),
        }
    }
}

/// Errors returned by the decode pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeTokenError {
    /// The token could not be structurally decoded.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl DecodeTokenError {
    /// The category of this failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DecodeTokenError::Format(e) => e.kind(),
        }
    }

    /// The segment the failure belongs to, if any.
    pub fn segment(&self) -> Option<Segment> {
        match self {
            DecodeTokenError::Format(e) => e.segment(),
        }
    }
}

/// Errors raised by the command-line surface.
#[derive(Debug, Error)]
pub enum JwtPeekError {
    /// The token could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeTokenError),

    /// Failed to parse a time-travel expression.
    #[error("invalid time expression '{expression}': {reason}")]
    InvalidTimeExpression {
        /// The time expression that failed to parse.
        expression: String,
        /// Description of the parsing failure.
        reason: String,
    },

    /// No token was provided via any input method.
    #[error("no token provided: pass a token as an argument, via --token-env, or through stdin")]
    NoTokenProvided,

    /// The specified environment variable is not set.
    #[error("environment variable '{name}' is not set")]
    EnvVarNotFound {
        /// Name of the missing environment variable.
        name: String,
    },

    /// The environment variable is set but does not hold valid UTF-8.
    #[error("environment variable '{name}' does not contain valid UTF-8")]
    EnvVarNotUnicode {
        /// Name of the offending environment variable.
        name: String,
    },

    /// The environment variable name cannot be looked up.
    #[error("invalid environment variable name '{name}'")]
    InvalidEnvVarName {
        /// The rejected name.
        name: String,
    },

    /// Reading the token from stdin failed.
    #[error("failed to read token from stdin: {reason}")]
    StdinRead {
        /// Description of the read failure.
        reason: String,
    },
}
