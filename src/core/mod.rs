//! Core business logic for JWT decoding.
//!
//! This module contains the domain logic separated from CLI concerns.
//! Everything here is synchronous, performs no I/O, and is testable
//! without the CLI layer. Apart from [`pipeline::decode_token`] and
//! [`time_travel::parse_time_expression`], nothing reads the clock.

pub mod base64url;
pub mod claims;
pub mod decoder;
pub mod pipeline;
pub mod time_travel;
