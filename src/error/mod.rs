//! Error types for decode failures.
//!
//! This module provides the error value every rejection is reported as, and
//! the non-empty list failures carry.

mod decode_error;

pub use decode_error::{DecodeError, DecodeErrors};
