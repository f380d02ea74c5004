//! Ready-made decoders and the structural combinators.
//!
//! [`Decoders`] is the entry point for building decoding logic. Its
//! constructors are grouped by concern:
//!
//! - primitive type guards over `serde_json::Value` (`string`, `number`,
//!   `integer`, `boolean`, `to_string`) and constant decoders (`lit`,
//!   `failure`, `from`)
//! - string conversions (`parse_int`, `parse_float`, `parse_bool`,
//!   `matches`) and `parse_date`
//! - structure: `array`, `object`, `field`
//!
//! Every structural combinator accumulates: an object with three invalid
//! fields produces three errors in one pass.
//!
//! # Example
//!
//! ```rust
//! use verdict::Decoders;
//! use serde_json::json;
//!
//! let person = Decoders::object()
//!     .field("name", Decoders::string())
//!     .field("age", Decoders::number())
//!     .field("nickname", Decoders::string().optional())
//!     .field(
//!         "occupation",
//!         Decoders::object()
//!             .field("title", Decoders::string())
//!             .field("start_date", Decoders::number()),
//!     )
//!     .build();
//!
//! let result = person.parse(&json!({
//!     "name": "Jolene",
//!     "age": 30,
//!     "occupation": { "title": "Devops Manager", "start_date": 180000000000u64 }
//! }));
//! assert!(result.is_success());
//!
//! let result = person.parse(&json!({ "name": 1, "age": "x", "occupation": {} }));
//! assert_eq!(result.into_result().unwrap_err().len(), 4);
//! ```

mod array;
mod convert;
mod object;
mod primitive;

pub use object::ObjectDecoder;

use serde_json::Value;

use crate::error::DecodeError;

/// Entry point for creating decoders.
///
/// `Decoders` is never instantiated; it only groups constructor functions.
pub struct Decoders;

/// The single error a type guard reports, e.g. `Expected string. Got: 1`.
pub(crate) fn type_error(value: &Value, expected: &str) -> DecodeError {
    DecodeError::new(value.clone(), format!("Expected {}. Got: {}", expected, value))
        .with_code("invalid_type")
}

/// The single error a text conversion reports, e.g. `Expected valid int. Got: a`.
pub(crate) fn format_error(text: &str, expected: &str) -> DecodeError {
    DecodeError::new(text, format!("Expected valid {}. Got: {}", expected, text))
        .with_code("invalid_format")
}
