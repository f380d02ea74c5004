//! # Verdict
//!
//! Composable decoders that turn untrusted input into typed data, or into
//! the complete list of everything wrong with it.
//!
//! ## Overview
//!
//! A decoder is a value wrapping one function from an input to a
//! [`DecodeResult`]: either the decoded output or a non-empty list of
//! [`DecodeError`]s. Decoders are combined with ordinary methods and
//! functions. Independent parts of the input (the fields of an object, the
//! elements of an array) are always decoded in full, and their errors are
//! accumulated through stillwater's `Validation` instead of stopping at the
//! first failure.
//!
//! ## Core Types
//!
//! - [`Decoder`]: the reusable decoding function and its combinators
//! - [`Decoders`]: entry point for the built-in decoders
//! - [`DecodeError`]: a single rejection with the original value, reason,
//!   path (e.g. `users[0].email`) and code
//! - [`DecodeErrors`]: a non-empty collection of decode errors
//! - [`DecoderRegistry`]: named decoders and by-name references
//!
//! ## Example
//!
//! ```rust
//! use verdict::{Decoders, DecodeResult};
//! use serde_json::json;
//! use stillwater::Validation;
//!
//! #[derive(Debug, PartialEq)]
//! struct User {
//!     name: String,
//!     age: i64,
//! }
//!
//! let user = Decoders::field("name", Decoders::string())
//!     .zip(Decoders::field("age", Decoders::integer()))
//!     .map(|(name, age)| User { name, age });
//!
//! let result: DecodeResult<User> = user.parse(&json!({"name": "Ada", "age": 36}));
//! assert!(result.is_success());
//!
//! match user.parse(&json!({"name": 1, "age": "old"})) {
//!     Validation::Failure(errors) => {
//!         assert_eq!(errors.len(), 2);
//!         assert_eq!(errors.first().path.to_string(), "name");
//!     }
//!     Validation::Success(_) => unreachable!(),
//! }
//! ```

pub mod adapter;
pub mod decoder;
pub mod decoders;
pub mod error;
pub mod path;
pub mod registry;
pub mod result;

pub use decoder::{lazy, Decoder, DecoderRef, Presence};
pub use decoders::{Decoders, ObjectDecoder};
pub use error::{DecodeError, DecodeErrors};
pub use path::{JsonPath, PathSegment};
pub use registry::{DecoderRegistry, RegistryError};
pub use result::{DecodeResult, ResultExt};
