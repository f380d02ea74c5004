//! Decode error types.
//!
//! This module provides [`DecodeError`] for a single rejected value and
//! [`DecodeErrors`], the non-empty, append-only list every failure is
//! expressed in.

use std::fmt::{self, Display};

use serde_json::Value;
use stillwater::prelude::*;

use crate::path::JsonPath;

/// A single decode failure.
///
/// `DecodeError` records:
/// - **original_value**: the input that was rejected
/// - **reason**: human-readable description of the failure
/// - **path**: where in the input the rejected value sits (root by default)
/// - **code**: machine-readable tag for programmatic handling
///
/// # Example
///
/// ```rust
/// use verdict::{DecodeError, JsonPath};
/// use serde_json::json;
///
/// let error = DecodeError::new(json!(42), "Expected string. Got: 42")
///     .with_code("invalid_type")
///     .at_path(JsonPath::from_field("name"));
///
/// assert_eq!(error.code, "invalid_type");
/// assert_eq!(error.to_string(), "name: Expected string. Got: 42");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeError {
    /// The value that failed to decode.
    pub original_value: Value,
    /// Human-readable reason for the rejection.
    pub reason: String,
    /// Location of the rejected value relative to the decoded input.
    pub path: JsonPath,
    /// Machine-readable error code (e.g. `invalid_type`, `required`).
    pub code: String,
}

impl DecodeError {
    /// Creates a new error at the root path.
    ///
    /// The error code defaults to "validation_error". Use `with_code` to set
    /// a more specific code.
    pub fn new(original_value: impl Into<Value>, reason: impl Into<String>) -> Self {
        Self {
            original_value: original_value.into(),
            reason: reason.into(),
            path: JsonPath::root(),
            code: "validation_error".to_string(),
        }
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the path and returns self for chaining.
    pub fn at_path(mut self, path: JsonPath) -> Self {
        self.path = path;
        self
    }

    /// Sets the reason and returns self for chaining.
    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = reason.into();
        self
    }
}

impl Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "{}", self.reason)
        } else {
            write!(f, "{}: {}", self.path, self.reason)
        }
    }
}

impl std::error::Error for DecodeError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<DecodeError>();
    assert_sync::<DecodeError>();
};

/// A non-empty, ordered collection of decode errors.
///
/// `DecodeErrors` wraps a `NonEmptyVec<DecodeError>`, so a failure can never
/// be constructed without at least one error. Lists only grow: errors are
/// concatenated in order (left before right) and never dropped.
///
/// # Combining Errors
///
/// ```rust
/// use verdict::{DecodeError, DecodeErrors};
/// use serde_json::Value;
///
/// let name = DecodeErrors::single(DecodeError::new(Value::Null, "name missing"));
/// let email = DecodeErrors::single(DecodeError::new(Value::Null, "email missing"));
///
/// let combined = DecodeErrors::concat(name, email);
/// assert_eq!(combined.len(), 2);
/// assert_eq!(combined.first().reason, "name missing");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DecodeErrors(NonEmptyVec<DecodeError>);

impl DecodeErrors {
    /// Creates a `DecodeErrors` containing a single error.
    pub fn single(error: DecodeError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Builds a list from a head error followed by any number of others.
    pub fn cons(head: DecodeError, tail: Vec<DecodeError>) -> Self {
        Self(NonEmptyVec::new(head, tail))
    }

    /// Appends `b` after `a`, preserving the order of both.
    pub fn concat(a: Self, b: Self) -> Self {
        a.combine(b)
    }

    /// Creates a `DecodeErrors` from a `NonEmptyVec` of errors.
    pub fn from_non_empty(errors: NonEmptyVec<DecodeError>) -> Self {
        Self(errors)
    }

    /// Creates a `DecodeErrors` from a `Vec`, or `None` if it is empty.
    pub fn from_vec(errors: Vec<DecodeError>) -> Option<Self> {
        NonEmptyVec::from_vec(errors).map(Self)
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &DecodeError {
        self.0.head()
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &DecodeError> {
        self.0.iter()
    }

    /// Returns the reasons of all errors, in order.
    pub fn reasons(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.reason.as_str()).collect()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &JsonPath) -> Vec<&DecodeError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors at `prefix` or anywhere beneath it.
    ///
    /// ```rust
    /// use verdict::{Decoders, JsonPath};
    /// use serde_json::json;
    ///
    /// let decoder = Decoders::object()
    ///     .field("user", Decoders::object().field("age", Decoders::integer()))
    ///     .field("id", Decoders::integer())
    ///     .build();
    ///
    /// let errors = decoder.parse(&json!({"user": {}})).into_result().unwrap_err();
    /// let user = errors.within(&JsonPath::from_field("user"));
    /// assert_eq!(user.len(), 1);
    /// assert_eq!(user[0].path.to_string(), "user.age");
    /// ```
    pub fn within(&self, prefix: &JsonPath) -> Vec<&DecodeError> {
        self.0.iter().filter(|e| e.path.starts_with(prefix)).collect()
    }

    /// Returns all errors with the specified error code.
    pub fn with_code(&self, code: &str) -> Vec<&DecodeError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Prefixes every error's path with a field segment.
    pub fn at_field(self, name: &str) -> Self {
        Self(self.0.map(|e| {
            let path = e.path.prepend_field(name);
            e.at_path(path)
        }))
    }

    /// Prefixes every error's path with an index segment.
    pub fn at_index(self, index: usize) -> Self {
        Self(self.0.map(|e| {
            let path = e.path.prepend_index(index);
            e.at_path(path)
        }))
    }

    /// Applies `f` to every error, keeping the list shape.
    pub fn map(self, f: impl FnMut(DecodeError) -> DecodeError) -> Self {
        Self(self.0.map(f))
    }

    /// Converts this collection into a `Vec<DecodeError>`.
    pub fn into_vec(self) -> Vec<DecodeError> {
        self.0.into_vec()
    }

    /// Returns a reference to the underlying `NonEmptyVec`.
    pub fn as_non_empty_vec(&self) -> &NonEmptyVec<DecodeError> {
        &self.0
    }
}

impl Semigroup for DecodeErrors {
    fn combine(self, other: Self) -> Self {
        DecodeErrors(self.0.combine(other.0))
    }
}

impl From<DecodeError> for DecodeErrors {
    fn from(error: DecodeError) -> Self {
        Self::single(error)
    }
}

impl Display for DecodeErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Decoding failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for DecodeErrors {}

impl IntoIterator for DecodeErrors {
    type Item = DecodeError;
    type IntoIter = std::vec::IntoIter<DecodeError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}

impl<'a> IntoIterator for &'a DecodeErrors {
    type Item = &'a DecodeError;
    type IntoIter = Box<dyn Iterator<Item = &'a DecodeError> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.0.iter())
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<DecodeErrors>();
    assert_sync::<DecodeErrors>();
};
