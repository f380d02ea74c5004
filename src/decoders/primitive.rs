//! Type guards over `serde_json::Value` and constant decoders.

use serde_json::Value;

use super::{type_error, Decoders};
use crate::decoder::Decoder;
use crate::error::DecodeError;
use crate::result::{fail, valid, DecodeResult};

impl Decoders {
    /// Accepts JSON strings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Decoders;
    /// use serde_json::json;
    ///
    /// assert!(Decoders::string().parse(&json!("a")).is_success());
    /// assert!(Decoders::string().parse(&json!(1)).is_failure());
    /// ```
    pub fn string() -> Decoder<String> {
        Decoder::new(|value: &Value| match value.as_str() {
            Some(text) => valid(text.to_string()),
            None => fail(type_error(value, "string")),
        })
    }

    /// Accepts any JSON number as `f64`. Numeric strings are rejected.
    pub fn number() -> Decoder<f64> {
        Decoder::new(|value: &Value| match value.as_f64() {
            Some(number) => valid(number),
            None => fail(type_error(value, "number")),
        })
    }

    /// Accepts JSON numbers that fit in an `i64` without a fractional part.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Decoders;
    /// use serde_json::json;
    ///
    /// assert!(Decoders::integer().parse(&json!(42)).is_success());
    /// assert!(Decoders::integer().parse(&json!(1.5)).is_failure());
    /// ```
    pub fn integer() -> Decoder<i64> {
        Decoder::new(|value: &Value| match value.as_i64() {
            Some(number) => valid(number),
            None => fail(type_error(value, "integer")),
        })
    }

    /// Accepts JSON booleans. The strings `"true"` and `"false"` are rejected;
    /// use [`parse_bool`](Decoders::parse_bool) for those.
    pub fn boolean() -> Decoder<bool> {
        Decoder::new(|value: &Value| match value.as_bool() {
            Some(flag) => valid(flag),
            None => fail(type_error(value, "boolean")),
        })
    }

    /// Renders any value as text. Never fails.
    ///
    /// Strings are returned as-is; everything else is rendered as JSON.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Decoders;
    /// use verdict::result::valid;
    /// use serde_json::json;
    ///
    /// assert_eq!(Decoders::to_string().parse(&json!("a")), valid("a".to_string()));
    /// assert_eq!(Decoders::to_string().parse(&json!(1)), valid("1".to_string()));
    /// ```
    pub fn to_string() -> Decoder<String> {
        Decoder::new(|value: &Value| match value {
            Value::String(text) => valid(text.clone()),
            other => valid(other.to_string()),
        })
    }

    /// Ignores the input and succeeds with `value`.
    pub fn lit<O, I>(value: O) -> Decoder<O, I>
    where
        O: Clone + Send + Sync + 'static,
        I: 'static,
    {
        Decoder::new(move |_: &I| valid(value.clone()))
    }

    /// Ignores the input and fails with `error`.
    pub fn failure<O, I>(error: DecodeError) -> Decoder<O, I>
    where
        O: 'static,
        I: 'static,
    {
        Decoder::new(move |_: &I| fail(error.clone()))
    }

    /// Builds a decoder from a function. Same as [`Decoder::new`].
    pub fn from<O, I, F>(f: F) -> Decoder<O, I>
    where
        O: 'static,
        I: 'static,
        F: Fn(&I) -> DecodeResult<O> + Send + Sync + 'static,
    {
        Decoder::new(f)
    }
}
