//! Object decoding.
//!
//! This module provides [`ObjectDecoder`], the builder behind
//! [`Decoders::object`], and the single-field projection [`Decoders::field`].

use indexmap::IndexMap;
use serde_json::{Map, Value};

use super::{type_error, Decoders};
use crate::decoder::{Decoder, DecoderRef};
use crate::error::DecodeError;
use crate::path::JsonPath;
use crate::result::{fail, product, valid, DecodeResult};

static NULL: Value = Value::Null;

/// Builder for decoders of JSON objects with named fields.
///
/// Every declared field is decoded, even after an earlier field fails, and
/// all failures are reported in declaration order with the field name
/// prefixed to their paths. A field missing from the input is decoded from
/// `Value::Null`, so a plain decoder rejects it and an
/// [`optional`](Decoder::optional) one accepts it.
///
/// Undeclared keys are ignored and dropped from the output unless
/// [`deny_unknown_fields`](ObjectDecoder::deny_unknown_fields) is set.
///
/// # Example
///
/// ```rust
/// use verdict::Decoders;
/// use serde_json::json;
///
/// let decoder = Decoders::object()
///     .field("a", Decoders::number())
///     .field("b", Decoders::string())
///     .build();
///
/// let errors = decoder.parse(&json!({"a": "x", "b": 1})).into_result().unwrap_err();
/// let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
/// assert_eq!(paths, vec!["a", "b"]);
/// ```
#[derive(Clone, Default)]
pub struct ObjectDecoder {
    fields: IndexMap<String, Decoder<Value>>,
    deny_unknown: bool,
}

impl ObjectDecoder {
    /// Creates an object decoder with no fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares a field.
    ///
    /// Declaring the same name twice replaces the earlier decoder but keeps
    /// its position.
    pub fn field<T>(mut self, name: impl Into<String>, decoder: impl Into<DecoderRef<T>>) -> Self
    where
        T: Into<Value> + 'static,
    {
        let decoder: DecoderRef<T> = decoder.into();
        self.fields.insert(name.into(), decoder.into_decoder().map(Into::into));
        self
    }

    /// Rejects keys that were not declared, one `unknown_field` error each.
    pub fn deny_unknown_fields(mut self) -> Self {
        self.deny_unknown = true;
        self
    }

    /// Finishes the builder.
    pub fn build(self) -> Decoder<Map<String, Value>> {
        Decoder::new(move |value: &Value| match value.as_object() {
            Some(object) => self.decode_fields(object),
            None => fail(type_error(value, "object")),
        })
    }

    fn decode_fields(&self, object: &Map<String, Value>) -> DecodeResult<Map<String, Value>> {
        let mut decoded: DecodeResult<Map<String, Value>> = valid(Map::new());

        for (name, decoder) in &self.fields {
            let input = object.get(name).unwrap_or(&NULL);
            let next = decoder.parse(input).map_err(|errors| errors.at_field(name));
            decoded = product(decoded, next).map(|(mut output, value)| {
                output.insert(name.clone(), value);
                output
            });
        }

        if self.deny_unknown {
            for (key, value) in object {
                if self.fields.contains_key(key) {
                    continue;
                }
                let error = DecodeError::new(value.clone(), format!("Unexpected field {}", key))
                    .with_code("unknown_field")
                    .at_path(JsonPath::from_field(key.as_str()));
                decoded = product(decoded, fail::<()>(error)).map(|(output, ())| output);
            }
        }

        decoded
    }
}

impl std::fmt::Debug for ObjectDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObjectDecoder")
            .field("fields", &self.fields.keys().collect::<Vec<_>>())
            .field("deny_unknown", &self.deny_unknown)
            .finish()
    }
}

impl From<ObjectDecoder> for Decoder<Map<String, Value>> {
    fn from(builder: ObjectDecoder) -> Self {
        builder.build()
    }
}

impl From<ObjectDecoder> for DecoderRef<Map<String, Value>> {
    fn from(builder: ObjectDecoder) -> Self {
        DecoderRef::Direct(builder.build())
    }
}

impl Decoders {
    /// Starts an [`ObjectDecoder`].
    pub fn object() -> ObjectDecoder {
        ObjectDecoder::new()
    }

    /// Decodes one field of an object with a typed decoder.
    ///
    /// Non-object input fails with a single type error. A missing field is
    /// decoded from `Value::Null`. Errors carry the field name in their path.
    /// Pair fields with [`zip`](Decoder::zip) to build typed structs:
    ///
    /// ```rust
    /// use verdict::Decoders;
    /// use verdict::result::valid;
    /// use serde_json::json;
    ///
    /// #[derive(Debug, PartialEq)]
    /// struct Point { x: i64, y: i64 }
    ///
    /// let point = Decoders::field("x", Decoders::integer())
    ///     .zip(Decoders::field("y", Decoders::integer()))
    ///     .map(|(x, y)| Point { x, y });
    ///
    /// assert_eq!(point.parse(&json!({"x": 1, "y": 2})), valid(Point { x: 1, y: 2 }));
    /// ```
    pub fn field<T: 'static>(
        name: impl Into<String>,
        decoder: impl Into<DecoderRef<T>>,
    ) -> Decoder<T> {
        let name: String = name.into();
        let decoder: DecoderRef<T> = decoder.into();
        Decoder::new(move |value: &Value| match value.as_object() {
            Some(object) => {
                let input = object.get(&name).unwrap_or(&NULL);
                decoder.resolve().parse(input).map_err(|errors| errors.at_field(&name))
            }
            None => fail(type_error(value, "object")),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ResultExt;
    use serde_json::json;

    fn paths<T>(result: &DecodeResult<T>) -> Vec<String> {
        result
            .as_failure()
            .map(|e| e.iter().map(|e| e.path.to_string()).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_object_valid() {
        let decoder = Decoders::object()
            .field("name", Decoders::string())
            .field("age", Decoders::integer())
            .build();

        let result = decoder.parse(&json!({"name": "Jo", "age": 30, "extra": true}));
        let expected = json!({"name": "Jo", "age": 30});
        assert_eq!(result, valid(expected.as_object().unwrap().clone()));
    }

    #[test]
    fn test_object_keeps_declaration_order() {
        let decoder = Decoders::object()
            .field("z", Decoders::integer())
            .field("a", Decoders::integer())
            .build();

        let result = decoder.parse(&json!({"a": 1, "z": 2}));
        let keys: Vec<&String> = result.as_success().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }

    #[test]
    fn test_object_accumulates_every_field() {
        let decoder = Decoders::object()
            .field("a", Decoders::number())
            .field("b", Decoders::string())
            .build();

        let result = decoder.parse(&json!({"a": "x", "b": 1}));
        assert_eq!(paths(&result), vec!["a", "b"]);
    }

    #[test]
    fn test_object_missing_field_is_null() {
        let decoder = Decoders::object()
            .field("name", Decoders::string())
            .field("nickname", Decoders::string().optional())
            .build();

        let result = decoder.parse(&json!({}));
        let errors = result.as_failure().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().path.to_string(), "name");
        assert_eq!(errors.first().original_value, Value::Null);

        let result = decoder.parse(&json!({"name": "Jo"}));
        assert_eq!(result.as_success().unwrap().get("nickname"), Some(&Value::Null));
    }

    #[test]
    fn test_object_rejects_non_object() {
        let decoder = Decoders::object().field("a", Decoders::number()).build();
        let result = decoder.parse(&json!([1]));
        let errors = result.as_failure().unwrap();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.first().code, "invalid_type");
    }

    #[test]
    fn test_empty_object_decoder_accepts_any_object() {
        let decoder = Decoders::object().build();
        assert_eq!(decoder.parse(&json!({"a": 1})), valid(Map::new()));
    }

    #[test]
    fn test_nested_object_paths() {
        let decoder = Decoders::object()
            .field(
                "user",
                Decoders::object().field("emails", Decoders::array(Decoders::string())),
            )
            .build();

        let result = decoder.parse(&json!({"user": {"emails": ["a", 1]}}));
        assert_eq!(paths(&result), vec!["user.emails[1]"]);
    }

    #[test]
    fn test_deny_unknown_fields() {
        let decoder = Decoders::object()
            .field("a", Decoders::number())
            .deny_unknown_fields()
            .build();

        let result = decoder.parse(&json!({"a": "x", "b": 1, "c": 2}));
        let errors = result.as_failure().unwrap();
        assert_eq!(paths(&result), vec!["a", "b", "c"]);
        assert_eq!(errors.with_code("unknown_field").len(), 2);
    }

    #[test]
    fn test_field_projection() {
        let decoder = Decoders::field("age", Decoders::integer());
        assert_eq!(decoder.parse(&json!({"age": 3})), valid(3));
        assert_eq!(paths(&decoder.parse(&json!({"age": "3"}))), vec!["age"]);
        assert_eq!(paths(&decoder.parse(&json!({}))), vec!["age"]);
        assert_eq!(paths(&decoder.parse(&json!("age"))), vec![""]);
    }
}
