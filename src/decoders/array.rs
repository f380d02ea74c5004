//! Homogeneous array decoding.

use serde_json::Value;

use super::{type_error, Decoders};
use crate::decoder::{Decoder, DecoderRef};
use crate::result::{fail, product, valid, DecodeResult};

impl Decoders {
    /// Decodes every element of a JSON array with `element`.
    ///
    /// All elements are decoded even after one fails. Element errors are
    /// reported in index order with the index prefixed to their path. A
    /// non-array input fails with a single type error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verdict::Decoders;
    /// use serde_json::json;
    ///
    /// let numbers = Decoders::array(Decoders::number());
    /// assert!(numbers.parse(&json!([1, 2, 3])).is_success());
    ///
    /// let errors = numbers.parse(&json!([1, "2", 3, "4"])).into_result().unwrap_err();
    /// let paths: Vec<String> = errors.iter().map(|e| e.path.to_string()).collect();
    /// assert_eq!(paths, vec!["[1]", "[3]"]);
    /// ```
    pub fn array<O: 'static>(element: impl Into<DecoderRef<O>>) -> Decoder<Vec<O>> {
        let element: DecoderRef<O> = element.into();
        Decoder::new(move |value: &Value| {
            let items = match value.as_array() {
                Some(items) => items,
                None => return fail(type_error(value, "array")),
            };

            let decoder = element.resolve();
            let mut decoded: DecodeResult<Vec<O>> = valid(Vec::with_capacity(items.len()));
            for (index, item) in items.iter().enumerate() {
                let next = decoder.parse(item).map_err(|errors| errors.at_index(index));
                decoded = product(decoded, next).map(|(mut values, value)| {
                    values.push(value);
                    values
                });
            }
            decoded
        })
    }
}
