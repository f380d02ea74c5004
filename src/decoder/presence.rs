//! What counts as a missing input.

use serde_json::Value;

/// Inputs that can be absent.
///
/// [`Decoder::optional`] and [`Decoder::required`] consult this trait before
/// running the wrapped decoder.
///
/// | input              | absent when                          |
/// |--------------------|--------------------------------------|
/// | `serde_json::Value`| `Value::Null` or `Value::String("")` |
/// | `Option<T>`        | `None`                               |
/// | `String`           | the string is empty                  |
///
/// Object decoders present a missing field as `Value::Null`, so a field that
/// is not in the input, a field set to `null` and a field set to `""` behave
/// the same. `false`, `0`, `[]` and `{}` are present.
///
/// [`Decoder::optional`]: crate::Decoder::optional
/// [`Decoder::required`]: crate::Decoder::required
pub trait Presence {
    /// Returns true when the input should be treated as missing.
    fn is_absent(&self) -> bool;
}

impl Presence for Value {
    fn is_absent(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(text) => text.is_empty(),
            _ => false,
        }
    }
}

impl<T> Presence for Option<T> {
    fn is_absent(&self) -> bool {
        self.is_none()
    }
}

impl Presence for String {
    fn is_absent(&self) -> bool {
        self.is_empty()
    }
}
