//! Integration tests for DecodeError and DecodeErrors.

use serde_json::{json, Value};
use stillwater::Semigroup;
use verdict::{DecodeError, DecodeErrors, Decoders, JsonPath};

fn err(reason: &str) -> DecodeError {
    DecodeError::new(Value::Null, reason)
}

#[test]
fn test_errors_are_never_empty() {
    assert!(DecodeErrors::from_vec(vec![]).is_none());

    let errors = DecodeErrors::single(err("only"));
    assert_eq!(errors.len(), 1);
    assert!(!errors.is_empty());
}

#[test]
fn test_combination_preserves_order_and_duplicates() {
    let left = DecodeErrors::cons(err("same"), vec![err("same")]);
    let right = DecodeErrors::single(err("same"));

    let combined = left.combine(right);
    assert_eq!(combined.reasons(), vec!["same", "same", "same"]);
}

#[test]
fn test_error_records_original_value() {
    let result = Decoders::number().parse(&json!({"nested": [1, 2]}));
    let errors = result.into_result().unwrap_err();

    assert_eq!(errors.first().original_value, json!({"nested": [1, 2]}));
    assert_eq!(errors.first().code, "invalid_type");
}

#[test]
fn test_filter_by_path_and_code() {
    let decoder = Decoders::object()
        .field("name", Decoders::string())
        .field("age", Decoders::integer())
        .field("tags", Decoders::array(Decoders::string()))
        .build();

    let errors = decoder
        .parse(&json!({"age": "x", "tags": ["a", 1, 2]}))
        .into_result()
        .unwrap_err();

    assert_eq!(errors.len(), 4);
    assert_eq!(errors.with_code("invalid_type").len(), 4);
    assert_eq!(errors.at_path(&JsonPath::from_field("age")).len(), 1);
    assert_eq!(
        errors.at_path(&JsonPath::root().prepend_index(2).prepend_field("tags")).len(),
        1
    );
    assert_eq!(errors.within(&JsonPath::from_field("tags")).len(), 2);
}

#[test]
fn test_display_is_readable() {
    let decoder = Decoders::object()
        .field("name", Decoders::string())
        .field("age", Decoders::number())
        .build();

    let errors = decoder.parse(&json!({"age": "x"})).into_result().unwrap_err();
    let message = errors.to_string();

    assert!(message.starts_with("Decoding failed with 2 error(s):"));
    assert!(message.contains("1. name: Expected string. Got: null"));
    assert!(message.contains("2. age: Expected number. Got: \"x\""));
}

#[test]
fn test_errors_usable_as_std_error() {
    fn check() -> Result<(), Box<dyn std::error::Error>> {
        Decoders::boolean().parse(&json!(1)).into_result()?;
        Ok(())
    }

    assert!(check().is_err());
}

#[test]
fn test_owned_iteration() {
    let errors = DecodeErrors::cons(err("a"), vec![err("b")]);
    let reasons: Vec<String> = errors.into_iter().map(|e| e.reason).collect();
    assert_eq!(reasons, vec!["a", "b"]);
}
