//! Integration tests for DecoderRegistry.

use serde_json::{json, Value};
use verdict::{Decoder, DecoderRegistry, Decoders, RegistryError, ResultExt};

fn object_of(registry: &DecoderRegistry, fields: &[(&str, &str)]) -> Decoder<Value> {
    fields
        .iter()
        .fold(Decoders::object(), |builder, (field, target)| {
            builder.field(*field, registry.reference(*target).optional())
        })
        .build()
        .map(Value::Object)
}

#[test]
fn test_decode_with_registry() {
    let registry = DecoderRegistry::new();
    registry
        .register(
            "User",
            Decoders::object()
                .field("name", Decoders::string())
                .field("age", Decoders::integer())
                .build()
                .map(Value::Object),
        )
        .unwrap();

    let result = registry
        .decode("User", &json!({"name": "Alice", "age": 30}))
        .unwrap();
    assert!(result.is_success());

    let result = registry.decode("User", &json!({"name": 1})).unwrap();
    assert_eq!(result.as_failure().unwrap().len(), 2);
}

#[test]
fn test_decode_missing_decoder() {
    let registry = DecoderRegistry::default();
    let err = registry.decode("Nope", &json!({})).unwrap_err();
    assert_eq!(err.to_string(), "decoder 'Nope' not found");
}

#[test]
fn test_duplicate_registration_fails() {
    let registry = DecoderRegistry::new();
    registry
        .register("Id", Decoders::integer().map(Value::from))
        .unwrap();

    let err = registry
        .register("Id", Decoders::integer().map(Value::from))
        .unwrap_err();
    assert!(matches!(err, RegistryError::DuplicateName(_)));
}

#[test]
fn test_mutually_recursive_decoders() {
    let registry = DecoderRegistry::new();

    registry
        .register(
            "A",
            Decoders::object()
                .field("name", Decoders::string())
                .field("b", registry.reference("B").optional())
                .build()
                .map(Value::Object),
        )
        .unwrap();
    registry
        .register(
            "B",
            Decoders::object()
                .field("value", Decoders::integer())
                .field("a", registry.reference("A").optional())
                .build()
                .map(Value::Object),
        )
        .unwrap();

    let valid = json!({
        "name": "First A",
        "b": {"value": 42, "a": {"name": "Nested A"}}
    });
    assert!(registry.decode("A", &valid).unwrap().is_success());

    let invalid = json!({
        "name": "First A",
        "b": {"value": "x", "a": {"name": 2}}
    });
    let result = registry.decode("A", &invalid).unwrap();
    let paths: Vec<String> = result
        .as_failure()
        .unwrap()
        .iter()
        .map(|e| e.path.to_string())
        .collect();
    assert_eq!(paths, vec!["b.value", "b.a.name"]);
}

#[test]
fn test_references_inside_arrays() {
    let registry = DecoderRegistry::new();
    registry
        .register(
            "Comment",
            Decoders::object()
                .field("text", Decoders::string())
                .field(
                    "replies",
                    Decoders::array(registry.reference("Comment")).optional(),
                )
                .build()
                .map(Value::Object),
        )
        .unwrap();

    let thread = json!({
        "text": "Top comment",
        "replies": [
            {"text": "Reply 1"},
            {"text": "Reply 2", "replies": [{"text": false}]}
        ]
    });

    let result = registry.decode("Comment", &thread).unwrap();
    let errors = result.as_failure().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors.first().path.to_string(), "replies[1].replies[0].text");
}

#[test]
fn test_unresolved_references() {
    let registry = DecoderRegistry::new();
    let order = object_of(
        &registry,
        &[
            ("customer", "Customer"),
            ("items", "Items"),
            ("bill_to", "Customer"),
        ],
    );
    registry.register("Order", order).unwrap();

    assert_eq!(registry.unresolved_references(), vec!["Customer", "Items"]);

    registry
        .register("Customer", Decoders::string().map(Value::String))
        .unwrap();
    assert_eq!(registry.unresolved_references(), vec!["Items"]);
}

#[test]
fn test_dangling_reference_fails_at_decode_time() {
    let registry = DecoderRegistry::new();
    registry
        .register("Order", object_of(&registry, &[("customer", "Customer")]))
        .unwrap();

    let result = registry
        .decode("Order", &json!({"customer": "Ada"}))
        .unwrap();
    let errors = result.as_failure().unwrap();
    assert_eq!(errors.first().code, "missing_reference");
    assert_eq!(errors.first().path.to_string(), "customer");

    // Absent optional reference never resolves the name.
    assert!(registry.decode("Order", &json!({})).unwrap().is_success());
}
