#![cfg(feature = "serde")]

//! Integration tests for serde support in underbar.
//!
//! These tests verify that values serialize to and deserialize from JSON
//! with their natural shapes.

use rstest::rstest;
use underbar::{Function, Key, Value, association, sequence};

// =============================================================================
// Primitive Tests
// =============================================================================

#[rstest]
#[case(Value::Null, "null")]
#[case(Value::from(true), "true")]
#[case(Value::from(-7), "-7")]
#[case(Value::from(2.5), "2.5")]
#[case(Value::from("text"), "\"text\"")]
fn test_primitive_json(#[case] value: Value, #[case] json: &str) {
    assert_eq!(serde_json::to_string(&value).unwrap(), json);
    let restored: Value = serde_json::from_str(json).unwrap();
    assert_eq!(restored, value);
}

#[rstest]
fn test_large_unsigned_becomes_float() {
    let restored: Value = serde_json::from_str("18446744073709551615").unwrap();
    assert!(restored.is_float());
}

// =============================================================================
// Sequence Tests
// =============================================================================

#[rstest]
fn test_sequence_json_roundtrip() {
    let list = sequence![1, "two", sequence![3, Value::Null], false];
    let json = serde_json::to_string(&list).unwrap();
    assert_eq!(json, "[1,\"two\",[3,null],false]");

    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, list);
    assert!(!restored.same(&list));
}

#[rstest]
fn test_empty_sequence() {
    let json = serde_json::to_string(&sequence![]).unwrap();
    assert_eq!(json, "[]");
}

// =============================================================================
// Association Tests
// =============================================================================

#[rstest]
fn test_association_json_roundtrip() {
    let record = association! {
        "name" => "moe",
        "age" => 40,
        "tags" => sequence!["a", "b"],
        "nested" => association! { "deep" => true },
    };
    let json = serde_json::to_string(&record).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);
}

#[rstest]
fn test_json_null_fields_are_dropped() {
    let restored: Value = serde_json::from_str(r#"{"kept": 1, "gone": null}"#).unwrap();
    assert_eq!(restored, association! { "kept" => 1 });
    assert_eq!(restored.get(&Key::from("gone")), None);
}

#[rstest]
fn test_association_from_json_value() {
    let json = serde_json::json!({ "list": [1, 2, 3], "flag": false });
    let restored: Value = serde_json::from_value(json).unwrap();
    assert_eq!(restored, association! { "list" => sequence![1, 2, 3], "flag" => false });
}

#[rstest]
fn test_typed_keys_survive_json() {
    let record = association! { 1 => "one", true => "yes", "name" => "moe" };
    let json = serde_json::to_string(&record).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, record);
    assert_eq!(restored.get(&Key::from(1)), Some(Value::from("one")));
    assert_eq!(restored.get(&Key::from(true)), Some(Value::from("yes")));
}

#[rstest]
#[case(r#"{"7": 0}"#, Key::from(7))]
#[case(r#"{"-12": 0}"#, Key::from(-12))]
#[case(r#"{"false": 0}"#, Key::from(false))]
#[case(r#"{"07": 0}"#, Key::from("07"))]
#[case(r#"{"+3": 0}"#, Key::from("+3"))]
#[case(r#"{"True": 0}"#, Key::from("True"))]
#[case(r#"{"99999999999999999999": 0}"#, Key::from("99999999999999999999"))]
fn test_map_key_spelling(#[case] json: &str, #[case] expected: Key) {
    let restored: Value = serde_json::from_str(json).unwrap();
    assert_eq!(restored.get(&expected), Some(Value::from(0)));
}

#[rstest]
fn test_inverted_association_survives_json() {
    let inverted = underbar::invert(&association! { "a" => 1, "b" => 2 });
    let json = serde_json::to_string(&inverted).unwrap();
    let restored: Value = serde_json::from_str(&json).unwrap();
    assert_eq!(restored, inverted);
    assert_eq!(restored.get(&Key::from(2)), Some(Value::from("b")));
}

// =============================================================================
// Key Tests
// =============================================================================

#[rstest]
fn test_key_json() {
    assert_eq!(serde_json::to_string(&Key::from("k")).unwrap(), "\"k\"");
    assert_eq!(serde_json::to_string(&Key::from(3)).unwrap(), "3");
    let restored: Key = serde_json::from_str("4").unwrap();
    assert_eq!(restored, Key::from(4));
}

#[rstest]
fn test_key_rejects_containers() {
    assert!(serde_json::from_str::<Key>("[1]").is_err());
}

// =============================================================================
// Function Tests
// =============================================================================

#[rstest]
fn test_functions_do_not_serialize() {
    let record = association! { "call" => Function::identity() };
    let error = serde_json::to_string(&record).unwrap_err();
    assert!(error.to_string().contains("functions cannot be serialized"));
}
