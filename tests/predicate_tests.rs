//! Integration tests for the type predicates and the shape classifier.

use rstest::rstest;
use underbar::{
    Function, Shape, Value, association, classify, is_array, is_boolean, is_empty, is_float,
    is_function, is_integer, is_null, is_number, is_string, is_table, sequence,
};

// =============================================================================
// Shape classification
// =============================================================================

#[rstest]
#[case(sequence![], Shape::Sequence)]
#[case(sequence![1, 2], Shape::Sequence)]
#[case(association! {}, Shape::Association)]
#[case(association! { "a" => 1 }, Shape::Association)]
#[case(Value::Null, Shape::Other)]
#[case(Value::from(true), Shape::Other)]
#[case(Value::from(0), Shape::Other)]
#[case(Value::from(1.5), Shape::Other)]
#[case(Value::from("string"), Shape::Other)]
#[case(Value::from(Function::identity()), Shape::Other)]
fn test_classify(#[case] value: Value, #[case] expected: Shape) {
    assert_eq!(classify(&value), expected);
    assert_eq!(Shape::of(&value).is_container(), expected != Shape::Other);
}

#[rstest]
fn test_classify_is_stable() {
    let value = sequence![association! { "nested" => true }];
    assert_eq!(classify(&value), classify(&value.clone()));
}

// =============================================================================
// Type predicates
// =============================================================================

#[rstest]
fn test_each_value_matches_exactly_one_type() {
    let samples = [
        Value::Null,
        Value::from(false),
        Value::from(3),
        Value::from(3.5),
        Value::from("text"),
        sequence![],
        association! {},
        Value::from(Function::identity()),
    ];
    for value in &samples {
        let matches = [
            is_null(value),
            is_boolean(value),
            is_integer(value),
            is_float(value),
            is_string(value),
            is_array(value),
            is_table(value),
            is_function(value),
        ];
        assert_eq!(matches.iter().filter(|matched| **matched).count(), 1, "{value:?}");
    }
}

#[rstest]
#[case(Value::from(1), true)]
#[case(Value::from(1.0), true)]
#[case(Value::from(f64::NAN), true)]
#[case(Value::from("1"), false)]
#[case(Value::Null, false)]
fn test_is_number(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(is_number(&value), expected);
}

// =============================================================================
// Emptiness
// =============================================================================

#[rstest]
#[case(sequence![], true)]
#[case(association! {}, true)]
#[case(sequence![Value::Null], false)]
#[case(association! { "a" => 0 }, false)]
#[case(Value::Null, false)]
#[case(Value::from(""), false)]
#[case(Value::from(0), false)]
fn test_is_empty(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(is_empty(&value), expected);
}

#[rstest]
fn test_association_with_only_null_values_is_empty() {
    assert!(is_empty(&association! { "gone" => Value::Null }));
}

// =============================================================================
// Truthiness
// =============================================================================

#[rstest]
#[case(Value::Null, false)]
#[case(Value::from(false), false)]
#[case(Value::from(0), false)]
#[case(Value::from(0.0), false)]
#[case(Value::from(f64::NAN), false)]
#[case(Value::from(true), true)]
#[case(Value::from(-1), true)]
#[case(Value::from(""), true)]
#[case(sequence![], true)]
#[case(association! {}, true)]
fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
    assert_eq!(value.is_truthy(), expected);
    assert_eq!(value.is_falsy(), !expected);
}
