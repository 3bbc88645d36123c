//! Tests for fast hash feature flags.
//!
//! This module exercises associations under whichever hasher the `fxhash`
//! and `ahash` feature flags select, ensuring lookups stay deterministic.

use rstest::rstest;
use underbar::{Association, AssociationHasher, Key, Value};

// =============================================================================
// Determinism Tests
// =============================================================================

/// The same key retrieves its own entry in independently built associations.
#[rstest]
fn test_same_key_same_lookup() {
    let first = Association::new();
    first.insert(Key::from("key"), Value::from(1));
    let second = Association::new();
    second.insert(Key::from("key"), Value::from(2));

    assert_eq!(first.get(&Key::from("key")), Some(Value::from(1)));
    assert_eq!(second.get(&Key::from("key")), Some(Value::from(2)));

    let integers = Association::new();
    integers.insert(Key::from(42), Value::from(100));
    assert_eq!(integers.get(&Key::from(42)), Some(Value::from(100)));
}

/// Associations built from the same entries agree on every lookup.
#[rstest]
fn test_deterministic_lookup() {
    let entries = [("alpha", 1), ("beta", 2), ("gamma", 3), ("delta", 4)];
    let build = || -> Association {
        entries
            .iter()
            .map(|(key, value)| (Key::from(*key), Value::from(*value)))
            .collect()
    };
    let left = build();
    let right = build();

    for (key, value) in &entries {
        assert_eq!(left.get(&Key::from(*key)), Some(Value::from(*value)));
        assert_eq!(right.get(&Key::from(*key)), Some(Value::from(*value)));
    }
    assert_eq!(Value::Association(left), Value::Association(right));
}

/// Keys of different kinds never collide into one slot.
#[rstest]
fn test_key_kinds_are_distinct() {
    let association = Association::new();
    association.insert(Key::from("1"), Value::from("string"));
    association.insert(Key::from(1), Value::from("integer"));
    association.insert(Key::from(true), Value::from("boolean"));

    assert_eq!(association.len(), 3);
    assert_eq!(association.get(&Key::from("1")), Some(Value::from("string")));
    assert_eq!(association.get(&Key::from(1)), Some(Value::from("integer")));
    assert_eq!(association.get(&Key::from(true)), Some(Value::from("boolean")));
}

// =============================================================================
// Volume Tests
// =============================================================================

#[rstest]
#[case(10)]
#[case(1_000)]
#[case(10_000)]
fn test_many_entries(#[case] count: i64) {
    let association = Association::new();
    for index in 0..count {
        association.insert(Key::from(index), Value::from(index * 2));
    }
    assert_eq!(association.len(), usize::try_from(count).unwrap());
    for index in (0..count).step_by(7) {
        assert_eq!(association.get(&Key::from(index)), Some(Value::from(index * 2)));
    }
}

#[rstest]
fn test_remove_after_many_inserts() {
    let association = Association::new();
    for index in 0..500_i64 {
        association.insert(Key::from(format!("key{index}")), Value::from(index));
    }
    for index in (0..500_i64).filter(|index| index % 2 == 0) {
        assert_eq!(association.remove(&Key::from(format!("key{index}"))), Some(Value::from(index)));
    }
    assert_eq!(association.len(), 250);
    assert!(!association.contains_key(&Key::from("key0")));
    assert!(association.contains_key(&Key::from("key1")));
}

// =============================================================================
// Hasher Selection
// =============================================================================

#[rstest]
fn test_hasher_builds_by_default() {
    let _hasher = AssociationHasher::default();
}
