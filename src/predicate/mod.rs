//! Type predicates over [`Value`].
//!
//! These are the pure type tests the shape classifier is built on, exposed
//! as free functions so they can be passed around like any other
//! combinator helper.
//!
//! # Examples
//!
//! ```rust
//! use underbar::predicate::{is_array, is_empty, is_number, is_table};
//! use underbar::{association, sequence, Value};
//!
//! assert!(is_array(&sequence![1]));
//! assert!(is_table(&association! {}));
//! assert!(is_number(&Value::from(1.5)));
//! assert!(is_empty(&sequence![]));
//! assert!(!is_empty(&Value::Null));
//! ```

mod shape;

pub use shape::{Shape, classify};

use crate::Value;

macro_rules! type_predicates {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[inline]
                pub const fn [<is_ $name>](value: &Value) -> bool {
                    value.[<is_ $name>]()
                }
            )*
        }
    };
}

type_predicates! {
    /// Returns `true` if `value` is a sequence.
    array,
    /// Returns `true` if `value` is an association.
    table,
    /// Returns `true` if `value` is callable.
    function,
    /// Returns `true` if `value` is a string.
    string,
    /// Returns `true` if `value` is an integer.
    integer,
    /// Returns `true` if `value` is a float.
    float,
    /// Returns `true` if `value` is an integer or a float.
    number,
    /// Returns `true` if `value` is a boolean.
    boolean,
    /// Returns `true` if `value` is `null`.
    null,
}

/// Returns `true` if `value` is a sequence with no elements or an
/// association with no entries.
///
/// Any other shape, `null` included, is not considered empty.
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Sequence(sequence) => sequence.is_empty(),
        Value::Association(association) => association.is_empty(),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Function, association, sequence};

    #[test]
    fn test_is_empty_ignores_non_containers() {
        assert!(!is_empty(&Value::from("")));
        assert!(!is_empty(&Value::from(0)));
        assert!(is_empty(&association! {}));
        assert!(!is_empty(&sequence![Value::Null]));
    }

    #[test]
    fn test_number_predicates() {
        assert!(is_integer(&Value::from(3)));
        assert!(!is_integer(&Value::from(3.0)));
        assert!(is_float(&Value::from(3.0)));
        assert!(is_number(&Value::from(3)));
        assert!(!is_number(&Value::from("3")));
    }

    #[test]
    fn test_function_predicate() {
        assert!(is_function(&Value::from(Function::lift(|_| Value::Null))));
        assert!(!is_function(&Value::Null));
    }

    #[test]
    fn test_classify_matches_predicates() {
        for value in [sequence![], association! {}, Value::Null, Value::from(true)] {
            assert_eq!(classify(&value) == Shape::Sequence, is_array(&value));
            assert_eq!(classify(&value) == Shape::Association, is_table(&value));
        }
    }
}
