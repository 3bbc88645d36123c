//! Building associations from sequences, and integer ranges.

use super::slice::sequence_of;
use crate::{Association, Key, Sequence, Value};

/// Builds an association from parallel keys and values, or from a list of
/// `[key, value]` pairs.
///
/// When `values` is given (and not `null`), `keys_or_pairs[i]` maps to the
/// `i`-th slot of `values`; keys without a corresponding value are dropped.
/// Otherwise every element of `keys_or_pairs` must itself be a sequence
/// whose first two elements are the key and the value. Elements that are
/// not pairs, and keys that cannot address an association slot, are
/// skipped.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, sequence, table};
///
/// let zipped = table(&sequence!["moe", "larry"], Some(&sequence![30, 40]));
/// assert_eq!(zipped, association! { "moe" => 30, "larry" => 40 });
///
/// let paired = table(&sequence![sequence!["one", 1], sequence!["two", 2]], None);
/// assert_eq!(paired, association! { "one" => 1, "two" => 2 });
/// ```
pub fn table(keys_or_pairs: &Value, values: Option<&Value>) -> Value {
    let association = Association::new();
    let Some(elements) = sequence_of("table", keys_or_pairs) else {
        return Value::Association(association);
    };
    for (index, element) in elements.to_vec().into_iter().enumerate() {
        let (key, value) = match values {
            Some(values) if !values.is_null() => {
                (element, values.get(&Key::index(index)).unwrap_or_default())
            }
            _ => match &element {
                Value::Sequence(pair) => (
                    pair.get(0).unwrap_or_default(),
                    pair.get(1).unwrap_or_default(),
                ),
                other => {
                    tracing::debug!(operation = "table", found = other.type_name(), "skipping non-pair element");
                    continue;
                }
            },
        };
        match Key::from_value(&key) {
            Some(key) => {
                association.insert(key, value);
            }
            None => {
                tracing::debug!(operation = "table", found = key.type_name(), "skipping unkeyable key");
            }
        }
    }
    Value::Association(association)
}

/// Returns the integers from `start` up to (but excluding) `stop`, moving
/// by `step`.
///
/// A negative `step` counts down; a zero `step`, or a `step` that moves
/// away from `stop`, yields an empty sequence.
///
/// # Examples
///
/// ```rust
/// use underbar::{range, sequence};
///
/// assert_eq!(range(0, 5, 1), sequence![0, 1, 2, 3, 4]);
/// assert_eq!(range(0, 10, 3), sequence![0, 3, 6, 9]);
/// assert_eq!(range(5, 0, -2), sequence![5, 3, 1]);
/// assert_eq!(range(0, 5, 0), sequence![]);
/// ```
pub fn range(start: i64, stop: i64, step: i64) -> Value {
    let sequence = Sequence::new();
    let mut current = start;
    while (step > 0 && current < stop) || (step < 0 && current > stop) {
        sequence.push(Value::from(current));
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    Value::Sequence(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{association, sequence};

    #[test]
    fn test_table_drops_keys_without_values() {
        let zipped = table(&sequence!["a", "b", "c"], Some(&sequence![1]));
        assert_eq!(zipped, association! { "a" => 1 });
    }

    #[test]
    fn test_table_skips_unkeyable_keys() {
        let zipped = table(&sequence![Value::Null, 1.5, "ok"], Some(&sequence![1, 2, 3]));
        assert_eq!(zipped, association! { "ok" => 3 });
    }

    #[test]
    fn test_table_null_values_means_pairs() {
        let paired = table(&sequence![sequence!["k", "v"], "loose"], Some(&Value::Null));
        assert_eq!(paired, association! { "k" => "v" });
    }

    #[test]
    fn test_table_later_pair_overwrites() {
        let paired = table(&sequence![sequence!["k", 1], sequence!["k", 2]], None);
        assert_eq!(paired, association! { "k" => 2 });
    }

    #[test]
    fn test_range_stops_on_overflow() {
        assert_eq!(range(i64::MAX - 1, i64::MAX, 5), sequence![i64::MAX - 1]);
    }
}
