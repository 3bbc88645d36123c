//! Key-based selection.

use std::ops::ControlFlow;

use crate::combinator::visit;
use crate::{Association, Key, Value};

/// Resolves a key argument list.
///
/// A first argument that is itself a sequence is the key list; otherwise
/// every argument is a key. Values that cannot be keys are dropped.
fn key_list(keys: &[Value]) -> Vec<Key> {
    let listed = match keys.first() {
        Some(Value::Sequence(list)) => list.to_vec(),
        _ => keys.to_vec(),
    };
    listed.iter().filter_map(Key::from_value).collect()
}

/// Returns a shallow copy holding only the listed keys that `container`
/// actually has.
///
/// `keys` is either a single sequence of keys or the keys themselves.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, pick, sequence, Value};
///
/// let record = association! { "a" => 1, "b" => 2, "c" => 3 };
/// assert_eq!(pick(&record, &[sequence!["a", "c"]]), association! { "a" => 1, "c" => 3 });
/// assert_eq!(pick(&record, &[Value::from("b"), Value::from("z")]), association! { "b" => 2 });
/// ```
pub fn pick(container: &Value, keys: &[Value]) -> Value {
    let picked = Association::new();
    for key in key_list(keys) {
        if let Some(value) = container.get(&key) {
            picked.insert(key, value);
        }
    }
    Value::Association(picked)
}

/// Returns a shallow copy without the listed keys.
///
/// Accepts the same key arguments as [`pick`].
///
/// # Examples
///
/// ```rust
/// use underbar::{association, omit, Value};
///
/// let record = association! { "a" => 1, "b" => 2, "c" => 3 };
/// assert_eq!(omit(&record, &[Value::from("b")]), association! { "a" => 1, "c" => 3 });
/// ```
pub fn omit(container: &Value, keys: &[Value]) -> Value {
    let omitted = key_list(keys);
    let kept = Association::new();
    visit("omit", container, |value, key| {
        if let Some(key) = Key::from_value(&key)
            && !omitted.contains(&key)
        {
            kept.insert(key, value);
        }
        ControlFlow::Continue(())
    });
    Value::Association(kept)
}

/// Returns `true` if `container` has a slot named `key`.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, has, sequence};
///
/// assert!(has(&association! { "a" => 1 }, "a"));
/// assert!(!has(&association! { "a" => 1 }, "b"));
/// assert!(has(&sequence!["x"], 0_usize));
/// ```
pub fn has(container: &Value, key: impl Into<Key>) -> bool {
    let key = key.into();
    match container {
        Value::Association(association) => association.contains_key(&key),
        other => other.get(&key).is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{association, sequence};

    #[test]
    fn test_key_list_prefers_leading_sequence() {
        assert_eq!(
            key_list(&[sequence!["a"], Value::from("b")]),
            vec![Key::from("a")]
        );
        assert_eq!(
            key_list(&[Value::from("a"), Value::from(2)]),
            vec![Key::from("a"), Key::Integer(2)]
        );
    }

    #[test]
    fn test_pick_is_a_fresh_association() {
        let record = association! { "a" => 1 };
        let picked = pick(&record, &[Value::from("a")]);
        assert!(!picked.same(&record));
        assert_eq!(picked, record);
    }

    #[test]
    fn test_omit_nothing_copies_everything() {
        let record = association! { "a" => 1, "b" => 2 };
        assert_eq!(omit(&record, &[]), record);
    }

    #[test]
    fn test_has_on_other_shape() {
        assert!(!has(&Value::Null, "a"));
    }
}
