//! Left-to-right shallow merges into a destination association.

use std::ops::ControlFlow;

use crate::combinator::visit;
use crate::predicate::classify;
use crate::{Association, Key, Value};

fn merge_into<F>(operation: &'static str, destination: &Value, sources: &[Value], mut accepts: F) -> Value
where
    F: FnMut(&Association, &Key) -> bool,
{
    let Value::Association(target) = destination else {
        tracing::debug!(
            operation,
            shape = ?classify(destination),
            "destination is not an association; nothing merged"
        );
        return destination.clone();
    };
    for source in sources {
        if !classify(source).is_container() {
            tracing::debug!(operation, found = source.type_name(), "skipping merge source");
            continue;
        }
        visit(operation, source, |value, key| {
            if let Some(key) = Key::from_value(&key)
                && accepts(target, &key)
            {
                target.insert(key, value);
            }
            ControlFlow::Continue(())
        });
    }
    destination.clone()
}

/// Copies every entry of every source into `destination`, left to right,
/// and returns `destination`.
///
/// Later sources overwrite earlier ones on key collision. `null` (and any
/// non-container) sources are skipped. The destination is mutated in place.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, extend, Value};
///
/// let destination = association! { "name" => "moe" };
/// let returned = extend(&destination, &[association! { "age" => 50 }, Value::Null]);
/// assert!(returned.same(&destination));
/// assert_eq!(destination, association! { "name" => "moe", "age" => 50 });
/// ```
pub fn extend(destination: &Value, sources: &[Value]) -> Value {
    merge_into("extend", destination, sources, |_, _| true)
}

/// Fills the keys of `destination` that are absent (or `null`) from the
/// sources, left to right, and returns `destination`.
///
/// The first source to supply a key wins; later sources never overwrite
/// it, and keys already on `destination` are never touched.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, defaults};
///
/// let destination = association! { "a" => 1 };
/// defaults(
///     &destination,
///     &[association! { "a" => 2, "b" => 2 }, association! { "b" => 3, "c" => 4 }],
/// );
/// assert_eq!(destination, association! { "a" => 1, "b" => 2, "c" => 4 });
/// ```
pub fn defaults(destination: &Value, sources: &[Value]) -> Value {
    merge_into("defaults", destination, sources, |target, key| !target.contains_key(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{association, sequence};

    #[test]
    fn test_extend_later_source_wins() {
        let destination = association! {};
        extend(&destination, &[association! { "k" => 1 }, association! { "k" => 2 }]);
        assert_eq!(destination, association! { "k" => 2 });
    }

    #[test]
    fn test_extend_non_association_destination_is_untouched() {
        let destination = sequence![1];
        let returned = extend(&destination, &[association! { "k" => 1 }]);
        assert!(returned.same(&destination));
        assert_eq!(destination, sequence![1]);
    }

    #[test]
    fn test_extend_with_itself() {
        let destination = association! { "k" => 1 };
        extend(&destination, &[destination.clone()]);
        assert_eq!(destination, association! { "k" => 1 });
    }

    #[test]
    fn test_defaults_sequence_source_fills_indices() {
        let destination = association! { 0 => "kept" };
        defaults(&destination, &[sequence!["ignored", "filled"]]);
        assert_eq!(destination, association! { 0 => "kept", 1 => "filled" });
    }
}
