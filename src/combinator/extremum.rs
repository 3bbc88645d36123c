//! Extremum scans and sizing.

use std::cmp::Ordering;
use std::ops::ControlFlow;

use super::each::{arguments, traverse};
use crate::value::Callback;
use crate::{UnderbarError, Value};

fn extremum(
    operation: &'static str,
    container: &Value,
    ranking: Option<&Value>,
    context: Option<&Value>,
    wanted: Ordering,
) -> Result<Value, UnderbarError> {
    let callback = ranking.map(|ranking| Callback::new(operation, ranking, context));
    let mut best: Option<(Value, Value)> = None;
    traverse(operation, container, |element, index| {
        let rank = match &callback {
            Some(callback) => callback.call(&arguments(element.clone(), index, container))?,
            None => element.clone(),
        };
        let replaces = best
            .as_ref()
            .is_none_or(|(_, best_rank)| rank.compare(best_rank) == Some(wanted));
        if replaces {
            best = Some((element, rank));
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(best.map_or(Value::Null, |(element, _)| element))
}

/// Returns the greatest element, or `null` for empty input.
///
/// With a `ranking` function, elements are compared by
/// `ranking(element, index_or_key, container)` and the winning element
/// (not its rank) is returned; without one, elements are compared
/// directly. The comparison is strict, so the first of several equal
/// extrema wins. Pairs that [`Value::compare`] cannot order never replace
/// the current candidate.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any error of `ranking`.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, max, sequence, Function, Key, Value};
///
/// assert_eq!(max(&sequence![3, 9, 2], None, None).unwrap(), Value::from(9));
///
/// let age = Value::from(Function::lift(|arguments| {
///     arguments[0].get(&Key::from("age")).unwrap_or_default()
/// }));
/// let people = sequence![
///     association! { "name" => "moe", "age" => 40 },
///     association! { "name" => "larry", "age" => 50 },
/// ];
/// let oldest = max(&people, Some(&age), None).unwrap();
/// assert_eq!(oldest.get(&Key::from("name")), Some(Value::from("larry")));
/// ```
pub fn max(container: &Value, ranking: Option<&Value>, context: Option<&Value>) -> Result<Value, UnderbarError> {
    extremum("max", container, ranking, context, Ordering::Greater)
}

/// Returns the least element, or `null` for empty input.
///
/// The mirror image of [`max`], with the same tie-break and ranking rules.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any error of `ranking`.
pub fn min(container: &Value, ranking: Option<&Value>, context: Option<&Value>) -> Result<Value, UnderbarError> {
    extremum("min", container, ranking, context, Ordering::Less)
}

/// Returns the length of a sequence or the entry count of an association;
/// `0` for anything else.
pub fn size(container: &Value) -> usize {
    match container {
        Value::Sequence(sequence) => sequence.len(),
        Value::Association(association) => association.len(),
        _ => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Function, association, sequence};

    #[test]
    fn test_first_extremum_wins_ties() {
        let first = sequence![1];
        let second = sequence![1];
        let length = Value::from(Function::lift(|arguments| Value::from(size(&arguments[0]))));
        let list = Value::from(vec![first.clone(), second]);
        let winner = max(&list, Some(&length), None).unwrap();
        assert!(winner.same(&first));
    }

    #[test]
    fn test_empty_input_yields_null() {
        assert_eq!(max(&sequence![], None, None), Ok(Value::Null));
        assert_eq!(min(&Value::Null, None, None), Ok(Value::Null));
    }

    #[test]
    fn test_min_over_association_values() {
        assert_eq!(min(&association! { "a" => 4, "b" => -2 }, None, None), Ok(Value::from(-2)));
    }

    #[test]
    fn test_incomparable_elements_never_replace() {
        assert_eq!(max(&sequence![2, "x", 1], None, None), Ok(Value::from(2)));
    }

    #[test]
    fn test_size_of_other_shape() {
        assert_eq!(size(&Value::from("abc")), 0);
        assert_eq!(size(&association! { "a" => 1, "b" => 2 }), 2);
    }
}
