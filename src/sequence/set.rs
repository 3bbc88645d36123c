//! Exclusion and de-duplication by value.

use super::slice::sequence_of;
use crate::predicate::classify;
use crate::{Sequence, Value};

fn retain_absent(operation: &'static str, sequence: &Value, excluded: &[Value]) -> Value {
    let retained = sequence_of(operation, sequence)
        .map(|sequence| {
            sequence
                .to_vec()
                .into_iter()
                .filter(|element| !excluded.iter().any(|value| value.same(element)))
                .collect::<Sequence>()
        })
        .unwrap_or_default();
    Value::Sequence(retained)
}

/// Returns the elements of `sequence` that are not the [same](Value::same)
/// as any of `values`.
///
/// # Examples
///
/// ```rust
/// use underbar::{sequence, without, Value};
///
/// let list = sequence![1, 2, 1, 0, 3, 1, 4];
/// assert_eq!(without(&list, &[Value::from(0), Value::from(1)]), sequence![2, 3, 4]);
/// ```
pub fn without(sequence: &Value, values: &[Value]) -> Value {
    retain_absent("without", sequence, values)
}

/// Returns the elements of `sequence` absent from every sequence in
/// `others`.
///
/// `others` is concatenated before the comparison; entries of `others` that
/// are not sequences contribute nothing.
///
/// # Examples
///
/// ```rust
/// use underbar::{difference, sequence};
///
/// let list = sequence![1, 2, 3, 4, 5];
/// assert_eq!(
///     difference(&list, &[sequence![5, 2, 10], sequence![1]]),
///     sequence![3, 4]
/// );
/// ```
pub fn difference(sequence: &Value, others: &[Value]) -> Value {
    let mut excluded = Vec::new();
    for other in others {
        match other {
            Value::Sequence(values) => excluded.extend(values.to_vec()),
            skipped => tracing::debug!(
                operation = "difference",
                shape = ?classify(skipped),
                "skipping non-sequence exclusion source"
            ),
        }
    }
    retain_absent("difference", sequence, &excluded)
}

/// Returns the first occurrence of every distinct element, in order.
///
/// Distinctness uses [`Value::same`], so equal numbers collapse across the
/// integer/float split while structurally equal containers do not.
///
/// # Examples
///
/// ```rust
/// use underbar::{sequence, uniq};
///
/// assert_eq!(uniq(&sequence![1, 2, 1.0, 3, 2]), sequence![1, 2, 3]);
/// ```
pub fn uniq(sequence: &Value) -> Value {
    let Some(sequence) = sequence_of("uniq", sequence) else {
        return Value::Sequence(Sequence::new());
    };
    let mut distinct: Vec<Value> = Vec::new();
    for element in sequence.to_vec() {
        if !distinct.iter().any(|seen| seen.same(&element)) {
            distinct.push(element);
        }
    }
    Value::from(distinct)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence;

    #[test]
    fn test_without_compares_containers_by_identity() {
        let shared = sequence![1];
        let list = Value::from(vec![shared.clone(), sequence![1]]);
        assert_eq!(without(&list, &[shared]), sequence![sequence![1]]);
    }

    #[test]
    fn test_difference_skips_non_sequences() {
        let list = sequence![1, 2];
        assert_eq!(difference(&list, &[Value::from(1), Value::Null]), sequence![1, 2]);
    }

    #[test]
    fn test_without_nothing() {
        assert_eq!(without(&sequence![1, 2], &[]), sequence![1, 2]);
    }
}
