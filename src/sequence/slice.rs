//! Position-based slicing.

use crate::predicate::classify;
use crate::{Sequence, Value};

/// Returns the sequence handle, logging and returning `None` for any other
/// shape.
pub(crate) fn sequence_of<'a>(operation: &'static str, value: &'a Value) -> Option<&'a Sequence> {
    match value {
        Value::Sequence(sequence) => Some(sequence),
        other => {
            tracing::debug!(
                operation,
                shape = ?classify(other),
                found = other.type_name(),
                "expected a sequence"
            );
            None
        }
    }
}

/// Clamps a caller-supplied count into `0..=length`.
fn clamp_count(count: i64, length: usize) -> usize {
    if count <= 0 {
        0
    } else {
        usize::try_from(count).map_or(length, |count| count.min(length))
    }
}

fn slice_with<F>(operation: &'static str, value: &Value, bounds: F) -> Value
where
    F: FnOnce(usize) -> std::ops::Range<usize>,
{
    let sliced = sequence_of(operation, value)
        .map(|sequence| sequence.slice(bounds(sequence.len())))
        .unwrap_or_default();
    Value::Sequence(sliced)
}

/// Returns the first `count` elements as a fresh sequence.
///
/// `count <= 0` yields an empty sequence; a count beyond the length yields
/// a copy of the whole sequence. Pass `1` for the conventional default.
///
/// # Examples
///
/// ```rust
/// use underbar::{first, sequence};
///
/// let list = sequence![5, 4, 3, 2, 1];
/// assert_eq!(first(&list, 1), sequence![5]);
/// assert_eq!(first(&list, 3), sequence![5, 4, 3]);
/// assert_eq!(first(&list, 0), sequence![]);
/// assert_eq!(first(&list, 99), list);
/// ```
pub fn first(sequence: &Value, count: i64) -> Value {
    slice_with("first", sequence, |length| 0..clamp_count(count, length))
}

/// Returns the last `count` elements as a fresh sequence, clamped like
/// [`first`].
///
/// # Examples
///
/// ```rust
/// use underbar::{last, sequence};
///
/// let list = sequence![5, 4, 3, 2, 1];
/// assert_eq!(last(&list, 2), sequence![2, 1]);
/// assert_eq!(last(&list, -1), sequence![]);
/// ```
pub fn last(sequence: &Value, count: i64) -> Value {
    slice_with("last", sequence, |length| {
        (length - clamp_count(count, length))..length
    })
}

/// Returns everything but the last `count` elements.
///
/// A `count` that is not positive, or that would drop the whole sequence
/// (`count >= length`), drops nothing: the result is a copy of the whole
/// sequence. Pass `1` for the conventional default.
///
/// # Examples
///
/// ```rust
/// use underbar::{initial, sequence};
///
/// let list = sequence![5, 4, 3, 2, 1];
/// assert_eq!(initial(&list, 1), sequence![5, 4, 3, 2]);
/// assert_eq!(initial(&list, 3), sequence![5, 4]);
/// assert_eq!(initial(&list, 5), list);
/// ```
pub fn initial(sequence: &Value, count: i64) -> Value {
    slice_with("initial", sequence, |length| {
        let dropped = clamp_count(count, length);
        let dropped = if dropped >= length { 0 } else { dropped };
        0..(length - dropped)
    })
}

/// Returns the elements from position `index` onward.
///
/// `index < 1` returns the whole sequence; an index past the end returns an
/// empty one. Pass `1` for the conventional default, which drops the first
/// element.
///
/// # Examples
///
/// ```rust
/// use underbar::{rest, sequence};
///
/// let list = sequence![5, 4, 3, 2, 1];
/// assert_eq!(rest(&list, 1), sequence![4, 3, 2, 1]);
/// assert_eq!(rest(&list, 3), sequence![2, 1]);
/// assert_eq!(rest(&list, 0), list);
/// assert_eq!(rest(&list, 10), sequence![]);
/// ```
pub fn rest(sequence: &Value, index: i64) -> Value {
    slice_with("rest", sequence, |length| {
        let start = if index < 1 { 0 } else { clamp_count(index, length) };
        start..length
    })
}
