//! Falsy removal and nesting removal.

use super::slice::sequence_of;
use crate::{Sequence, Value};

/// Returns the truthy elements, in order.
///
/// `null`, `false`, `0` and `0.0` are removed.
///
/// # Examples
///
/// ```rust
/// use underbar::{compact, sequence, Value};
///
/// let list = sequence![0, 1, false, 2, Value::Null, 3.0, 0.0, "a"];
/// assert_eq!(compact(&list), sequence![1, 2, 3.0, "a"]);
/// ```
pub fn compact(sequence: &Value) -> Value {
    let compacted = sequence_of("compact", sequence)
        .map(|sequence| {
            sequence
                .to_vec()
                .into_iter()
                .filter(Value::is_truthy)
                .collect::<Sequence>()
        })
        .unwrap_or_default();
    Value::Sequence(compacted)
}

/// Inlines nested sequences into a single fresh sequence, preserving order.
///
/// With `shallow` only the sequences directly inside `sequence` are
/// inlined; otherwise nesting is removed at every depth. Non-sequence
/// elements, associations included, pass through unchanged.
///
/// The walk uses an explicit stack, so depth is bounded only by memory. A
/// sequence that (directly or transitively) contains itself is emitted as
/// an element at the point where it would recurse.
///
/// # Examples
///
/// ```rust
/// use underbar::{flatten, sequence};
///
/// let nested = sequence![1, sequence![2, sequence![3, sequence![4]], 5]];
/// assert_eq!(flatten(&nested, false), sequence![1, 2, 3, 4, 5]);
/// assert_eq!(flatten(&nested, true), sequence![1, 2, sequence![3, sequence![4]], 5]);
/// ```
pub fn flatten(sequence: &Value, shallow: bool) -> Value {
    let Some(root) = sequence_of("flatten", sequence) else {
        return Value::Sequence(Sequence::new());
    };
    let mut output = Vec::with_capacity(root.len());
    let mut active = vec![root.address()];
    let mut stack = vec![root.to_vec().into_iter()];
    while let Some(frame) = stack.last_mut() {
        match frame.next() {
            None => {
                stack.pop();
                active.pop();
            }
            Some(Value::Sequence(nested))
                if (!shallow || stack.len() == 1) && !active.contains(&nested.address()) =>
            {
                active.push(nested.address());
                stack.push(nested.to_vec().into_iter());
            }
            Some(element) => output.push(element),
        }
    }
    Value::from(output)
}
