//! Mapping and folding.

use std::ops::ControlFlow;

use smallvec::smallvec;

use super::each::{arguments, traverse};
use crate::value::{Arguments, Callback};
use crate::{Sequence, UnderbarError, Value};

/// Collects `iterator(value, index_or_key, container)` for every element
/// into a fresh sequence.
///
/// For an association the results are appended in traversal order, so the
/// output carries no key information. Anything other than a container
/// yields an empty sequence.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any callback error.
///
/// # Examples
///
/// ```rust
/// use underbar::{map, sequence, Function, Value};
///
/// let double = Value::from(Function::lift(|arguments| match &arguments[0] {
///     Value::Integer(integer) => Value::from(integer * 2),
///     _ => Value::Null,
/// }));
/// assert_eq!(map(&sequence![1, 2, 3], &double, None).unwrap(), sequence![2, 4, 6]);
/// ```
pub fn map(container: &Value, iterator: &Value, context: Option<&Value>) -> Result<Value, UnderbarError> {
    let callback = Callback::new("map", iterator, context);
    let results = Sequence::new();
    traverse("map", container, |element, index| {
        results.push(callback.call(&arguments(element, index, container))?);
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(Value::Sequence(results))
}

fn fold_arguments(memo: Value, element: Value, index: Value, container: &Value) -> Arguments {
    smallvec![memo, element, index, container.clone()]
}

/// Left fold: threads `memo` through `iterator(memo, value, index_or_key,
/// container)` and returns the final memo.
///
/// The seed is mandatory; no identity element is guessed. A `null` (or any
/// non-container) input is treated as empty and returns `memo` unchanged.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any callback error.
///
/// # Examples
///
/// ```rust
/// use underbar::{reduce, sequence, Function, Value};
///
/// let add = Value::from(Function::lift(|arguments| {
///     match (&arguments[0], &arguments[1]) {
///         (Value::Integer(memo), Value::Integer(element)) => Value::from(memo + element),
///         _ => Value::Null,
///     }
/// }));
/// assert_eq!(
///     reduce(&sequence![1, 2, 3, 4], &add, Value::from(0), None).unwrap(),
///     Value::from(10)
/// );
/// assert_eq!(reduce(&Value::Null, &add, Value::from(7), None).unwrap(), Value::from(7));
/// ```
pub fn reduce(
    container: &Value,
    iterator: &Value,
    memo: Value,
    context: Option<&Value>,
) -> Result<Value, UnderbarError> {
    let callback = Callback::new("reduce", iterator, context);
    let mut accumulator = memo;
    traverse("reduce", container, |element, index| {
        let previous = std::mem::take(&mut accumulator);
        accumulator = callback.call(&fold_arguments(previous, element, index, container))?;
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(accumulator)
}

/// Right fold: like [`reduce`] but visits elements from last to first.
///
/// For an association "last" means last in traversal order.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any callback error.
///
/// # Examples
///
/// ```rust
/// use underbar::{reduce_right, sequence, Function, Value};
///
/// let concatenate = Value::from(Function::lift(|arguments| {
///     let memo = arguments[0].as_str().unwrap_or_default();
///     let element = arguments[1].as_str().unwrap_or_default();
///     Value::from(format!("{memo}{element}"))
/// }));
/// assert_eq!(
///     reduce_right(&sequence!["a", "b", "c"], &concatenate, Value::from(""), None).unwrap(),
///     Value::from("cba")
/// );
/// ```
pub fn reduce_right(
    container: &Value,
    iterator: &Value,
    memo: Value,
    context: Option<&Value>,
) -> Result<Value, UnderbarError> {
    let callback = Callback::new("reduce_right", iterator, context);
    let mut visits = Vec::new();
    traverse("reduce_right", container, |element, index| {
        visits.push((element, index));
        Ok(ControlFlow::Continue(()))
    })?;
    visits
        .into_iter()
        .rev()
        .try_fold(memo, |accumulator, (element, index)| {
            callback.call(&fold_arguments(accumulator, element, index, container))
        })
}
