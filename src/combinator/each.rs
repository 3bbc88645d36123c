//! The iteration kernel.

use std::convert::Infallible;
use std::ops::ControlFlow;

use smallvec::smallvec;

use crate::predicate::classify;
use crate::value::{Arguments, Callback};
use crate::{Key, UnderbarError, Value};

/// Walks every element of a sequence (index order) or every entry of an
/// association (traversal order), handing `(value, index_or_key)` to
/// `visitor` until it breaks.
///
/// The container is snapshotted before the first visit, so the visitor may
/// mutate it without disturbing the walk. Unclassifiable containers are
/// skipped. Returns `true` if the visitor broke out early.
fn walk<E, F>(operation: &'static str, container: &Value, mut visitor: F) -> Result<bool, E>
where
    F: FnMut(Value, Value) -> Result<ControlFlow<()>, E>,
{
    match container {
        Value::Sequence(sequence) => {
            for (index, element) in sequence.to_vec().into_iter().enumerate() {
                if visitor(element, Value::from(Key::index(index)))?.is_break() {
                    return Ok(true);
                }
            }
        }
        Value::Association(association) => {
            for (key, value) in association.entries() {
                if visitor(value, Value::from(key))?.is_break() {
                    return Ok(true);
                }
            }
        }
        other => {
            tracing::debug!(
                operation,
                shape = ?classify(other),
                found = other.type_name(),
                "container is neither a sequence nor an association"
            );
        }
    }
    Ok(false)
}

/// The kernel for visitors that call user code and may fail.
pub(crate) fn traverse<F>(
    operation: &'static str,
    container: &Value,
    visitor: F,
) -> Result<bool, UnderbarError>
where
    F: FnMut(Value, Value) -> Result<ControlFlow<()>, UnderbarError>,
{
    walk(operation, container, visitor)
}

/// The kernel for visitors that cannot fail.
pub(crate) fn visit<F>(operation: &'static str, container: &Value, mut visitor: F) -> bool
where
    F: FnMut(Value, Value) -> ControlFlow<()>,
{
    match walk::<Infallible, _>(operation, container, |value, key| Ok(visitor(value, key))) {
        Ok(broke) => broke,
        Err(never) => match never {},
    }
}

/// Builds the `(element, index_or_key, container)` argument list.
pub(crate) fn arguments(element: Value, index: Value, container: &Value) -> Arguments {
    smallvec![element, index, container.clone()]
}

/// Invokes `iterator(element, index_or_key, container)` for every element
/// of a sequence or every entry of an association.
///
/// When `context` is supplied it is bound as the callback's receiver;
/// otherwise the callback is called without one. There is no early exit and
/// nothing is returned. Anything other than a container is a no-op.
///
/// # Errors
///
/// Returns [`UnderbarError::NotCallable`] if `iterator` is not a function
/// and there is at least one element to visit, and propagates any error the
/// callback raises.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use underbar::{each, sequence, Function, Value};
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = seen.clone();
/// let record = Value::from(Function::lift(move |arguments| {
///     sink.borrow_mut().push((arguments[0].clone(), arguments[1].clone()));
///     Value::Null
/// }));
///
/// each(&sequence!["a", "b"], &record, None).unwrap();
/// assert_eq!(
///     *seen.borrow(),
///     vec![(Value::from("a"), Value::from(0)), (Value::from("b"), Value::from(1))]
/// );
/// ```
pub fn each(container: &Value, iterator: &Value, context: Option<&Value>) -> Result<(), UnderbarError> {
    let callback = Callback::new("each", iterator, context);
    traverse("each", container, |element, index| {
        callback.call(&arguments(element, index, container))?;
        Ok(ControlFlow::Continue(()))
    })
    .map(|_| ())
}
