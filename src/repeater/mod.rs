//! Repeated invocation without a container.

use crate::value::Callback;
use crate::{Sequence, UnderbarError, Value};

/// Calls `iterator(i)` for `i` in `0..count`, in increasing order, and
/// collects the results into a fresh sequence of length `count`.
///
/// `count <= 0` yields an empty sequence without calling `iterator`.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any callback error; no
/// partial result is returned.
///
/// # Examples
///
/// ```rust
/// use underbar::{sequence, times, Function, Value};
///
/// let square = Value::from(Function::lift(|arguments| {
///     let index = arguments[0].as_integer().unwrap_or(0);
///     Value::from(index * index)
/// }));
/// assert_eq!(times(3, &square, None).unwrap(), sequence![0, 1, 4]);
/// assert_eq!(times(-1, &square, None).unwrap(), sequence![]);
/// ```
pub fn times(count: i64, iterator: &Value, context: Option<&Value>) -> Result<Value, UnderbarError> {
    let callback = Callback::new("times", iterator, context);
    let capacity = usize::try_from(count).unwrap_or(0);
    let results = Sequence::with_capacity(capacity.min(4096));
    for index in 0..count.max(0) {
        results.push(callback.call(&[Value::from(index)])?);
    }
    tracing::trace!(count, "repeated callback");
    Ok(Value::Sequence(results))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Function, sequence};

    #[test]
    fn test_times_binds_context() {
        let iterator = Value::from(Function::new(|call| {
            Ok(call.receiver().cloned().unwrap_or(Value::Null))
        }));
        let context = Value::from("self");
        assert_eq!(
            times(2, &iterator, Some(&context)).unwrap(),
            sequence!["self", "self"]
        );
    }

    #[test]
    fn test_times_zero_skips_callable_check() {
        assert_eq!(times(0, &Value::Null, None), Ok(sequence![]));
    }

    #[test]
    fn test_times_stops_at_first_error() {
        let calls = std::rc::Rc::new(std::cell::Cell::new(0));
        let counter = calls.clone();
        let iterator = Value::from(Function::new(move |call| {
            counter.set(counter.get() + 1);
            if call.argument(0) == Value::from(1) {
                Err(UnderbarError::callback("stop"))
            } else {
                Ok(Value::Null)
            }
        }));
        assert_eq!(times(5, &iterator, None), Err(UnderbarError::callback("stop")));
        assert_eq!(calls.get(), 2);
    }
}
