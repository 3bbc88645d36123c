//! Copying and chain inspection.

use crate::value::Callback;
use crate::{UnderbarError, Value};

/// Returns a shallow copy of `value`.
///
/// Sequences and associations get fresh storage holding the same elements;
/// nested containers are shared with the original. Every other value is
/// returned as is.
///
/// # Examples
///
/// ```rust
/// use underbar::{copy, sequence};
///
/// let inner = sequence![1];
/// let outer = sequence![inner.clone()];
/// let copied = copy(&outer);
///
/// assert_eq!(copied, outer);
/// assert!(!copied.same(&outer));
/// assert!(underbar::first(&copied, 1) == sequence![inner]);
/// ```
pub fn copy(value: &Value) -> Value {
    match value {
        Value::Sequence(sequence) => Value::from(sequence.to_vec()),
        Value::Association(association) => Value::Association(association.entries().into_iter().collect()),
        other => other.clone(),
    }
}

/// Calls `interceptor(value)` for its side effect and returns `value`.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any interceptor error.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
/// use std::rc::Rc;
/// use underbar::{sequence, tap, Function, Value};
///
/// let seen = Rc::new(RefCell::new(Value::Null));
/// let sink = seen.clone();
/// let record = Value::from(Function::lift(move |arguments| {
///     *sink.borrow_mut() = arguments[0].clone();
///     Value::Null
/// }));
///
/// let list = sequence![1, 2];
/// let returned = tap(&list, &record, None).unwrap();
/// assert!(returned.same(&list));
/// assert!(seen.borrow().same(&list));
/// ```
pub fn tap(value: &Value, interceptor: &Value, context: Option<&Value>) -> Result<Value, UnderbarError> {
    Callback::new("tap", interceptor, context).call(std::slice::from_ref(value))?;
    Ok(value.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{association, sequence};

    #[test]
    fn test_copy_association_is_shallow() {
        let inner = sequence![1];
        let record = association! { "inner" => inner.clone() };
        let copied = copy(&record);
        assert!(!copied.same(&record));
        assert!(copied.get(&crate::Key::from("inner")).is_some_and(|value| value.same(&inner)));
    }

    #[test]
    fn test_copy_primitive_is_identity() {
        assert_eq!(copy(&Value::from(4)), Value::from(4));
    }

    #[test]
    fn test_tap_not_callable() {
        assert!(matches!(
            tap(&Value::Null, &Value::Null, None),
            Err(UnderbarError::NotCallable { operation: "tap", .. })
        ));
    }
}
