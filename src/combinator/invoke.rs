//! Method invocation and property extraction across a collection.

use std::ops::ControlFlow;

use super::each::{traverse, visit};
use crate::{Key, Sequence, UnderbarError, Value};

/// Calls the method stored under `method` on every element, binding the
/// element as the call's receiver and passing `arguments` through.
///
/// Results are discarded; the original `container` handle is returned so
/// calls can be chained.
///
/// # Errors
///
/// Returns [`UnderbarError::MissingMethod`] as soon as an element has no
/// callable slot named `method`, and propagates any error a method raises.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, invoke, sequence, Function, Key, Value};
///
/// let bump = Value::from(Function::new(|call| {
///     if let Some(Value::Association(receiver)) = call.receiver() {
///         let count = receiver.get(&Key::from("count")).and_then(|value| value.as_integer());
///         receiver.insert(Key::from("count"), Value::from(count.unwrap_or(0) + 1));
///     }
///     Ok(Value::Null)
/// }));
/// let counter = association! { "count" => 0, "bump" => bump };
/// let list = sequence![counter.clone()];
///
/// let returned = invoke(&list, "bump", &[]).unwrap();
/// assert!(returned.same(&list));
/// assert_eq!(counter.get(&Key::from("count")), Some(Value::from(1)));
/// ```
pub fn invoke(
    container: &Value,
    method: impl Into<Key>,
    arguments: &[Value],
) -> Result<Value, UnderbarError> {
    let method = method.into();
    let mut calls = 0_usize;
    traverse("invoke", container, |element, _| {
        match element.get(&method) {
            Some(Value::Function(function)) => {
                function.call(Some(&element), arguments)?;
                calls += 1;
                Ok(ControlFlow::Continue(()))
            }
            _ => Err(UnderbarError::MissingMethod {
                method: method.to_string(),
                found: element.type_name(),
            }),
        }
    })?;
    tracing::trace!(method = %method, calls, "invoked method across collection");
    Ok(container.clone())
}

/// Collects the value stored under `property` for every element that has
/// that slot.
///
/// Elements lacking the slot are skipped rather than padded with `null`.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, pluck, sequence};
///
/// let people = sequence![
///     association! { "name" => "moe" },
///     association! { "age" => 1 },
///     association! { "name" => "curly" },
/// ];
/// assert_eq!(pluck(&people, "name"), sequence!["moe", "curly"]);
/// ```
pub fn pluck(container: &Value, property: impl Into<Key>) -> Value {
    let property = property.into();
    let plucked = Sequence::new();
    visit("pluck", container, |element, _| {
        if let Some(value) = element.get(&property) {
            plucked.push(value);
        }
        ControlFlow::Continue(())
    });
    Value::Sequence(plucked)
}
