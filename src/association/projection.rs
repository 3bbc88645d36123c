//! Structural projections of a container.

use std::ops::ControlFlow;

use crate::combinator::visit;
use crate::{Association, Key, Sequence, Value};

fn project<F>(operation: &'static str, container: &Value, mut projection: F) -> Value
where
    F: FnMut(Value, Value) -> Value,
{
    let projected = Sequence::new();
    visit(operation, container, |value, key| {
        projected.push(projection(value, key));
        ControlFlow::Continue(())
    });
    Value::Sequence(projected)
}

/// Returns the keys of an association, in traversal order.
///
/// For a sequence the keys are its indices.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, keys, sequence, Value};
///
/// assert_eq!(keys(&association! { "one" => 1 }), sequence!["one"]);
/// assert_eq!(keys(&sequence!["a", "b"]), sequence![0, 1]);
/// assert_eq!(keys(&Value::Null), sequence![]);
/// ```
pub fn keys(container: &Value) -> Value {
    project("keys", container, |_, key| key)
}

/// Returns the values of an association, in traversal order.
pub fn values(container: &Value) -> Value {
    project("values", container, |value, _| value)
}

/// Returns `[key, value]` pairs, in traversal order.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, pairs, sequence};
///
/// assert_eq!(pairs(&association! { "one" => 1 }), sequence![sequence!["one", 1]]);
/// ```
pub fn pairs(container: &Value) -> Value {
    project("pairs", container, |value, key| Value::from(vec![key, value]))
}

/// Swaps keys and values.
///
/// Values must be unique and key-typeable; when two entries share a value
/// the one visited last wins, and values that cannot be keys are dropped.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, invert};
///
/// let inverted = invert(&association! { "moe" => "moses", "larry" => "louis" });
/// assert_eq!(inverted, association! { "moses" => "moe", "louis" => "larry" });
/// ```
pub fn invert(container: &Value) -> Value {
    let inverted = Association::new();
    visit("invert", container, |value, key| {
        match Key::from_value(&value) {
            Some(inverted_key) => {
                inverted.insert(inverted_key, key);
            }
            None => {
                tracing::debug!(operation = "invert", found = value.type_name(), "skipping unkeyable value");
            }
        }
        ControlFlow::Continue(())
    });
    Value::Association(inverted)
}

/// Returns the keys whose values are callable, sorted in [`Key`] order.
///
/// This is the only projection with a defined output order. Booleans come
/// first, then integers in numeric order (`9` before `10`), then strings
/// lexicographically.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, functions, sequence, Function, Value};
///
/// let noop = Function::lift(|_| Value::Null);
/// let object = association! {
///     "zip" => noop.clone(),
///     "apply" => noop,
///     "name" => "object",
/// };
/// assert_eq!(functions(&object), sequence!["apply", "zip"]);
/// ```
pub fn functions(container: &Value) -> Value {
    let mut names = Vec::new();
    visit("functions", container, |value, key| {
        if value.is_function()
            && let Some(key) = Key::from_value(&key)
        {
            names.push(key);
        }
        ControlFlow::Continue(())
    });
    names.sort();
    names.into_iter().map(Value::from).collect()
}
