//! Predicate-driven selection and short-circuiting tests.

use std::ops::ControlFlow;

use super::each::{arguments, traverse, visit};
use crate::value::Callback;
use crate::{Key, Sequence, UnderbarError, Value};

/// Returns the first element for which `iterator` is truthy, or `null`.
///
/// Stops at the first match.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any callback error.
///
/// # Examples
///
/// ```rust
/// use underbar::{find, sequence, Function, Value};
///
/// let even = Value::from(Function::lift(|arguments| {
///     Value::from(arguments[0].as_integer().is_some_and(|integer| integer % 2 == 0))
/// }));
/// assert_eq!(find(&sequence![1, 3, 4, 6], &even, None).unwrap(), Value::from(4));
/// assert_eq!(find(&sequence![1, 3], &even, None).unwrap(), Value::Null);
/// ```
pub fn find(container: &Value, iterator: &Value, context: Option<&Value>) -> Result<Value, UnderbarError> {
    let callback = Callback::new("find", iterator, context);
    let mut found = Value::Null;
    traverse("find", container, |element, index| {
        if callback.test(&arguments(element.clone(), index, container))? {
            found = element;
            return Ok(ControlFlow::Break(()));
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(found)
}

fn partition(
    operation: &'static str,
    container: &Value,
    iterator: &Value,
    context: Option<&Value>,
    keep: bool,
) -> Result<Value, UnderbarError> {
    let callback = Callback::new(operation, iterator, context);
    let selected = Sequence::new();
    traverse(operation, container, |element, index| {
        if callback.test(&arguments(element.clone(), index, container))? == keep {
            selected.push(element);
        }
        Ok(ControlFlow::Continue(()))
    })?;
    Ok(Value::Sequence(selected))
}

/// Collects the elements for which `iterator` is truthy.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any callback error.
pub fn filter(container: &Value, iterator: &Value, context: Option<&Value>) -> Result<Value, UnderbarError> {
    partition("filter", container, iterator, context, true)
}

/// Collects the elements for which `iterator` is falsy; the complement of
/// [`filter`].
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any callback error.
pub fn reject(container: &Value, iterator: &Value, context: Option<&Value>) -> Result<Value, UnderbarError> {
    partition("reject", container, iterator, context, false)
}

/// Returns `true` if `iterator` is truthy for every element.
///
/// Stops at the first falsy result. Vacuously `true` for empty or `null`
/// input.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any callback error.
pub fn every(container: &Value, iterator: &Value, context: Option<&Value>) -> Result<bool, UnderbarError> {
    let callback = Callback::new("every", iterator, context);
    let broke = traverse("every", container, |element, index| {
        if callback.test(&arguments(element, index, container))? {
            Ok(ControlFlow::Continue(()))
        } else {
            Ok(ControlFlow::Break(()))
        }
    })?;
    Ok(!broke)
}

/// Returns `true` if `iterator` is truthy for at least one element.
///
/// Stops at the first truthy result. `false` for empty or `null` input.
///
/// # Errors
///
/// Propagates [`UnderbarError::NotCallable`] and any callback error.
pub fn some(container: &Value, iterator: &Value, context: Option<&Value>) -> Result<bool, UnderbarError> {
    let callback = Callback::new("some", iterator, context);
    traverse("some", container, |element, index| {
        if callback.test(&arguments(element, index, container))? {
            Ok(ControlFlow::Break(()))
        } else {
            Ok(ControlFlow::Continue(()))
        }
    })
}

/// Returns `true` if `value` is among the elements of a sequence or among
/// the values (not the keys) of an association.
///
/// Membership uses [`Value::same`].
///
/// # Examples
///
/// ```rust
/// use underbar::{association, contains, sequence, Value};
///
/// assert!(contains(&sequence![1, 2, 3], &Value::from(3)));
/// assert!(contains(&association! { "a" => "x" }, &Value::from("x")));
/// assert!(!contains(&association! { "a" => "x" }, &Value::from("a")));
/// ```
pub fn contains(container: &Value, value: &Value) -> bool {
    visit("contains", container, |element, _| {
        if element.same(value) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })
}

/// Returns `true` if `candidate` agrees with every entry of `properties`.
///
/// A property the candidate does not carry at all counts as agreement.
fn matches_properties(candidate: &Value, properties: &[(Key, Value)]) -> bool {
    properties.iter().all(|(key, expected)| {
        candidate
            .get(key)
            .is_none_or(|actual| actual.same(expected))
    })
}

fn property_entries(properties: &Value) -> Vec<(Key, Value)> {
    properties
        .as_association()
        .map(crate::Association::entries)
        .unwrap_or_default()
}

/// Collects the elements whose slots agree with every entry of
/// `properties`.
///
/// A key of `properties` that a candidate lacks entirely is treated as a
/// match, not a mismatch: `where([{a: 1}, {b: 2}], {b: 2})` keeps both
/// elements.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, r#where, sequence, size};
///
/// let people = sequence![
///     association! { "name" => "moe", "age" => 40 },
///     association! { "name" => "larry", "age" => 50 },
///     association! { "name" => "curly" },
/// ];
/// let forty = r#where(&people, &association! { "age" => 40 });
/// assert_eq!(size(&forty), 2);
/// ```
pub fn r#where(container: &Value, properties: &Value) -> Value {
    let properties = property_entries(properties);
    let selected = Sequence::new();
    visit("where", container, |element, _| {
        if matches_properties(&element, &properties) {
            selected.push(element);
        }
        ControlFlow::Continue(())
    });
    Value::Sequence(selected)
}

/// Returns the first element [`r#where`] would keep, or `null`.
pub fn find_where(container: &Value, properties: &Value) -> Value {
    let properties = property_entries(properties);
    let mut found = Value::Null;
    visit("find_where", container, |element, _| {
        if matches_properties(&element, &properties) {
            found = element;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    });
    found
}
