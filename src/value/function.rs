//! Callable values and the callback calling convention.
//!
//! Every combinator invokes its callback as `(element, index_or_key,
//! container)`; [`Call`] carries that argument list together with the
//! optional receiver a caller-supplied context binds.

use std::fmt;

use smallvec::SmallVec;

use super::{ReferenceCounter, Value};
use crate::UnderbarError;

/// Inline storage for a callback argument list.
///
/// Callbacks take at most four arguments (`reduce` passes the memo in front
/// of the usual three), so argument lists never touch the heap.
pub(crate) type Arguments = SmallVec<[Value; 4]>;

type Body = dyn Fn(Call<'_>) -> Result<Value, UnderbarError>;

/// A single invocation of a [`Function`].
///
/// # Examples
///
/// ```rust
/// use underbar::{Function, Value};
///
/// let describe = Function::new(|call| {
///     let receiver = call.receiver().cloned().unwrap_or(Value::Null);
///     Ok(Value::from(vec![receiver, call.argument(0), call.argument(5)]))
/// });
///
/// let result = describe
///     .call(Some(&Value::from("self")), &[Value::from(1)])
///     .unwrap();
/// assert_eq!(
///     result,
///     Value::from(vec![Value::from("self"), Value::from(1), Value::Null])
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Call<'a> {
    receiver: Option<&'a Value>,
    arguments: &'a [Value],
}

impl<'a> Call<'a> {
    /// Creates a call with an optional bound receiver.
    #[inline]
    pub const fn new(receiver: Option<&'a Value>, arguments: &'a [Value]) -> Self {
        Self {
            receiver,
            arguments,
        }
    }

    /// Returns the bound receiver, or `None` when no context was supplied.
    #[inline]
    pub const fn receiver(&self) -> Option<&'a Value> {
        self.receiver
    }

    /// Returns the positional arguments.
    #[inline]
    pub const fn arguments(&self) -> &'a [Value] {
        self.arguments
    }

    /// Returns the argument at `index`, or [`Value::Null`] when the caller
    /// passed fewer arguments.
    pub fn argument(&self, index: usize) -> Value {
        self.arguments.get(index).cloned().unwrap_or(Value::Null)
    }
}

/// A shared callable value.
///
/// Functions compare by identity: two `Function`s are the same only if they
/// are clones of one another.
///
/// # Examples
///
/// ```rust
/// use underbar::{Function, Value};
///
/// let double = Function::lift(|arguments| match arguments.first() {
///     Some(Value::Integer(integer)) => Value::from(integer * 2),
///     _ => Value::Null,
/// });
/// assert_eq!(double.call(None, &[Value::from(21)]).unwrap(), Value::from(42));
/// ```
#[derive(Clone)]
pub struct Function(ReferenceCounter<Body>);

impl Function {
    /// Wraps a fallible body that sees the receiver and the arguments.
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(Call<'_>) -> Result<Value, UnderbarError> + 'static,
    {
        Self(ReferenceCounter::new(body))
    }

    /// Wraps an infallible body that only looks at the arguments.
    pub fn lift<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + 'static,
    {
        Self::new(move |call| Ok(body(call.arguments())))
    }

    /// A function that returns its first argument, or `null` when called
    /// without one.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::{Function, Value};
    ///
    /// let identity = Function::identity();
    /// assert_eq!(identity.call(None, &[Value::from(7)]).unwrap(), Value::from(7));
    /// assert_eq!(identity.call(None, &[]).unwrap(), Value::Null);
    /// ```
    pub fn identity() -> Self {
        Self::new(|call| Ok(call.argument(0)))
    }

    /// Invokes the function, binding `receiver` when one is given.
    ///
    /// # Errors
    ///
    /// Returns whatever error the function body reports.
    pub fn call(&self, receiver: Option<&Value>, arguments: &[Value]) -> Result<Value, UnderbarError> {
        (self.0)(Call::new(receiver, arguments))
    }

    /// Returns `true` if both handles refer to the same function.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Function {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "Function({:p})", ReferenceCounter::as_ptr(&self.0).cast::<()>())
    }
}

/// A callback argument as received by a combinator, resolved lazily.
///
/// The callable check happens at the moment of invocation, so a combinator
/// that never reaches its callback (empty input, unclassifiable container)
/// never reports [`UnderbarError::NotCallable`].
#[derive(Clone, Copy)]
pub(crate) struct Callback<'a> {
    operation: &'static str,
    iterator: &'a Value,
    context: Option<&'a Value>,
}

impl<'a> Callback<'a> {
    pub(crate) const fn new(
        operation: &'static str,
        iterator: &'a Value,
        context: Option<&'a Value>,
    ) -> Self {
        Self {
            operation,
            iterator,
            context,
        }
    }

    pub(crate) fn call(&self, arguments: &[Value]) -> Result<Value, UnderbarError> {
        match self.iterator {
            Value::Function(function) => function.call(self.context, arguments),
            other => Err(UnderbarError::NotCallable {
                operation: self.operation,
                found: other.type_name(),
            }),
        }
    }

    pub(crate) fn test(&self, arguments: &[Value]) -> Result<bool, UnderbarError> {
        self.call(arguments).map(|result| result.is_truthy())
    }
}
