//! Fluent chaining of combinators over a single value.
//!
//! A [`Chain`] threads one value through successive combinators. The first
//! error short-circuits every later step and surfaces from
//! [`Chain::value`], the way `?` would in a hand-written pipeline.
//!
//! # Examples
//!
//! ```rust
//! use underbar::{chain, sequence, Function, Value};
//!
//! let square = Value::from(Function::lift(|arguments| {
//!     let integer = arguments[0].as_integer().unwrap_or(0);
//!     Value::from(integer * integer)
//! }));
//!
//! let result = chain(sequence![sequence![0, 1], sequence![2, Value::Null], 3])
//!     .flatten(false)
//!     .compact()
//!     .map(&square, None)
//!     .rest(1)
//!     .value()
//!     .unwrap();
//! assert_eq!(result, sequence![4, 9]);
//! ```

use crate::{Key, UnderbarError, Value, association, combinator, sequence};

/// A value in the middle of a combinator pipeline.
#[derive(Clone, Debug)]
#[must_use = "a chain does nothing until its value is taken"]
pub struct Chain {
    state: Result<Value, UnderbarError>,
}

/// Starts a chain from `value`.
pub fn chain(value: impl Into<Value>) -> Chain {
    Chain::new(value)
}

impl Chain {
    /// Starts a chain from `value`.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            state: Ok(value.into()),
        }
    }

    fn then<F>(self, step: F) -> Self
    where
        F: FnOnce(&Value) -> Result<Value, UnderbarError>,
    {
        Self {
            state: self.state.and_then(|value| step(&value)),
        }
    }

    fn then_infallible<F>(self, step: F) -> Self
    where
        F: FnOnce(&Value) -> Value,
    {
        self.then(|value| Ok(step(value)))
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// See [`combinator::map`].
    pub fn map(self, iterator: &Value, context: Option<&Value>) -> Self {
        self.then(|value| combinator::map(value, iterator, context))
    }

    /// See [`combinator::filter`].
    pub fn filter(self, iterator: &Value, context: Option<&Value>) -> Self {
        self.then(|value| combinator::filter(value, iterator, context))
    }

    /// See [`combinator::reject`].
    pub fn reject(self, iterator: &Value, context: Option<&Value>) -> Self {
        self.then(|value| combinator::reject(value, iterator, context))
    }

    /// See [`combinator::reduce`].
    pub fn reduce(self, iterator: &Value, memo: Value, context: Option<&Value>) -> Self {
        self.then(|value| combinator::reduce(value, iterator, memo, context))
    }

    /// See [`combinator::find`].
    pub fn find(self, iterator: &Value, context: Option<&Value>) -> Self {
        self.then(|value| combinator::find(value, iterator, context))
    }

    /// See [`combinator::pluck`].
    pub fn pluck(self, property: impl Into<Key>) -> Self {
        let property = property.into();
        self.then_infallible(|value| combinator::pluck(value, property))
    }

    /// See [`combinator::invoke`].
    pub fn invoke(self, method: impl Into<Key>, arguments: &[Value]) -> Self {
        let method = method.into();
        self.then(|value| combinator::invoke(value, method, arguments))
    }

    /// See [`combinator::r#where`].
    pub fn r#where(self, properties: &Value) -> Self {
        self.then_infallible(|value| combinator::r#where(value, properties))
    }

    // =========================================================================
    // Sequence Operations
    // =========================================================================

    /// See [`sequence::first`].
    pub fn first(self, count: i64) -> Self {
        self.then_infallible(|value| sequence::first(value, count))
    }

    /// See [`sequence::initial`].
    pub fn initial(self, count: i64) -> Self {
        self.then_infallible(|value| sequence::initial(value, count))
    }

    /// See [`sequence::last`].
    pub fn last(self, count: i64) -> Self {
        self.then_infallible(|value| sequence::last(value, count))
    }

    /// See [`sequence::rest`].
    pub fn rest(self, index: i64) -> Self {
        self.then_infallible(|value| sequence::rest(value, index))
    }

    /// See [`sequence::compact`].
    pub fn compact(self) -> Self {
        self.then_infallible(sequence::compact)
    }

    /// See [`sequence::flatten`].
    pub fn flatten(self, shallow: bool) -> Self {
        self.then_infallible(|value| sequence::flatten(value, shallow))
    }

    /// See [`sequence::without`].
    pub fn without(self, values: &[Value]) -> Self {
        self.then_infallible(|value| sequence::without(value, values))
    }

    /// See [`sequence::uniq`].
    pub fn uniq(self) -> Self {
        self.then_infallible(sequence::uniq)
    }

    // =========================================================================
    // Association Operations
    // =========================================================================

    /// See [`association::keys`].
    pub fn keys(self) -> Self {
        self.then_infallible(association::keys)
    }

    /// See [`association::values`].
    pub fn values(self) -> Self {
        self.then_infallible(association::values)
    }

    /// See [`association::tap`].
    pub fn tap(self, interceptor: &Value, context: Option<&Value>) -> Self {
        self.then(|value| association::tap(value, interceptor, context))
    }

    // =========================================================================
    // Termination
    // =========================================================================

    /// Ends the chain, returning the current value or the first error.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step.
    pub fn value(self) -> Result<Value, UnderbarError> {
        self.state
    }

    /// Ends the chain with [`combinator::size`] of the current value.
    ///
    /// # Errors
    ///
    /// Returns the first error raised by any step.
    pub fn size(self) -> Result<usize, UnderbarError> {
        self.state.map(|value| combinator::size(&value))
    }
}

impl From<Value> for Chain {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}
