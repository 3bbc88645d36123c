//! Error types for the combinator library.
//!
//! Almost every edge case in this crate degrades silently: unclassifiable
//! containers, out-of-range counts and absent keys are clamped or skipped.
//! The conditions that surface as an [`UnderbarError`] are the caller
//! contract violations that the combinators cannot paper over.

use thiserror::Error;

/// Represents the errors that can escape a combinator.
///
/// # Examples
///
/// ```rust
/// use underbar::UnderbarError;
///
/// let error = UnderbarError::NotCallable {
///     operation: "map",
///     found: "integer",
/// };
/// assert_eq!(
///     format!("{error}"),
///     "map: expected a callable callback, found integer"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnderbarError {
    /// A combinator tried to invoke its callback argument and it was not a
    /// function.
    #[error("{operation}: expected a callable callback, found {found}")]
    NotCallable {
        /// The name of the combinator that attempted the call.
        operation: &'static str,
        /// The type name of the value supplied in place of a function.
        found: &'static str,
    },

    /// `invoke` addressed a method slot that is absent or not callable.
    #[error("invoke: {found} has no callable method `{method}`")]
    MissingMethod {
        /// The method name that was looked up on the element.
        method: String,
        /// The type name of the element the lookup was performed on.
        found: &'static str,
    },

    /// A user callback reported a failure of its own.
    #[error("callback failed: {0}")]
    Callback(String),
}

impl UnderbarError {
    /// Builds the error a user callback returns to abort a traversal.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::UnderbarError;
    ///
    /// let error = UnderbarError::callback("negative input");
    /// assert_eq!(format!("{error}"), "callback failed: negative input");
    /// ```
    pub fn callback(message: impl Into<String>) -> Self {
        Self::Callback(message.into())
    }
}
