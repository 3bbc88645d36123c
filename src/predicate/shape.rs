//! The shape classifier consulted at the top of every "sequence or
//! association" combinator.

use crate::Value;

/// The container shape of a [`Value`].
///
/// # Examples
///
/// ```rust
/// use underbar::predicate::{classify, Shape};
/// use underbar::{association, sequence, Value};
///
/// assert_eq!(classify(&sequence![1, 2]), Shape::Sequence);
/// assert_eq!(classify(&association! { "a" => 1 }), Shape::Association);
/// assert_eq!(classify(&Value::from("text")), Shape::Other);
/// assert_eq!(classify(&Value::Null), Shape::Other);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// An ordered, 0-based list.
    Sequence,
    /// An unordered key/value mapping.
    Association,
    /// Anything that is not a container.
    Other,
}

impl Shape {
    /// Classifies `value`.
    #[inline]
    pub const fn of(value: &Value) -> Self {
        match value {
            Value::Sequence(_) => Self::Sequence,
            Value::Association(_) => Self::Association,
            _ => Self::Other,
        }
    }

    /// Returns `true` for either container shape.
    #[inline]
    pub const fn is_container(self) -> bool {
        !matches!(self, Self::Other)
    }
}

/// Classifies `value` as a sequence, an association, or neither.
///
/// Pure and total: every value has exactly one shape.
#[inline]
pub const fn classify(value: &Value) -> Shape {
    Shape::of(value)
}
