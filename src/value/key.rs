//! Association keys.

use std::fmt;

use super::{ReferenceCounter, Value};

/// The hashable key of an [`Association`](super::Association) entry.
///
/// Only booleans, integers and strings can address an association slot.
/// A float with an integral value is normalized to an [`Key::Integer`], so
/// `2.0` and `2` name the same slot.
///
/// Keys order booleans before integers before strings; within a variant the
/// natural order applies. `functions` relies on this order for its sorted
/// output.
///
/// # Examples
///
/// ```rust
/// use underbar::{Key, Value};
///
/// assert_eq!(Key::from_value(&Value::from(2.0)), Some(Key::Integer(2)));
/// assert_eq!(Key::from_value(&Value::from(2.5)), None);
/// assert_eq!(Key::from_value(&Value::Null), None);
/// assert_eq!(Key::from("name").to_string(), "name");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    /// A boolean key.
    Boolean(bool),
    /// An integer key; also the key form of a sequence index.
    Integer(i64),
    /// A string key.
    String(ReferenceCounter<str>),
}

impl Key {
    /// Converts a value into a key, or `None` if the value is not
    /// key-typeable.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Boolean(boolean) => Some(Self::Boolean(*boolean)),
            Value::Integer(integer) => Some(Self::Integer(*integer)),
            Value::Float(float)
                if float.is_finite()
                    && float.fract() == 0.0
                    && *float >= i64::MIN as f64
                    && *float < i64::MAX as f64 =>
            {
                Some(Self::Integer(*float as i64))
            }
            Value::String(string) => Some(Self::String(string.clone())),
            _ => None,
        }
    }

    /// Builds the key that addresses a 0-based sequence position.
    pub fn index(index: usize) -> Self {
        Self::Integer(i64::try_from(index).unwrap_or(i64::MAX))
    }

    /// Returns the 0-based sequence position this key addresses, if any.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Self::Integer(integer) => usize::try_from(*integer).ok(),
            _ => None,
        }
    }

    /// Returns the string content for a string key.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(&**string),
            _ => None,
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(boolean) => write!(formatter, "{boolean}"),
            Self::Integer(integer) => write!(formatter, "{integer}"),
            Self::String(string) => formatter.write_str(string),
        }
    }
}

impl From<&str> for Key {
    fn from(string: &str) -> Self {
        Self::String(ReferenceCounter::from(string))
    }
}

impl From<String> for Key {
    fn from(string: String) -> Self {
        Self::String(ReferenceCounter::from(string))
    }
}

impl From<bool> for Key {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<i64> for Key {
    fn from(integer: i64) -> Self {
        Self::Integer(integer)
    }
}

impl From<i32> for Key {
    fn from(integer: i32) -> Self {
        Self::Integer(i64::from(integer))
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Self::index(index)
    }
}

impl From<Key> for Value {
    fn from(key: Key) -> Self {
        match key {
            Key::Boolean(boolean) => Self::Boolean(boolean),
            Key::Integer(integer) => Self::Integer(integer),
            Key::String(string) => Self::String(string),
        }
    }
}

impl From<&Key> for Value {
    fn from(key: &Key) -> Self {
        Self::from(key.clone())
    }
}
