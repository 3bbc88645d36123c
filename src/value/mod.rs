//! The dynamically shaped value every combinator operates on.
//!
//! [`Value`] is a tagged union over the primitive kinds and the two container
//! shapes, [`Sequence`] and [`Association`]. Containers and functions are
//! shared handles, so a `Value` behaves like a variable in a dynamically
//! typed host: cloning it never copies a container.
//!
//! # Equality
//!
//! Two notions of equality are available:
//!
//! - [`Value::same`] is the equality the combinators use (`contains`,
//!   `without`, `difference`, `where`, `uniq`). Primitives compare by value,
//!   so `1` is the same as `1.0`; containers and functions compare by
//!   identity.
//! - [`PartialEq`] is deep structural equality, recursing into containers.
//!   It is the equality to reach for when asserting on results. Cyclic
//!   containers compare equal when they unfold to the same structure.
//!
//! # Examples
//!
//! ```rust
//! use underbar::{sequence, Value};
//!
//! let left = sequence![1, 2];
//! let right = sequence![1, 2];
//!
//! assert_eq!(left, right);
//! assert!(!left.same(&right));
//! assert!(left.same(&left.clone()));
//! assert!(Value::from(1).same(&Value::from(1.0)));
//! ```

use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;

mod association;
mod function;
mod key;
mod macros;
mod sequence;
#[cfg(feature = "serde")]
mod serde;

pub use association::{Association, AssociationHasher};
pub use function::{Call, Function};
pub use key::Key;
pub use sequence::Sequence;

pub(crate) use function::{Arguments, Callback};

// =============================================================================
// Reference Counter Type Alias
// =============================================================================

/// Reference-counted smart pointer type shared by every handle in this crate.
pub(crate) type ReferenceCounter<T> = std::rc::Rc<T>;

/// A dynamically shaped value.
///
/// # Examples
///
/// ```rust
/// use underbar::{association, sequence, Value};
///
/// let record = association! { "name" => "moe", "tags" => sequence!["a", "b"] };
/// assert!(record.is_table());
/// assert_eq!(record.type_name(), "association");
/// assert!(Value::Null.is_falsy());
/// assert!(Value::from("").is_truthy());
/// ```
#[derive(Clone, Debug, Default)]
pub enum Value {
    /// The absent value.
    #[default]
    Null,
    /// A boolean.
    Boolean(bool),
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit float.
    Float(f64),
    /// An immutable string.
    String(ReferenceCounter<str>),
    /// An ordered sequence.
    Sequence(Sequence),
    /// An unordered association.
    Association(Association),
    /// A callable.
    Function(Function),
}

macro_rules! variant_predicates {
    ($($(#[$meta:meta])* $name:ident => $pattern:pat),* $(,)?) => {
        paste::paste! {
            $(
                $(#[$meta])*
                #[inline]
                pub const fn [<is_ $name>](&self) -> bool {
                    matches!(self, $pattern)
                }
            )*
        }
    };
}

impl Value {
    // =========================================================================
    // Type Checking
    // =========================================================================

    variant_predicates! {
        /// Returns `true` for [`Value::Null`].
        null => Self::Null,
        /// Returns `true` for [`Value::Boolean`].
        boolean => Self::Boolean(_),
        /// Returns `true` for [`Value::Integer`].
        integer => Self::Integer(_),
        /// Returns `true` for [`Value::Float`].
        float => Self::Float(_),
        /// Returns `true` for either numeric variant.
        number => Self::Integer(_) | Self::Float(_),
        /// Returns `true` for [`Value::String`].
        string => Self::String(_),
        /// Returns `true` for [`Value::Function`].
        function => Self::Function(_),
        /// Returns `true` for [`Value::Sequence`].
        array => Self::Sequence(_),
        /// Returns `true` for [`Value::Association`].
        table => Self::Association(_),
    }

    /// Returns the lowercase name of the variant, as used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean(_) => "boolean",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::String(_) => "string",
            Self::Sequence(_) => "sequence",
            Self::Association(_) => "association",
            Self::Function(_) => "function",
        }
    }

    /// Returns `false` for `null`, `false`, `0` and `0.0`/`NaN`, `true` for
    /// everything else.
    pub fn is_truthy(&self) -> bool {
        match self {
            Self::Null => false,
            Self::Boolean(boolean) => *boolean,
            Self::Integer(integer) => *integer != 0,
            Self::Float(float) => *float != 0.0 && !float.is_nan(),
            Self::String(_) | Self::Sequence(_) | Self::Association(_) | Self::Function(_) => true,
        }
    }

    /// The negation of [`Value::is_truthy`].
    pub fn is_falsy(&self) -> bool {
        !self.is_truthy()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the sequence handle, if this is a sequence.
    pub const fn as_sequence(&self) -> Option<&Sequence> {
        match self {
            Self::Sequence(sequence) => Some(sequence),
            _ => None,
        }
    }

    /// Returns the association handle, if this is an association.
    pub const fn as_association(&self) -> Option<&Association> {
        match self {
            Self::Association(association) => Some(association),
            _ => None,
        }
    }

    /// Returns the function handle, if this is a function.
    pub const fn as_function(&self) -> Option<&Function> {
        match self {
            Self::Function(function) => Some(function),
            _ => None,
        }
    }

    /// Returns the boolean, if this is a boolean.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Returns the integer, if this is an integer.
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(integer) => Some(*integer),
            _ => None,
        }
    }

    /// Returns the numeric value of either numeric variant as a float.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Integer(integer) => Some(*integer as f64),
            Self::Float(float) => Some(*float),
            _ => None,
        }
    }

    /// Returns the string content, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(string) => Some(&**string),
            _ => None,
        }
    }

    /// Reads the slot that `key` names.
    ///
    /// Associations are looked up by key; sequences by 0-based integer
    /// index. Every other variant has no slots.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use underbar::{association, sequence, Key, Value};
    ///
    /// assert_eq!(sequence![10, 20].get(&Key::from(1)), Some(Value::from(20)));
    /// assert_eq!(association! { "a" => 1 }.get(&Key::from("a")), Some(Value::from(1)));
    /// assert_eq!(Value::from("text").get(&Key::from(0)), None);
    /// ```
    pub fn get(&self, key: &Key) -> Option<Value> {
        match self {
            Self::Association(association) => association.get(key),
            Self::Sequence(sequence) => key.as_index().and_then(|index| sequence.get(index)),
            _ => None,
        }
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    /// The equality used by the combinators.
    ///
    /// Numbers compare numerically across the integer/float split, strings
    /// by content, containers and functions by identity.
    pub fn same(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Boolean(left), Self::Boolean(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::String(left), Self::String(right)) => left == right,
            (Self::Sequence(left), Self::Sequence(right)) => left.ptr_eq(right),
            (Self::Association(left), Self::Association(right)) => left.ptr_eq(right),
            (Self::Function(left), Self::Function(right)) => left.ptr_eq(right),
            (left, right) => match (left.as_number(), right.as_number()) {
                (Some(left), Some(right)) => left == right,
                _ => false,
            },
        }
    }

    /// Orders two values when they are comparable.
    ///
    /// Numbers compare numerically and strings lexicographically; any other
    /// pairing, and `NaN`, is incomparable.
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => Some(left.cmp(right)),
            (Self::String(left), Self::String(right)) => Some(left.cmp(right)),
            (left, right) => left.as_number()?.partial_cmp(&right.as_number()?),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        deep_eq(self, other, &mut HashSet::new())
    }
}

/// Deep equality over a graph that may contain cycles.
///
/// `assumed` holds the container pairs currently under comparison. Meeting a
/// pair again closes a cycle, and the pair is taken as equal.
fn deep_eq(left: &Value, right: &Value, assumed: &mut HashSet<(*const (), *const ())>) -> bool {
    match (left, right) {
        (Value::Sequence(left), Value::Sequence(right)) => {
            if left.ptr_eq(right) || !assumed.insert((left.address(), right.address())) {
                return true;
            }
            let (left, right) = (left.to_vec(), right.to_vec());
            left.len() == right.len()
                && left
                    .iter()
                    .zip(&right)
                    .all(|(left, right)| deep_eq(left, right, assumed))
        }
        (Value::Association(left), Value::Association(right)) => {
            if left.ptr_eq(right) || !assumed.insert((left.address(), right.address())) {
                return true;
            }
            left.len() == right.len()
                && left.entries().iter().all(|(key, value)| {
                    right
                        .get(key)
                        .is_some_and(|candidate| deep_eq(value, &candidate, assumed))
                })
        }
        (left, right) => left.same(right),
    }
}

thread_local! {
    static FORMATTING: RefCell<Vec<*const ()>> = const { RefCell::new(Vec::new()) };
}

struct FormattingGuard;

impl Drop for FormattingGuard {
    fn drop(&mut self) {
        FORMATTING.with_borrow_mut(|active| {
            active.pop();
        });
    }
}

/// Formats a container with `body`, or writes `elided` when the container is
/// already being formatted further up the stack.
pub(crate) fn debug_container<F>(
    address: *const (),
    formatter: &mut fmt::Formatter<'_>,
    elided: &str,
    body: F,
) -> fmt::Result
where
    F: FnOnce(&mut fmt::Formatter<'_>) -> fmt::Result,
{
    if FORMATTING.with_borrow(|active| active.contains(&address)) {
        return formatter.write_str(elided);
    }
    FORMATTING.with_borrow_mut(|active| active.push(address));
    let _guard = FormattingGuard;
    body(formatter)
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(boolean: bool) -> Self {
        Self::Boolean(boolean)
    }
}

impl From<i64> for Value {
    fn from(integer: i64) -> Self {
        Self::Integer(integer)
    }
}

impl From<i32> for Value {
    fn from(integer: i32) -> Self {
        Self::Integer(i64::from(integer))
    }
}

impl From<usize> for Value {
    fn from(index: usize) -> Self {
        Self::Integer(i64::try_from(index).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(float: f64) -> Self {
        Self::Float(float)
    }
}

impl From<&str> for Value {
    fn from(string: &str) -> Self {
        Self::String(ReferenceCounter::from(string))
    }
}

impl From<String> for Value {
    fn from(string: String) -> Self {
        Self::String(ReferenceCounter::from(string))
    }
}

impl From<Vec<Value>> for Value {
    fn from(elements: Vec<Value>) -> Self {
        Self::Sequence(Sequence::from(elements))
    }
}

impl From<Sequence> for Value {
    fn from(sequence: Sequence) -> Self {
        Self::Sequence(sequence)
    }
}

impl From<Association> for Value {
    fn from(association: Association) -> Self {
        Self::Association(association)
    }
}

impl From<Function> for Value {
    fn from(function: Function) -> Self {
        Self::Function(function)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Null, Into::into)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Sequence(iter.into_iter().collect())
    }
}

static_assertions::assert_impl_all!(Value: Clone, Default, std::fmt::Debug);
static_assertions::assert_not_impl_any!(Value: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_falsy_set() {
        assert!(Value::Null.is_falsy());
        assert!(Value::from(false).is_falsy());
        assert!(Value::from(0).is_falsy());
        assert!(Value::from(0.0).is_falsy());
        assert!(Value::from(f64::NAN).is_falsy());
        assert!(Value::from(-0.0).is_falsy());
    }

    #[test]
    fn test_empty_containers_are_truthy() {
        assert!(Value::from(Vec::new()).is_truthy());
        assert!(Value::from(Association::new()).is_truthy());
        assert!(Value::from("").is_truthy());
    }

    #[test]
    fn test_same_compares_numbers_across_variants() {
        assert!(Value::from(2).same(&Value::from(2.0)));
        assert!(!Value::from(2).same(&Value::from("2")));
        assert!(!Value::from(f64::NAN).same(&Value::from(f64::NAN)));
    }

    #[test]
    fn test_deep_equality_recurses() {
        let left = Value::from(vec![Value::from(vec![Value::from(1)])]);
        let right = Value::from(vec![Value::from(vec![Value::from(1.0)])]);
        assert_eq!(left, right);
        assert!(!left.same(&right));
    }

    fn self_containing(head: i64) -> Value {
        let handle = Sequence::from(vec![Value::from(head)]);
        let value = Value::Sequence(handle.clone());
        handle.push(value.clone());
        value
    }

    #[test]
    fn test_deep_equality_terminates_on_cycles() {
        let left = self_containing(1);
        let right = self_containing(1);
        assert_eq!(left, right);
        assert_ne!(left, self_containing(2));

        let unrolled = Sequence::from(vec![Value::from(1)]);
        let inner = Sequence::from(vec![Value::from(1)]);
        inner.push(Value::Sequence(unrolled.clone()));
        unrolled.push(Value::Sequence(inner));
        assert_eq!(left, Value::Sequence(unrolled));
    }

    #[test]
    fn test_deep_equality_terminates_on_association_cycles() {
        let build = |tag: &str| {
            let handle = Association::new();
            handle.insert(Key::from("tag"), Value::from(tag));
            handle.insert(Key::from("self"), Value::Association(handle.clone()));
            Value::Association(handle)
        };
        assert_eq!(build("a"), build("a"));
        assert_ne!(build("a"), build("b"));
    }

    #[test]
    fn test_debug_elides_cycles() {
        let rendered = format!("{:?}", self_containing(7));
        assert!(rendered.contains("[...]"));
        assert!(rendered.contains('7'));

        let handle = Association::new();
        handle.insert(Key::from("self"), Value::Association(handle.clone()));
        assert!(format!("{handle:?}").contains("{...}"));
    }

    #[test]
    fn test_debug_repeats_shared_acyclic_children() {
        let shared = Value::from(vec![Value::from(1)]);
        let outer = Value::from(vec![shared.clone(), shared]);
        assert!(!format!("{outer:?}").contains("[...]"));
    }

    #[test]
    fn test_compare_rejects_mixed_kinds() {
        assert_eq!(Value::from(1).compare(&Value::from(2.5)), Some(Ordering::Less));
        assert_eq!(Value::from("b").compare(&Value::from("a")), Some(Ordering::Greater));
        assert_eq!(Value::from(1).compare(&Value::from("a")), None);
        assert_eq!(Value::Null.compare(&Value::Null), None);
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }
}
