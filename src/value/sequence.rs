//! Shared ordered sequences.

use std::cell::RefCell;
use std::fmt;
use std::ops::Range;

use super::{ReferenceCounter, Value};

/// A shared, growable, 0-based list of values.
///
/// `Sequence` is a handle: cloning it shares the underlying storage, the
/// same way a table reference is shared in a dynamically typed host. Every
/// accessor copies values out instead of lending references, so user
/// callbacks may freely read or grow a sequence while it is being traversed.
///
/// Index order is traversal order. `push` appends and no operation in this
/// crate reorders existing elements in place.
///
/// # Examples
///
/// ```rust
/// use underbar::{Sequence, Value};
///
/// let sequence = Sequence::from(vec![Value::from(1), Value::from(2)]);
/// let alias = sequence.clone();
/// alias.push(Value::from(3));
///
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence.get(2), Some(Value::from(3)));
/// assert!(sequence.ptr_eq(&alias));
/// ```
#[derive(Clone, Default)]
pub struct Sequence(ReferenceCounter<RefCell<Vec<Value>>>);

impl Sequence {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty sequence with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::from(Vec::with_capacity(capacity))
    }

    /// Returns the number of elements.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the sequence holds no elements.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns a copy of the element at `index`.
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned()
    }

    /// Appends an element.
    pub fn push(&self, value: Value) {
        self.0.borrow_mut().push(value);
    }

    /// Appends every element of `values`.
    pub fn extend_from(&self, values: impl IntoIterator<Item = Value>) {
        self.0.borrow_mut().extend(values);
    }

    /// Copies the elements out, in index order.
    ///
    /// The snapshot is detached: later mutation of the sequence does not
    /// affect it.
    pub fn to_vec(&self) -> Vec<Value> {
        self.0.borrow().clone()
    }

    /// Copies the elements in `range` into a fresh sequence.
    ///
    /// The range is clamped to the current length.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let elements = self.0.borrow();
        let end = range.end.min(elements.len());
        let start = range.start.min(end);
        Self::from(elements[start..end].to_vec())
    }

    /// Returns `true` if both handles share the same storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> *const () {
        ReferenceCounter::as_ptr(&self.0).cast()
    }
}

impl From<Vec<Value>> for Sequence {
    fn from(elements: Vec<Value>) -> Self {
        Self(ReferenceCounter::new(RefCell::new(elements)))
    }
}

impl FromIterator<Value> for Sequence {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl fmt::Debug for Sequence {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::debug_container(self.address(), formatter, "[...]", |formatter| {
            formatter.debug_list().entries(self.0.borrow().iter()).finish()
        })
    }
}
