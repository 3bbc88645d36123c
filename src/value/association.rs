//! Shared unordered associations.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use super::{Key, ReferenceCounter, Value};

/// Hasher used for association buckets.
///
/// When the `fxhash` feature is enabled, this is `rustc_hash::FxBuildHasher`.
/// When only the `ahash` feature is enabled, this is `ahash::RandomState`.
/// Otherwise it is the standard library's SipHash `RandomState`.
#[cfg(feature = "fxhash")]
pub type AssociationHasher = rustc_hash::FxBuildHasher;

/// Hasher used for association buckets.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type AssociationHasher = ahash::RandomState;

/// Hasher used for association buckets.
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub type AssociationHasher = std::collections::hash_map::RandomState;

type Entries = HashMap<Key, Value, AssociationHasher>;

/// A shared, unordered mapping from [`Key`] to [`Value`].
///
/// Like [`Sequence`](super::Sequence), an `Association` is a handle and
/// cloning it shares the entries. Traversal order is whatever the hash map
/// yields and must not be relied on.
///
/// An association never stores [`Value::Null`]: inserting `Null` removes
/// the key, so a slot that is "absent" and a slot that is "currently null"
/// are indistinguishable.
///
/// # Examples
///
/// ```rust
/// use underbar::{Association, Key, Value};
///
/// let association = Association::new();
/// association.insert(Key::from("a"), Value::from(1));
/// assert_eq!(association.get(&Key::from("a")), Some(Value::from(1)));
///
/// association.insert(Key::from("a"), Value::Null);
/// assert!(!association.contains_key(&Key::from("a")));
/// ```
#[derive(Clone, Default)]
pub struct Association(ReferenceCounter<RefCell<Entries>>);

impl Association {
    /// Creates an empty association.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the association holds no entries.
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Returns a copy of the value stored under `key`.
    pub fn get(&self, key: &Key) -> Option<Value> {
        self.0.borrow().get(key).cloned()
    }

    /// Returns `true` if `key` has an entry.
    pub fn contains_key(&self, key: &Key) -> bool {
        self.0.borrow().contains_key(key)
    }

    /// Stores `value` under `key`, returning the previous value.
    ///
    /// Storing [`Value::Null`] removes the entry.
    pub fn insert(&self, key: Key, value: Value) -> Option<Value> {
        let mut entries = self.0.borrow_mut();
        if value.is_null() {
            entries.remove(&key)
        } else {
            entries.insert(key, value)
        }
    }

    /// Removes the entry under `key`, returning its value.
    pub fn remove(&self, key: &Key) -> Option<Value> {
        self.0.borrow_mut().remove(key)
    }

    /// Copies the entries out, in traversal order.
    pub fn entries(&self) -> Vec<(Key, Value)> {
        self.0
            .borrow()
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect()
    }

    /// Copies the keys out, in traversal order.
    pub fn keys(&self) -> Vec<Key> {
        self.0.borrow().keys().cloned().collect()
    }

    /// Copies the values out, in traversal order.
    pub fn values(&self) -> Vec<Value> {
        self.0.borrow().values().cloned().collect()
    }

    /// Returns `true` if both handles share the same entries.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        ReferenceCounter::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn address(&self) -> *const () {
        ReferenceCounter::as_ptr(&self.0).cast()
    }
}

impl FromIterator<(Key, Value)> for Association {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        let association = Self::new();
        for (key, value) in iter {
            association.insert(key, value);
        }
        association
    }
}

impl fmt::Debug for Association {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        super::debug_container(self.address(), formatter, "{...}", |formatter| {
            formatter.debug_map().entries(self.0.borrow().iter()).finish()
        })
    }
}
