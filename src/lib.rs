//! # underbar
//!
//! A functional utility library for Rust providing map/filter/reduce-style
//! combinators over dynamically shaped sequences and associations.
//!
//! ## Overview
//!
//! Every combinator accepts a [`Value`] and decides at call time whether it
//! is looking at an ordered [`Sequence`], an unordered [`Association`], or
//! neither. The shape differences (index versus key, truthiness, value
//! extraction) are normalized into one calling convention, and shapes that
//! are neither degrade silently to an empty result.
//!
//! - **Predicates** and the **shape classifier**: [`predicate`]
//! - **Iteration kernel** and **combinators**: [`combinator`]
//! - **Sequence-only operations**: [`sequence`](mod@sequence)
//! - **Association-only operations**: [`association`](mod@association)
//! - **Repeater**: [`times`]
//! - **Chaining**: [`Chain`]
//!
//! Everything is also re-exported at the crate root, aliases included
//! (`inject`, `foldl`, `detect`, `select`, `all`, `any`, `include`, `slots`,
//! `methods`, ...).
//!
//! ## Feature Flags
//!
//! - `combinator`: The iteration kernel and the shape-generic combinators
//! - `sequence`: Sequence-only operations
//! - `association`: Association-only operations
//! - `repeater`: The `times` repeater
//! - `chain`: Fluent chaining
//! - `serde`: `Serialize`/`Deserialize` for [`Value`] and [`Key`]
//! - `fxhash` / `ahash`: Faster (non-HashDoS-resistant) association hashing
//! - `full`: Enable all features except the hasher selection
//!
//! ## Example
//!
//! ```rust
//! use underbar::{association, defaults, map, pick, sequence, Function, Value};
//!
//! let double = Value::from(Function::lift(|arguments| {
//!     Value::from(arguments[0].as_integer().unwrap_or(0) * 2)
//! }));
//! assert_eq!(map(&sequence![1, 2, 3], &double, None).unwrap(), sequence![2, 4, 6]);
//!
//! let options = association! { "a" => 1 };
//! defaults(&options, &[association! { "a" => 2, "b" => 2 }, association! { "b" => 3, "c" => 4 }]);
//! assert_eq!(options, association! { "a" => 1, "b" => 2, "c" => 4 });
//!
//! let record = association! { "a" => 1, "b" => 2, "c" => 3 };
//! assert_eq!(pick(&record, &[sequence!["a", "c"]]), association! { "a" => 1, "c" => 3 });
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the value model, the error type and every enabled operation.
///
/// # Usage
///
/// ```rust
/// use underbar::prelude::*;
///
/// assert_eq!(size(&sequence![1, 2]), 2);
/// ```
pub mod prelude {
    pub use crate::predicate::*;
    pub use crate::{Association, Call, Function, Key, Sequence, UnderbarError, Value};
    pub use crate::{association, sequence};

    #[cfg(feature = "combinator")]
    pub use crate::combinator::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "association")]
    pub use crate::association::*;

    #[cfg(feature = "repeater")]
    pub use crate::repeater::*;

    #[cfg(feature = "chain")]
    pub use crate::chain::*;
}

mod error;
pub mod predicate;
mod value;

#[cfg(feature = "combinator")]
pub mod combinator;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "association")]
pub mod association;

#[cfg(feature = "repeater")]
pub mod repeater;

#[cfg(feature = "chain")]
pub mod chain;

pub use error::UnderbarError;
pub use value::{Association, AssociationHasher, Call, Function, Key, Sequence, Value};

pub use predicate::{
    Shape, classify, is_array, is_boolean, is_empty, is_float, is_function, is_integer, is_null,
    is_number, is_string, is_table,
};

#[cfg(feature = "combinator")]
pub use combinator::{
    all, any, contains, detect, each, every, filter, find, find_where, foldl, foldr, include,
    inject, invoke, map, max, min, pluck, r#where, reduce, reduce_right, reject, select, size,
    some,
};

#[cfg(feature = "sequence")]
pub use sequence::{
    compact, difference, first, flatten, initial, last, range, rest, table, uniq, unique, without,
};

#[cfg(feature = "association")]
pub use association::{
    copy, defaults, extend, functions, has, invert, keys, methods, omit, pairs, pick, slots, tap,
    values,
};

#[cfg(feature = "repeater")]
pub use repeater::times;

#[cfg(feature = "chain")]
pub use chain::{Chain, chain};
