//! Higher-order combinators shared by sequences and associations.
//!
//! Every combinator here is the iteration kernel ([`each`]) plus an
//! accumulation or termination policy:
//!
//! - [`map`], [`reduce`], [`reduce_right`]: transform and fold
//! - [`find`], [`filter`], [`reject`]: select by predicate
//! - [`every`], [`some`], [`contains`]: short-circuiting tests
//! - [`r#where`], [`find_where`]: select by property match
//! - [`invoke`], [`pluck`]: address a named slot on each element
//! - [`max`], [`min`], [`size`]: scans and counts
//!
//! Each combinator classifies its container once. A sequence is walked in
//! index order and the callback receives the 0-based index; an association
//! is walked in traversal order and the callback receives the key. Any
//! other value degrades silently to an empty result.
//!
//! # Calling Convention
//!
//! Callbacks are [`Value::Function`](crate::Value::Function)s invoked as
//! `(element, index_or_key, container)`; `reduce` prepends the memo. The
//! optional `context` argument is bound as the call's receiver.
//!
//! # Examples
//!
//! ```rust
//! use underbar::combinator::{filter, reduce};
//! use underbar::{sequence, Function, Value};
//!
//! let odd = Value::from(Function::lift(|arguments| {
//!     Value::from(arguments[0].as_integer().is_some_and(|integer| integer % 2 == 1))
//! }));
//! let add = Value::from(Function::lift(|arguments| {
//!     let memo = arguments[0].as_integer().unwrap_or(0);
//!     Value::from(memo + arguments[1].as_integer().unwrap_or(0))
//! }));
//!
//! let odds = filter(&sequence![1, 2, 3, 4, 5], &odd, None).unwrap();
//! assert_eq!(odds, sequence![1, 3, 5]);
//! assert_eq!(reduce(&odds, &add, Value::from(0), None).unwrap(), Value::from(9));
//! ```

mod each;
mod extremum;
mod invoke;
mod search;
mod transform;

pub(crate) use each::{traverse, visit};

pub use each::each;
pub use extremum::{max, min, size};
pub use invoke::{invoke, pluck};
pub use search::{contains, every, filter, find, find_where, r#where, reject, some};
pub use transform::{map, reduce, reduce_right};

pub use search::contains as include;
pub use search::every as all;
pub use search::filter as select;
pub use search::find as detect;
pub use search::some as any;
pub use transform::reduce as foldl;
pub use transform::reduce as inject;
pub use transform::reduce_right as foldr;
