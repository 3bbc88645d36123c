//! Operations defined only for ordered sequences.
//!
//! - [`first`], [`initial`], [`last`], [`rest`]: position-based slicing
//! - [`compact`], [`flatten`]: removing falsy elements and nesting
//! - [`without`], [`difference`], [`uniq`]: exclusion by value
//! - [`table`]: building an association from keys and values or pairs
//! - [`range`]: integer sequences
//!
//! Every function returns a fresh sequence (or association, for
//! [`table`]) and leaves its input untouched. Passing anything other than
//! a sequence yields an empty result.
//!
//! # Examples
//!
//! ```rust
//! use underbar::sequence::{compact, flatten, rest};
//! use underbar::sequence;
//!
//! let nested = sequence![0, sequence![1, sequence![false, 2]], 3];
//! assert_eq!(compact(&flatten(&nested, false)), sequence![1, 2, 3]);
//! assert_eq!(rest(&nested, 2), sequence![3]);
//! ```

mod flatten;
mod set;
mod slice;
mod table;

pub use flatten::{compact, flatten};
pub use set::{difference, uniq, without};
pub use slice::{first, initial, last, rest};
pub use table::{range, table};

pub use set::uniq as unique;
