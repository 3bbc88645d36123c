//! Operations on associations.
//!
//! - [`keys`], [`values`], [`pairs`]: structural projections
//! - [`invert`]: swapping keys and values
//! - [`functions`]: sorted names of callable entries
//! - [`extend`], [`defaults`]: in-place merges into a destination
//! - [`pick`], [`omit`], [`has`]: key-based selection
//! - [`copy`], [`tap`]: shallow copies and chain inspection
//!
//! The projections walk their container with the same kernel as the
//! combinators, so a sequence is accepted too and contributes its indices
//! as keys. [`extend`] and [`defaults`] are the only operations that mutate
//! an argument.
//!
//! # Examples
//!
//! ```rust
//! use underbar::association::{extend, omit, pick};
//! use underbar::{association, Value};
//!
//! let settings = association! { "color" => "red", "size" => 3 };
//! extend(&settings, &[association! { "size" => 4 }]);
//!
//! assert_eq!(pick(&settings, &[Value::from("size")]), association! { "size" => 4 });
//! assert_eq!(omit(&settings, &[Value::from("size")]), association! { "color" => "red" });
//! ```

mod merge;
mod projection;
mod selection;
mod utility;

pub use merge::{defaults, extend};
pub use projection::{functions, invert, keys, pairs, values};
pub use selection::{has, omit, pick};
pub use utility::{copy, tap};

pub use projection::functions as methods;
pub use projection::keys as slots;
