//! Element-wise transformation combinators.
//!
//! - [`Map`]: one output per input
//! - [`Filter`]: keeps the elements satisfying a predicate
//! - [`Enumerate`]: pairs elements with a 1-based index
//! - [`Inspect`]: runs a side effect and passes elements through
//!
//! All of them are created through [`ContinuableExt`](crate::producer::ContinuableExt).
//!
//! # Examples
//!
//! ```rust
//! use continuable::prelude::*;
//!
//! let labelled = from_iter(["a", "b", "c", "d"])
//!     .enumerate()
//!     .filter(|(index, _)| index % 2 == 0)
//!     .map(|(index, letter)| format!("{index}{letter}"));
//! assert_eq!(labelled.collect(), vec!["2b", "4d"]);
//! ```

mod enumerate;
mod filter;
mod inspect;
mod map;

pub use enumerate::Enumerate;
pub use filter::Filter;
pub use inspect::Inspect;
pub use map::Map;
