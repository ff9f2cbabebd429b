//! # continuable
//!
//! Push-style (continuation-passing) sequences and a library of combinators
//! over them.
//!
//! A producer is not something you pull values from. It is handed a
//! receiver, calls it once per element on the calling thread, and returns
//! when it runs out of elements or the receiver asks it to stop. No
//! suspended state is kept between elements, so producers are cheap to
//! write: any loop that calls a closure is one.
//!
//! ## Overview
//!
//! - **Producers**: the [`Continuable`](producer::Continuable) trait and its
//!   constructors ([`from_fn`](producer::from_fn),
//!   [`from_iter`](producer::from_iter), ...)
//! - **Early termination**: [`stoppable`](control::stoppable) frames with
//!   scoped, payload-carrying stop tokens
//! - **Combinators**: transformation, windowing and structural combinators,
//!   all available as methods of [`ContinuableExt`](producer::ContinuableExt)
//! - **Reducers**: folds, counts, sums, predicates and collection
//! - **Zip**: explicit materialization strategies for lockstep iteration
//! - **Bridge**: turning a producer back into an [`Iterator`] through a
//!   bounded channel
//!
//! ## Feature Flags
//!
//! - `channel` (default): the channel bridge and the channel zip strategy,
//!   backed by tokio
//! - `serde`: `Serialize`/`Deserialize` for
//!   [`GroupTable`](structure::GroupTable)
//! - `fxhash` / `ahash`: faster hashers for grouping and `distinct`
//! - `full`: `channel`, `serde` and `fxhash`
//!
//! ## Example
//!
//! ```rust
//! use continuable::prelude::*;
//!
//! let fizz = from_fn(|emit: &mut dyn FnMut(u32) -> Flow| {
//!     let mut n = 0;
//!     loop {
//!         n += 1;
//!         if n % 3 == 0 {
//!             emit(n)?;
//!         }
//!     }
//! });
//!
//! let firsts = fizz.clone().take(4).collect();
//! assert_eq!(firsts, vec![3, 6, 9, 12]);
//!
//! let (evens, odds) = (fizz.clone().filter(|n| n % 2 == 0), fizz.filter(|n| n % 2 == 1));
//! assert_eq!(evens.first(), Some(6));
//! assert_eq!(odds.take(3).sum::<u32>(), 3 + 9 + 15);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the producer trait and its extension, the constructors, and
/// the free functions building producers out of many.
///
/// ```rust
/// use continuable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::control::{Flow, Outcome, Stopper, stoppable};
    pub use crate::producer::{
        BoxContinuable, Continuable, ContinuableExt, empty, from_fn, from_iter, from_iter_once,
        once, repeat_with, successors,
    };
    pub use crate::structure::{GroupTable, chain_all, product_all};
    pub use crate::zip::ZipStrategy;
}

pub mod control;
pub mod error;
pub mod producer;
pub mod reduce;
pub mod structure;
pub mod transform;
pub mod window;
pub mod zip;

#[cfg(feature = "channel")]
pub mod bridge;

pub use error::ContinuableError;
