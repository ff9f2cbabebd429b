//! Structural combinators: concatenation, nesting, repetition, products,
//! grouping and de-duplication.
//!
//! # Examples
//!
//! ```rust
//! use continuable::prelude::*;
//!
//! let pairs = from_iter(1..=2).cartesian_product(from_iter(1..=3));
//! assert_eq!(
//!     pairs.collect(),
//!     vec![(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]
//! );
//!
//! let sums = from_iter(1..=10).group_by_reduce(|x| x % 4, |sum, x| sum + x);
//! assert_eq!(sums.entries(), &[(1, 15), (2, 18), (3, 10), (0, 12)]);
//! ```

mod chain;
mod cycle;
mod distinct;
mod flatten;
mod group;
mod hash;
mod product;

pub use chain::{Chain, ChainAll, chain_all};
pub use cycle::Cycle;
pub use distinct::Distinct;
pub use flatten::Flatten;
pub use group::{GroupTable, group_by, group_by_reduce, group_by_reduce_with};
pub use hash::GroupHasher;
pub use product::{Product, ProductAll, Row, product_all};
