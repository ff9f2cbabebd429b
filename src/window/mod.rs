//! Windowing combinators.
//!
//! - [`Take`] / [`TakeWhile`]: a prefix, ending the upstream early through
//!   [`stoppable`](crate::control::stoppable)
//! - [`Skip`] / [`SkipWhile`]: everything after a prefix
//! - [`Partition`] / [`PartitionStep`]: fixed-size chunks and sliding windows
//!
//! # Examples
//!
//! ```rust
//! use continuable::prelude::*;
//!
//! let chunks = from_iter(1..=9).partition(3).unwrap();
//! assert_eq!(chunks.collect(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
//!
//! let windows = from_iter(1..=9).partition_step(3, 2).unwrap();
//! assert_eq!(
//!     windows.collect(),
//!     vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6, 7], vec![7, 8, 9]]
//! );
//! ```

mod partition;
mod skip;
mod skip_while;
mod take;
mod take_while;

pub use partition::{Partition, PartitionStep};
pub use skip::Skip;
pub use skip_while::SkipWhile;
pub use take::Take;
pub use take_while::TakeWhile;
