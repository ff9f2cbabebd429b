//! Control flow between producers and receivers.
//!
//! This module provides the early-termination protocol every combinator
//! that stops its upstream is built on:
//!
//! - [`Flow`]: what a receiver returns to its producer
//! - [`Stop`]: the frame-tagged token carried by `Flow::Break`
//! - [`Stopper`]: the stop capability handed to a receiver
//! - [`stoppable`]: installs a frame and reports its [`Outcome`]
//!
//! # Examples
//!
//! ```rust
//! use continuable::control::{stoppable, Outcome};
//! use continuable::prelude::*;
//!
//! let first_even = stoppable(&from_iter([1, 3, 4, 5, 6]), |x, stop| {
//!     if x % 2 == 0 { stop.stop_with(x) } else { std::ops::ControlFlow::Continue(()) }
//! });
//! assert_eq!(first_even.continue_value(), Some(Outcome::Stopped(Some(4))));
//! ```

mod stop;

pub use stop::{Flow, Outcome, Stop, Stopper, stoppable};
