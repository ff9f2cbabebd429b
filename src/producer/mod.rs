//! The push-style producer contract.
//!
//! A producer is not something you pull values from: it is handed a
//! receiver and calls it once per element, in order, synchronously, on the
//! calling thread. The receiver answers every element with a [`Flow`];
//! a `Break` must be propagated straight back to the caller (use `?`).
//!
//! # Constructing Producers
//!
//! - [`from_fn`]: an arbitrary block of code that calls the receiver
//! - [`from_iter`]: replays any cloneable pull-style iterable
//! - [`from_iter_once`]: consumes a once-only iterator
//! - [`empty`], [`once`], [`repeat_with`], [`successors`]
//!
//! # Examples
//!
//! ```rust
//! use continuable::prelude::*;
//! use std::ops::ControlFlow;
//!
//! let squares = from_fn(|emit: &mut dyn FnMut(u32) -> Flow| {
//!     for n in 1..=4 {
//!         emit(n * n)?;
//!     }
//!     ControlFlow::Continue(())
//! });
//!
//! assert_eq!(squares.collect(), vec![1, 4, 9, 16]);
//! // Producers are restartable
//! assert_eq!(squares.sum::<u32>(), 30);
//! ```

mod boxed;
mod ext;
mod from_fn;
mod iter;
mod sources;

use std::rc::Rc;
use std::sync::Arc;

use crate::control::Flow;

pub use boxed::BoxContinuable;
pub use ext::ContinuableExt;
pub use from_fn::{FromFn, from_fn};
pub use iter::{FromIter, FromIterOnce, from_iter, from_iter_once};
pub use sources::{Empty, Once, RepeatWith, Successors, empty, once, repeat_with, successors};

/// A push-style sequence.
///
/// Implementors call `receiver` once per element, in order, and return as
/// soon as the receiver returns `Flow::Break`, handing the break back
/// unchanged. A producer returns `Flow::Continue(())` once it has no more
/// elements.
///
/// `drive` takes `&self`: every producer can be driven any number of times,
/// and two drives with equivalent receivers see the same elements, unless
/// the producer documents otherwise (see [`from_iter_once`]).
///
/// No producer may assume its receiver returns `Continue`.
///
/// # Examples
///
/// ```rust
/// use continuable::control::Flow;
/// use continuable::producer::Continuable;
/// use std::ops::ControlFlow;
///
/// struct Countdown(u32);
///
/// impl Continuable for Countdown {
///     type Item = u32;
///
///     fn drive<F>(&self, mut receiver: F) -> Flow
///     where
///         F: FnMut(u32) -> Flow,
///     {
///         for n in (1..=self.0).rev() {
///             receiver(n)?;
///         }
///         ControlFlow::Continue(())
///     }
/// }
///
/// let mut seen = Vec::new();
/// let _ = Countdown(3).drive(|n| {
///     seen.push(n);
///     ControlFlow::Continue(())
/// });
/// assert_eq!(seen, vec![3, 2, 1]);
/// ```
#[must_use = "producers do nothing unless driven"]
pub trait Continuable {
    /// The type of the produced elements.
    type Item;

    /// Calls `receiver` once per element until the producer is exhausted or
    /// the receiver breaks.
    fn drive<F>(&self, receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow;
}

impl<C: Continuable + ?Sized> Continuable for &C {
    type Item = C::Item;

    #[inline]
    fn drive<F>(&self, receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        (**self).drive(receiver)
    }
}

impl<C: Continuable + ?Sized> Continuable for Box<C> {
    type Item = C::Item;

    #[inline]
    fn drive<F>(&self, receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        (**self).drive(receiver)
    }
}

impl<C: Continuable + ?Sized> Continuable for Rc<C> {
    type Item = C::Item;

    #[inline]
    fn drive<F>(&self, receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        (**self).drive(receiver)
    }
}

impl<C: Continuable + ?Sized> Continuable for Arc<C> {
    type Item = C::Item;

    #[inline]
    fn drive<F>(&self, receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        (**self).drive(receiver)
    }
}
