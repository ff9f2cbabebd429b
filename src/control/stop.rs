//! Scoped early termination for producers.
//!
//! A receiver stops its producer by returning the [`Flow::Break`] minted by a
//! [`Stopper`]. Every producer propagates the break with `?` until it reaches
//! the [`stoppable`] frame that minted it. That frame, and only that frame,
//! turns the break back into a normal return.
//!
//! # Examples
//!
//! ```rust
//! use continuable::control::{stoppable, Outcome};
//! use continuable::prelude::*;
//! use std::ops::ControlFlow;
//!
//! let mut visited = 0;
//! let outcome = stoppable(&from_iter(1..=10), |x, stop| {
//!     visited += 1;
//!     if x == 4 { stop.stop_with(x * 10) } else { ControlFlow::Continue(()) }
//! });
//!
//! assert_eq!(outcome.continue_value(), Some(Outcome::Stopped(Some(40))));
//! assert_eq!(visited, 4);
//! ```

use std::cell::Cell;
use std::fmt;
use std::marker::PhantomData;
use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::producer::Continuable;

/// The signal a receiver hands back to its producer.
///
/// `Continue(())` asks for the next element; `Break(stop)` unwinds to the
/// frame that minted `stop`.
pub type Flow = ControlFlow<Stop>;

// =============================================================================
// Frame Identity
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrameId(u64);

impl FrameId {
    fn fresh() -> Self {
        static NEXT_FRAME: AtomicU64 = AtomicU64::new(0);
        Self(NEXT_FRAME.fetch_add(1, Ordering::Relaxed))
    }
}

// =============================================================================
// Stop Token
// =============================================================================

/// An early-termination token travelling up through `Flow::Break`.
///
/// Tokens are only minted by a [`Stopper`] and can only be matched by the
/// [`stoppable`] frame that owns that stopper. They cannot be cloned.
#[must_use = "a stop token must be returned to unwind the producer"]
pub struct Stop {
    frame: FrameId,
}

impl Stop {
    fn belongs_to(&self, frame: FrameId) -> bool {
        self.frame == frame
    }
}

impl fmt::Debug for Stop {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Stop")
            .field("frame", &self.frame.0)
            .finish()
    }
}

// =============================================================================
// Stopper
// =============================================================================

/// The stop capability of one [`stoppable`] frame.
///
/// The stopper borrows its frame's payload slot, so it cannot escape the
/// frame, and it is neither `Send` nor `Sync`.
pub struct Stopper<'frame, P> {
    frame: FrameId,
    payload: &'frame Cell<Option<P>>,
    _not_send: PhantomData<*const ()>,
}

impl<P> Stopper<'_, P> {
    /// Stops the producer without a payload.
    #[inline]
    pub fn stop(&self) -> Flow {
        ControlFlow::Break(Stop { frame: self.frame })
    }

    /// Stops the producer and hands `payload` to the frame.
    ///
    /// Stopping twice within one frame is impossible in practice (the first
    /// break unwinds the producer); if a receiver nonetheless builds two
    /// breaks, the last recorded payload wins.
    #[inline]
    pub fn stop_with(&self, payload: P) -> Flow {
        self.payload.set(Some(payload));
        self.stop()
    }
}

impl<P> fmt::Debug for Stopper<'_, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Stopper")
            .field("frame", &self.frame.0)
            .finish_non_exhaustive()
    }
}

static_assertions::assert_not_impl_any!(Stopper<'static, i32>: Send, Sync);

// =============================================================================
// Outcome
// =============================================================================

/// How a [`stoppable`] frame ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome<P> {
    /// The producer ran out of elements.
    Exhausted,
    /// The receiver stopped the producer, with or without a payload.
    Stopped(Option<P>),
}

impl<P> Outcome<P> {
    /// Returns `true` if the receiver stopped the producer.
    #[inline]
    pub const fn is_stopped(&self) -> bool {
        matches!(self, Self::Stopped(_))
    }

    /// Returns `true` if the producer ran out of elements.
    #[inline]
    pub const fn is_exhausted(&self) -> bool {
        matches!(self, Self::Exhausted)
    }

    /// Returns the stop payload, if there was one.
    #[inline]
    pub fn into_payload(self) -> Option<P> {
        match self {
            Self::Exhausted => None,
            Self::Stopped(payload) => payload,
        }
    }
}

// =============================================================================
// stoppable
// =============================================================================

/// Drives `producer`, handing each element and a fresh [`Stopper`] to `receiver`.
///
/// Returns `Continue(Outcome::Exhausted)` when the producer runs out,
/// `Continue(Outcome::Stopped(payload))` when the receiver used this frame's
/// stopper, and `Break(stop)` unchanged when the receiver returned a token
/// belonging to some enclosing frame. Inside a combinator the result is
/// usually propagated with `?`; at the top level use
/// [`ControlFlow::continue_value`].
///
/// # Examples
///
/// ```rust
/// use continuable::control::{stoppable, Outcome};
/// use continuable::prelude::*;
/// use std::ops::ControlFlow;
///
/// let outcome = stoppable(&from_iter(1..=3), |_, _| ControlFlow::Continue(()));
/// assert_eq!(outcome.continue_value(), Some(Outcome::<()>::Exhausted));
/// ```
pub fn stoppable<C, P, F>(producer: &C, mut receiver: F) -> ControlFlow<Stop, Outcome<P>>
where
    C: Continuable + ?Sized,
    F: FnMut(C::Item, &Stopper<'_, P>) -> Flow,
{
    let payload = Cell::new(None);
    let stopper = Stopper {
        frame: FrameId::fresh(),
        payload: &payload,
        _not_send: PhantomData,
    };

    match producer.drive(|item| receiver(item, &stopper)) {
        ControlFlow::Continue(()) => ControlFlow::Continue(Outcome::Exhausted),
        ControlFlow::Break(stop) if stop.belongs_to(stopper.frame) => {
            ControlFlow::Continue(Outcome::Stopped(payload.take()))
        }
        ControlFlow::Break(stop) => ControlFlow::Break(stop),
    }
}
