use std::fmt;
use std::ops::ControlFlow;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::runtime::{self, BlockingError};
use crate::control::{Outcome, Stopper, stoppable};
use crate::error::ContinuableError;
use crate::producer::Continuable;

/// The default buffer size of a producer channel.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 64;

/// A pull-style handle on a producer running on a background task.
///
/// Created by [`into_channel`]. The producer runs ahead of the consumer by at
/// most the channel capacity. Dropping the handle closes the channel; the
/// producer notices at its next element and stops.
///
/// If the producer panics, the panic is re-raised on the consumer once it
/// has drained everything sent before the panic.
pub struct ChannelIter<T> {
    receiver: Option<mpsc::Receiver<T>>,
    task: Option<JoinHandle<()>>,
}

/// Drives `producer` on a blocking task of the shared runtime, pushing its
/// elements into a channel of `capacity` slots.
///
/// # Errors
///
/// Returns [`ContinuableError::InvalidArgument`] if `capacity` is zero, and
/// [`ContinuableError::Blocking`] if the calling thread could never pull from
/// the channel (it is on a current-thread runtime).
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let squares = from_iter(1..).map(|x: u64| x * x).into_channel(4)?;
/// assert_eq!(squares.take(3).collect::<Vec<_>>(), vec![1, 4, 9]);
/// # Ok::<(), continuable::ContinuableError>(())
/// ```
pub fn into_channel<C>(producer: C, capacity: usize) -> Result<ChannelIter<C::Item>, ContinuableError>
where
    C: Continuable + Send + 'static,
    C::Item: Send + 'static,
{
    if capacity == 0 {
        return Err(ContinuableError::invalid_argument(
            "into_channel",
            "channel capacity must be greater than zero",
        ));
    }
    runtime::ensure_blocking_allowed()?;

    let (sender, receiver) = mpsc::channel(capacity);
    let task = runtime::handle().spawn_blocking(move || {
        tracing::trace!(capacity, "channel producer started");
        let outcome = stoppable(&producer, |item, stop: &Stopper<'_, ()>| {
            if sender.blocking_send(item).is_err() {
                stop.stop()
            } else {
                ControlFlow::Continue(())
            }
        });
        match outcome {
            ControlFlow::Continue(Outcome::Stopped(_)) => {
                tracing::debug!("channel producer stopped: consumer hung up");
            }
            ControlFlow::Continue(Outcome::Exhausted) | ControlFlow::Break(_) => {
                tracing::trace!("channel producer finished");
            }
        }
    });

    Ok(ChannelIter {
        receiver: Some(receiver),
        task: Some(task),
    })
}

impl<T> ChannelIter<T> {
    /// Waits for the next element.
    ///
    /// Returns `Ok(None)` once the producer is exhausted, and keeps doing so
    /// on later calls.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuableError::Blocking`] if the calling thread cannot
    /// block (it is on a current-thread runtime).
    ///
    /// # Panics
    ///
    /// Re-raises a panic of the producer once the elements sent before it
    /// have been consumed.
    pub fn try_next(&mut self) -> Result<Option<T>, ContinuableError> {
        let Some(receiver) = self.receiver.as_mut() else {
            return Ok(None);
        };
        if let Some(item) = runtime::try_run_blocking(receiver.recv())? {
            return Ok(Some(item));
        }

        self.receiver = None;
        self.join_producer()?;
        Ok(None)
    }

    fn join_producer(&mut self) -> Result<(), BlockingError> {
        let Some(task) = self.task.take() else {
            return Ok(());
        };
        match runtime::try_run_blocking(task)? {
            Ok(()) => Ok(()),
            Err(error) if error.is_panic() => std::panic::resume_unwind(error.into_panic()),
            Err(error) => {
                tracing::debug!(%error, "channel producer task did not complete");
                Ok(())
            }
        }
    }
}

impl<T> Iterator for ChannelIter<T> {
    type Item = T;

    /// # Panics
    ///
    /// Panics if the calling thread cannot block (see
    /// [`ChannelIter::try_next`]), and re-raises a panic of the producer.
    fn next(&mut self) -> Option<T> {
        match self.try_next() {
            Ok(item) => item,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> Drop for ChannelIter<T> {
    fn drop(&mut self) {
        if self.receiver.take().is_some() {
            tracing::debug!("channel consumer dropped before the producer finished");
        }
    }
}

impl<T> fmt::Debug for ChannelIter<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ChannelIter")
            .field("open", &self.receiver.is_some())
            .finish_non_exhaustive()
    }
}
