use std::ops::ControlFlow;
use std::sync::Arc;

use crate::bridge::runtime::ensure_blocking_allowed;
use crate::bridge::{ChannelIter, into_channel};
use crate::control::Flow;
use crate::error::ContinuableError;
use crate::producer::Continuable;

fn validate(combinator: &'static str, capacity: usize) -> Result<(), ContinuableError> {
    if capacity == 0 {
        return Err(ContinuableError::invalid_argument(
            combinator,
            "channel capacity must be greater than zero",
        ));
    }
    ensure_blocking_allowed()?;
    Ok(())
}

/// Opens the channel of one input; the capacity and the runtime context were
/// checked at construction.
fn open<C>(producer: &Arc<C>, capacity: usize) -> ChannelIter<C::Item>
where
    C: Continuable + Send + Sync + 'static,
    C::Item: Send + 'static,
{
    match into_channel(Arc::clone(producer), capacity) {
        Ok(channel) => channel,
        Err(error) => panic!("cannot zip through channels here: {error}"),
    }
}

// =============================================================================
// ZipChannel
// =============================================================================

/// Two producers zipped through bounded channels.
///
/// Created by [`zip_channel`].
#[must_use = "producers do nothing unless driven"]
#[derive(Debug)]
pub struct ZipChannel<A, B> {
    left: Arc<A>,
    right: Arc<B>,
    capacity: usize,
}

impl<A, B> Clone for ZipChannel<A, B> {
    fn clone(&self) -> Self {
        Self {
            left: Arc::clone(&self.left),
            right: Arc::clone(&self.right),
            capacity: self.capacity,
        }
    }
}

/// Zips two producers by running each on its own background task, feeding a
/// channel of `capacity` elements.
///
/// At most `capacity` elements per input are buffered. When the zip ends,
/// because an input ran out or the receiver stopped, both channels are closed
/// and the background tasks stop at their next element.
///
/// # Errors
///
/// Returns [`ContinuableError::InvalidArgument`] if `capacity` is zero, and
/// [`ContinuableError::Blocking`] when called from a thread that cannot
/// block, such as one driving a current-thread tokio runtime.
///
/// # Panics
///
/// Driving the zip panics when it is moved to a thread that cannot block
/// after construction.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
/// use continuable::zip::zip_channel;
///
/// let pairs = zip_channel(from_iter(1..), from_iter(["a", "b"]), 2)?;
/// assert_eq!(pairs.collect(), vec![(1, "a"), (2, "b")]);
/// # Ok::<(), continuable::ContinuableError>(())
/// ```
pub fn zip_channel<A, B>(left: A, right: B, capacity: usize) -> Result<ZipChannel<A, B>, ContinuableError>
where
    A: Continuable + Send + Sync + 'static,
    A::Item: Send + 'static,
    B: Continuable + Send + Sync + 'static,
    B::Item: Send + 'static,
{
    validate("zip_channel", capacity)?;
    Ok(ZipChannel {
        left: Arc::new(left),
        right: Arc::new(right),
        capacity,
    })
}

impl<A, B> Continuable for ZipChannel<A, B>
where
    A: Continuable + Send + Sync + 'static,
    A::Item: Send + 'static,
    B: Continuable + Send + Sync + 'static,
    B::Item: Send + 'static,
{
    type Item = (A::Item, B::Item);

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut left = open(&self.left, self.capacity);
        let mut right = open(&self.right, self.capacity);
        while let Some(a) = left.next() {
            let Some(b) = right.next() else { break };
            receiver((a, b))?;
        }
        ControlFlow::Continue(())
    }
}

// =============================================================================
// ZipAllChannel
// =============================================================================

/// Any number of producers of one item type zipped through bounded channels.
///
/// Created by [`zip_all_channel`].
#[must_use = "producers do nothing unless driven"]
#[derive(Debug)]
pub struct ZipAllChannel<C> {
    producers: Vec<Arc<C>>,
    capacity: usize,
}

impl<C> Clone for ZipAllChannel<C> {
    fn clone(&self) -> Self {
        Self {
            producers: self.producers.clone(),
            capacity: self.capacity,
        }
    }
}

/// Zips `producers` into rows, running each on its own background task.
///
/// Row `i` holds the `i`-th element of every producer, in argument order.
/// Zipping no producers yields no rows.
///
/// # Errors
///
/// Same as [`zip_channel`].
///
/// # Panics
///
/// Same as [`zip_channel`].
pub fn zip_all_channel<I>(producers: I, capacity: usize) -> Result<ZipAllChannel<I::Item>, ContinuableError>
where
    I: IntoIterator,
    I::Item: Continuable + Send + Sync + 'static,
    <I::Item as Continuable>::Item: Send + 'static,
{
    validate("zip_all_channel", capacity)?;
    Ok(ZipAllChannel {
        producers: producers.into_iter().map(Arc::new).collect(),
        capacity,
    })
}

impl<C> Continuable for ZipAllChannel<C>
where
    C: Continuable + Send + Sync + 'static,
    C::Item: Send + 'static,
{
    type Item = Vec<C::Item>;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        if self.producers.is_empty() {
            return ControlFlow::Continue(());
        }

        let mut channels: Vec<_> = self
            .producers
            .iter()
            .map(|producer| open(producer, self.capacity))
            .collect();
        while let Some(row) = channels.iter_mut().map(Iterator::next).collect::<Option<Vec<_>>>() {
            receiver(row)?;
        }
        ControlFlow::Continue(())
    }
}
