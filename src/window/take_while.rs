use std::fmt;
use std::ops::ControlFlow;

use crate::control::{Flow, Stopper, stoppable};
use crate::producer::Continuable;

/// A producer yielding upstream elements until the first one that fails a
/// predicate; that element and everything after it are not yielded.
///
/// Created by [`ContinuableExt::take_while`](crate::producer::ContinuableExt::take_while).
#[must_use = "producers do nothing unless driven"]
#[derive(Clone)]
pub struct TakeWhile<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> TakeWhile<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<C, P> Continuable for TakeWhile<C, P>
where
    C: Continuable,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        stoppable(&self.upstream, |item, stop: &Stopper<'_, ()>| {
            if (self.predicate)(&item) {
                receiver(item)
            } else {
                stop.stop()
            }
        })?;
        ControlFlow::Continue(())
    }
}

impl<C: fmt::Debug, P> fmt::Debug for TakeWhile<C, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("TakeWhile")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}
