use std::ops::ControlFlow;

use crate::control::{Flow, Stopper, stoppable};
use crate::producer::Continuable;

/// A producer yielding at most the first `limit` upstream elements.
///
/// The upstream is stopped right after the `limit`-th element reaches the
/// receiver, so nothing past it is ever produced. A limit larger than the
/// upstream is fine: fewer elements are yielded.
///
/// Created by [`ContinuableExt::take`](crate::producer::ContinuableExt::take).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct Take<C> {
    upstream: C,
    limit: usize,
}

impl<C> Take<C> {
    pub(crate) const fn new(upstream: C, limit: usize) -> Self {
        Self { upstream, limit }
    }
}

impl<C: Continuable> Continuable for Take<C> {
    type Item = C::Item;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        if self.limit == 0 {
            return ControlFlow::Continue(());
        }

        let mut remaining = self.limit;
        stoppable(&self.upstream, |item, stop: &Stopper<'_, ()>| {
            receiver(item)?;
            remaining -= 1;
            if remaining == 0 {
                stop.stop()
            } else {
                ControlFlow::Continue(())
            }
        })?;
        ControlFlow::Continue(())
    }
}
