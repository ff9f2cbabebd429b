use std::fmt;
use std::ops::ControlFlow;

use crate::control::Flow;
use crate::producer::Continuable;

/// A producer keeping only the upstream elements that satisfy a predicate.
///
/// Created by [`ContinuableExt::filter`](crate::producer::ContinuableExt::filter).
#[must_use = "producers do nothing unless driven"]
#[derive(Clone)]
pub struct Filter<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> Filter<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<C, P> Continuable for Filter<C, P>
where
    C: Continuable,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    #[inline]
    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        self.upstream.drive(|item| {
            if (self.predicate)(&item) {
                receiver(item)
            } else {
                ControlFlow::Continue(())
            }
        })
    }
}

impl<C: fmt::Debug, P> fmt::Debug for Filter<C, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Filter")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}
