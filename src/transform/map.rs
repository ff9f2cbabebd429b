use std::fmt;

use crate::control::Flow;
use crate::producer::Continuable;

/// A producer applying a function to every upstream element.
///
/// Created by [`ContinuableExt::map`](crate::producer::ContinuableExt::map).
#[must_use = "producers do nothing unless driven"]
#[derive(Clone)]
pub struct Map<C, F> {
    upstream: C,
    function: F,
}

impl<C, F> Map<C, F> {
    pub(crate) const fn new(upstream: C, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<C, F, B> Continuable for Map<C, F>
where
    C: Continuable,
    F: Fn(C::Item) -> B,
{
    type Item = B;

    #[inline]
    fn drive<R>(&self, mut receiver: R) -> Flow
    where
        R: FnMut(B) -> Flow,
    {
        self.upstream.drive(|item| receiver((self.function)(item)))
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Map<C, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Map")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}
