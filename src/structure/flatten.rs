use crate::control::Flow;
use crate::producer::Continuable;

/// A producer whose upstream yields producers, each drained in turn.
///
/// Inner producers are discovered lazily: the next one is only produced
/// after the previous one has been drained.
///
/// Created by [`ContinuableExt::flatten`](crate::producer::ContinuableExt::flatten)
/// and [`ContinuableExt::flat_map`](crate::producer::ContinuableExt::flat_map).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct Flatten<C> {
    upstream: C,
}

impl<C> Flatten<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self { upstream }
    }
}

impl<C> Continuable for Flatten<C>
where
    C: Continuable,
    C::Item: Continuable,
{
    type Item = <C::Item as Continuable>::Item;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        self.upstream.drive(|inner| inner.drive(&mut receiver))
    }
}
