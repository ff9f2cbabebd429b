use std::hash::Hash;
use std::ops::ControlFlow;

use super::hash::{GroupHasher, HashSet};
use crate::control::Flow;
use crate::producer::Continuable;

/// A producer yielding each upstream value only the first time it is seen.
///
/// The set of seen values is local to each drive.
///
/// Created by [`ContinuableExt::distinct`](crate::producer::ContinuableExt::distinct).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct Distinct<C> {
    upstream: C,
}

impl<C> Distinct<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self { upstream }
    }
}

impl<C> Continuable for Distinct<C>
where
    C: Continuable,
    C::Item: Hash + Eq + Clone,
{
    type Item = C::Item;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut seen = HashSet::with_hasher(GroupHasher::default());
        self.upstream.drive(|item| {
            if seen.contains(&item) {
                ControlFlow::Continue(())
            } else {
                seen.insert(item.clone());
                receiver(item)
            }
        })
    }
}
