use std::ops::ControlFlow;

use crate::control::Flow;
use crate::producer::Continuable;

/// A producer draining one producer and then another.
///
/// Created by [`ContinuableExt::chain`](crate::producer::ContinuableExt::chain).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    pub(crate) const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A, B> Continuable for Chain<A, B>
where
    A: Continuable,
    B: Continuable<Item = A::Item>,
{
    type Item = A::Item;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        self.first.drive(&mut receiver)?;
        self.second.drive(receiver)
    }
}

/// A producer draining any number of producers of one type, in order.
///
/// Created by [`chain_all`].
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct ChainAll<C> {
    producers: Vec<C>,
}

/// Concatenates `producers` in order, fully draining each before starting
/// the next.
///
/// Producers of different types can be chained after
/// [`boxed`](crate::producer::ContinuableExt::boxed).
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let joined = chain_all(vec![from_iter(1..=2), from_iter(5..=6), from_iter(9..=8)]);
/// assert_eq!(joined.collect(), vec![1, 2, 5, 6]);
/// ```
pub fn chain_all<I>(producers: I) -> ChainAll<I::Item>
where
    I: IntoIterator,
    I::Item: Continuable,
{
    ChainAll {
        producers: producers.into_iter().collect(),
    }
}

impl<C: Continuable> Continuable for ChainAll<C> {
    type Item = C::Item;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        for producer in &self.producers {
            producer.drive(&mut receiver)?;
        }
        ControlFlow::Continue(())
    }
}
