use std::hash::Hash;
use std::iter::{Product, Sum};
use std::ops::{Add, ControlFlow, Mul};

use super::{BoxContinuable, Continuable};
use crate::control::{Flow, Stop};
use crate::error::ContinuableError;
use crate::reduce;
use crate::structure::{
    Chain, Cycle, Distinct, Flatten, GroupTable, Product as CartesianProduct, group_by,
    group_by_reduce, group_by_reduce_with,
};
use crate::transform::{Enumerate, Filter, Inspect, Map};
use crate::window::{Partition, PartitionStep, Skip, SkipWhile, Take, TakeWhile};
use crate::zip::ZipStrategy;

#[cfg(feature = "channel")]
use crate::bridge::ChannelIter;

/// Combinators and reducers for every [`Continuable`].
///
/// Combinators take the producer by value and wrap it; reducers borrow it,
/// so a producer can be reduced any number of times.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let evens = from_iter(1..=10).filter(|x| x % 2 == 0);
/// assert_eq!(evens.count(), 5);
/// assert_eq!(evens.map(|x| x * x).take(2).collect(), vec![4, 16]);
/// ```
pub trait ContinuableExt: Continuable {
    // =========================================================================
    // Transformation
    // =========================================================================

    /// Applies `function` to every element.
    fn map<B, F>(self, function: F) -> Map<Self, F>
    where
        Self: Sized,
        F: Fn(Self::Item) -> B,
    {
        Map::new(self, function)
    }

    /// Keeps the elements satisfying `predicate`.
    fn filter<P>(self, predicate: P) -> Filter<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        Filter::new(self, predicate)
    }

    /// Pairs every element with its 1-based position.
    ///
    /// ```rust
    /// use continuable::prelude::*;
    ///
    /// assert_eq!(from_iter(['a', 'b']).enumerate().collect(), vec![(1, 'a'), (2, 'b')]);
    /// ```
    fn enumerate(self) -> Enumerate<Self>
    where
        Self: Sized,
    {
        Enumerate::new(self)
    }

    /// Calls `function` on every element before passing it on.
    fn inspect<F>(self, function: F) -> Inspect<Self, F>
    where
        Self: Sized,
        F: Fn(&Self::Item),
    {
        Inspect::new(self, function)
    }

    /// Maps every element to a producer and drains those in turn.
    fn flat_map<P, F>(self, function: F) -> Flatten<Map<Self, F>>
    where
        Self: Sized,
        P: Continuable,
        F: Fn(Self::Item) -> P,
    {
        Flatten::new(Map::new(self, function))
    }

    // =========================================================================
    // Windowing
    // =========================================================================

    /// Yields at most the first `limit` elements.
    fn take(self, limit: usize) -> Take<Self>
    where
        Self: Sized,
    {
        Take::new(self, limit)
    }

    /// Yields elements up to, not including, the first failing `predicate`.
    fn take_while<P>(self, predicate: P) -> TakeWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        TakeWhile::new(self, predicate)
    }

    /// Skips the first `count` elements.
    fn skip(self, count: usize) -> Skip<Self>
    where
        Self: Sized,
    {
        Skip::new(self, count)
    }

    /// Skips elements while `predicate` holds, then yields everything.
    fn skip_while<P>(self, predicate: P) -> SkipWhile<Self, P>
    where
        Self: Sized,
        P: Fn(&Self::Item) -> bool,
    {
        SkipWhile::new(self, predicate)
    }

    /// Groups elements into chunks of `size`; the last chunk may be shorter.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuableError::InvalidArgument`] if `size` is zero.
    fn partition(self, size: usize) -> Result<Partition<Self>, ContinuableError>
    where
        Self: Sized,
    {
        Partition::new(self, size)
    }

    /// Emits windows of `size` elements, each starting `step` elements after
    /// the previous one. An incomplete final window is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuableError::InvalidArgument`] if `size` or `step` is
    /// zero.
    fn partition_step(self, size: usize, step: usize) -> Result<PartitionStep<Self>, ContinuableError>
    where
        Self: Sized,
        Self::Item: Clone,
    {
        PartitionStep::new(self, size, step)
    }

    // =========================================================================
    // Structure
    // =========================================================================

    /// Yields every element of `self`, then every element of `other`.
    fn chain<C>(self, other: C) -> Chain<Self, C>
    where
        Self: Sized,
        C: Continuable<Item = Self::Item>,
    {
        Chain::new(self, other)
    }

    /// Drains every producer yielded by `self`, in order.
    fn flatten(self) -> Flatten<Self>
    where
        Self: Sized,
        Self::Item: Continuable,
    {
        Flatten::new(self)
    }

    /// Repeats `self` forever. An empty pass ends the cycle.
    fn cycle(self) -> Cycle<Self>
    where
        Self: Sized,
    {
        Cycle::new(self, None)
    }

    /// Repeats `self` `times` times.
    fn cycle_n(self, times: usize) -> Cycle<Self>
    where
        Self: Sized,
    {
        Cycle::new(self, Some(times))
    }

    /// Pairs every element of `self` with every element of `other`, the
    /// right side varying fastest.
    fn cartesian_product<C>(self, other: C) -> CartesianProduct<Self, C>
    where
        Self: Sized,
        Self::Item: Clone,
        C: Continuable,
    {
        CartesianProduct::new(self, other)
    }

    /// Yields every value only the first time it is seen.
    fn distinct(self) -> Distinct<Self>
    where
        Self: Sized,
        Self::Item: Hash + Eq + Clone,
    {
        Distinct::new(self)
    }

    /// Erases the producer type.
    fn boxed<'a>(self) -> BoxContinuable<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        BoxContinuable::new(self)
    }

    /// Groups elements into vectors by `key`, in first-seen key order.
    fn group_by<K, F>(&self, key: F) -> GroupTable<K, Vec<Self::Item>>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item) -> K,
    {
        group_by(self, key)
    }

    /// Groups elements by `key`, combining each group with `combine`.
    fn group_by_reduce<K, F, G>(&self, key: F, combine: G) -> GroupTable<K, Self::Item>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item) -> K,
        G: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        group_by_reduce(self, key, combine)
    }

    /// Groups elements by `key`, seeding each group with `seed` and folding
    /// the rest in with `combine`.
    fn group_by_reduce_with<K, V, F, S, G>(&self, key: F, seed: S, combine: G) -> GroupTable<K, V>
    where
        K: Hash + Eq + Clone,
        F: FnMut(&Self::Item) -> K,
        S: FnMut(Self::Item) -> V,
        G: FnMut(V, Self::Item) -> V,
    {
        group_by_reduce_with(self, key, seed, combine)
    }

    // =========================================================================
    // Zip
    // =========================================================================

    /// Zips `self` with `other` using `strategy`.
    ///
    /// # Errors
    ///
    /// See [`zip`](crate::zip::zip).
    #[cfg(feature = "channel")]
    fn zip<C>(
        self,
        other: C,
        strategy: ZipStrategy,
    ) -> Result<BoxContinuable<'static, (Self::Item, C::Item)>, ContinuableError>
    where
        Self: Sized + Send + Sync + 'static,
        Self::Item: Send + 'static,
        C: Continuable + Send + Sync + 'static,
        C::Item: Send + 'static,
    {
        crate::zip::zip(self, other, strategy)
    }

    /// Zips `self` with `other` using `strategy`.
    ///
    /// # Errors
    ///
    /// Never fails without the `channel` feature.
    #[cfg(not(feature = "channel"))]
    fn zip<'a, C>(
        self,
        other: C,
        strategy: ZipStrategy,
    ) -> Result<BoxContinuable<'a, (Self::Item, C::Item)>, ContinuableError>
    where
        Self: Sized + 'a,
        C: Continuable + 'a,
    {
        crate::zip::zip(self, other, strategy)
    }

    /// Runs the producer on a background task and returns a pull-style
    /// iterator over its elements, buffering at most `capacity` of them.
    ///
    /// # Errors
    ///
    /// See [`into_channel`](crate::bridge::into_channel).
    #[cfg(feature = "channel")]
    fn into_channel(self, capacity: usize) -> Result<ChannelIter<Self::Item>, ContinuableError>
    where
        Self: Sized + Send + 'static,
        Self::Item: Send + 'static,
    {
        crate::bridge::into_channel(self, capacity)
    }

    // =========================================================================
    // Reduction
    // =========================================================================

    /// Calls `action` on every element.
    fn for_each<F>(&self, action: F)
    where
        F: FnMut(Self::Item),
    {
        reduce::for_each(self, action);
    }

    /// Drives the producer with `action`, returning its `Break` unchanged.
    ///
    /// See [`reduce::try_for_each`].
    fn try_for_each<F>(&self, action: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        reduce::try_for_each(self, action)
    }

    /// Left fold that hands stops of enclosing frames back to the caller.
    fn try_fold<B, F>(&self, init: B, combine: F) -> ControlFlow<Stop, B>
    where
        F: FnMut(B, Self::Item) -> B,
    {
        reduce::try_fold(self, init, combine)
    }

    /// Left fold seeded with the first element, handing stops of enclosing
    /// frames back to the caller.
    fn try_reduce<F>(&self, combine: F) -> ControlFlow<Stop, Option<Self::Item>>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        reduce::try_reduce(self, combine)
    }

    /// Counts the elements, handing stops of enclosing frames back.
    fn try_count(&self) -> ControlFlow<Stop, usize> {
        reduce::try_count(self)
    }

    /// Collects the elements, handing stops of enclosing frames back.
    fn try_collect(&self) -> ControlFlow<Stop, Vec<Self::Item>> {
        reduce::try_collect(self)
    }

    /// Returns the first element, handing stops of enclosing frames back.
    fn try_first(&self) -> ControlFlow<Stop, Option<Self::Item>> {
        reduce::try_first(self)
    }

    /// Returns the first element satisfying `predicate`, handing stops of
    /// enclosing frames back.
    fn try_find<P>(&self, predicate: P) -> ControlFlow<Stop, Option<Self::Item>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        reduce::try_find(self, predicate)
    }

    /// Left fold with an explicit seed.
    fn fold<B, F>(&self, init: B, combine: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        reduce::fold(self, init, combine)
    }

    /// Left fold seeded with the first element; `None` when empty.
    fn reduce<F>(&self, combine: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        reduce::reduce(self, combine)
    }

    /// Left fold seeded with the first element.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuableError::Empty`] when the producer yields nothing.
    fn reduce_strict<F>(&self, combine: F) -> Result<Self::Item, ContinuableError>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        reduce::reduce_strict(self, combine)
    }

    /// Folds every element into `accumulator` and returns it.
    fn reduce_into<'a, A, F>(&self, accumulator: &'a mut A, combine: F) -> &'a mut A
    where
        A: ?Sized,
        F: FnMut(&mut A, Self::Item),
    {
        reduce::reduce_into(self, accumulator, combine)
    }

    /// Counts the elements.
    fn count(&self) -> usize {
        reduce::count(self)
    }

    /// Adds up the elements.
    fn sum<S>(&self) -> S
    where
        S: Sum<S> + Add<Self::Item, Output = S>,
    {
        reduce::sum(self)
    }

    /// Multiplies the elements.
    fn product<S>(&self) -> S
    where
        S: Product<S> + Mul<Self::Item, Output = S>,
    {
        reduce::product(self)
    }

    /// Returns `true` if every element satisfies `predicate`; stops early.
    fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        reduce::all(self, predicate)
    }

    /// Returns `true` if any element satisfies `predicate`; stops early.
    fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        reduce::any(self, predicate)
    }

    /// Like [`all`](Self::all), without stopping early.
    fn all_eager<P>(&self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        reduce::all_eager(self, predicate)
    }

    /// Like [`any`](Self::any), without stopping early.
    fn any_eager<P>(&self, predicate: P) -> bool
    where
        P: FnMut(Self::Item) -> bool,
    {
        reduce::any_eager(self, predicate)
    }

    /// Collects the elements into a vector.
    fn collect(&self) -> Vec<Self::Item> {
        reduce::collect(self)
    }

    /// Collects exactly `length` elements.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuableError::LengthMismatch`] for any other length.
    fn collect_with_len(&self, length: usize) -> Result<Vec<Self::Item>, ContinuableError> {
        reduce::collect_with_len(self, length)
    }

    /// Appends the elements to `target`.
    fn collect_into<'a, E>(&self, target: &'a mut E) -> &'a mut E
    where
        E: Extend<Self::Item> + ?Sized,
    {
        reduce::collect_into(self, target)
    }

    /// Returns the first element.
    fn first(&self) -> Option<Self::Item> {
        reduce::first(self)
    }

    /// Returns the last element.
    fn last(&self) -> Option<Self::Item> {
        reduce::last(self)
    }

    /// Returns the element at the 0-based `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ContinuableError::IndexOutOfBounds`] past the end.
    fn nth(&self, index: usize) -> Result<Self::Item, ContinuableError> {
        reduce::nth(self, index)
    }

    /// Returns the first element satisfying `predicate`.
    fn find<P>(&self, predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        reduce::find(self, predicate)
    }
}

impl<C: Continuable + ?Sized> ContinuableExt for C {}
