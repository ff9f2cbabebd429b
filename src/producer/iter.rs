//! Pull-to-push conversion.

use std::cell::RefCell;
use std::fmt;

use super::Continuable;
use crate::control::Flow;

/// A producer replaying a cloneable iterable.
///
/// Created by [`from_iter`].
#[derive(Debug, Clone)]
pub struct FromIter<I> {
    iterable: I,
}

/// Adapts a pull-style iterable into a producer.
///
/// Every drive clones `iterable` and walks the clone, so the producer is
/// restartable and nothing is buffered. Ranges, slices, `&Vec<T>` and arrays
/// are cheap to clone; for expensive or once-only iterators see
/// [`from_iter_once`].
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let words = vec!["a", "b", "c"];
/// let producer = from_iter(&words);
/// assert_eq!((&producer).map(|word| word.to_uppercase()).collect(), vec!["A", "B", "C"]);
/// assert_eq!(producer.count(), 3);
/// ```
pub const fn from_iter<I>(iterable: I) -> FromIter<I>
where
    I: IntoIterator + Clone,
{
    FromIter { iterable }
}

impl<I> Continuable for FromIter<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;

    #[inline]
    fn drive<F>(&self, receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        self.iterable.clone().into_iter().try_for_each(receiver)
    }
}

/// A producer that consumes a once-only iterator.
///
/// Created by [`from_iter_once`].
pub struct FromIterOnce<I> {
    iterator: RefCell<Option<I>>,
}

/// Adapts a once-only iterator into a producer.
///
/// This producer is not restartable: the first drive consumes the iterator
/// (even if the receiver stops early, the rest is discarded) and every later
/// drive yields nothing.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let lines = "one\ntwo".lines();
/// let producer = from_iter_once(lines);
/// assert_eq!(producer.collect(), vec!["one", "two"]);
/// assert!(producer.collect().is_empty());
/// ```
pub fn from_iter_once<I>(iterator: I) -> FromIterOnce<I::IntoIter>
where
    I: IntoIterator,
{
    FromIterOnce {
        iterator: RefCell::new(Some(iterator.into_iter())),
    }
}

impl<I: Iterator> Continuable for FromIterOnce<I> {
    type Item = I::Item;

    fn drive<F>(&self, receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let taken = self.iterator.take();
        taken.map_or(Flow::Continue(()), |mut iterator| {
            iterator.try_for_each(receiver)
        })
    }
}

impl<I> fmt::Debug for FromIterOnce<I> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let consumed = self
            .iterator
            .try_borrow()
            .map_or(true, |iterator| iterator.is_none());
        formatter
            .debug_struct("FromIterOnce")
            .field("consumed", &consumed)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::ContinuableExt;
    use rstest::rstest;

    #[rstest]
    #[case(vec![], vec![])]
    #[case(vec![1], vec![1])]
    #[case(vec![3, 1, 2], vec![3, 1, 2])]
    fn test_from_iter_preserves_order(#[case] input: Vec<i32>, #[case] expected: Vec<i32>) {
        assert_eq!(from_iter(input).collect(), expected);
    }

    #[rstest]
    fn test_from_iter_over_borrowed_slice_yields_references() {
        let data = [10, 20];
        let producer = from_iter(&data[..]);
        assert_eq!(producer.collect(), vec![&10, &20]);
    }

    #[rstest]
    fn test_from_iter_does_not_pull_past_a_stop() {
        let pulled = std::cell::Cell::new(0);
        let iterable = (1..=10).inspect(|_| pulled.set(pulled.get() + 1));
        let producer = from_iter(iterable);
        assert_eq!(producer.take(2).collect(), vec![1, 2]);
        assert_eq!(pulled.get(), 2);
    }

    #[rstest]
    fn test_from_iter_once_yields_nothing_on_second_drive() {
        let producer = from_iter_once(vec![1, 2, 3]);
        assert_eq!((&producer).take(1).collect(), vec![1]);
        assert!(producer.collect().is_empty());
    }

    #[rstest]
    fn test_from_iter_once_debug_reports_consumption() {
        let producer = from_iter_once(vec![1]);
        assert_eq!(format!("{producer:?}"), "FromIterOnce { consumed: false }");
        let _ = producer.count();
        assert_eq!(format!("{producer:?}"), "FromIterOnce { consumed: true }");
    }
}
