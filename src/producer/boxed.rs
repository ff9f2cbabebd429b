use std::fmt;

use super::Continuable;
use crate::control::Flow;

/// A boxed CPS body: given a receiver, drives it to completion.
type DynDrive<'a, T> = dyn Fn(&mut dyn FnMut(T) -> Flow) -> Flow + 'a;

/// A type-erased producer.
///
/// [`Continuable::drive`] is generic over the receiver, so producers cannot be
/// turned into trait objects directly. `BoxContinuable` erases the producer
/// type behind a receiver passed as `&mut dyn FnMut`, which lets producers of
/// different types live in one collection (for example as the inputs of
/// [`chain_all`](crate::structure::chain_all)).
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let producers: Vec<BoxContinuable<'_, i32>> = vec![
///     from_iter(1..=2).boxed(),
///     once(10).boxed(),
///     from_iter(vec![3, 4]).map(|x| x * 100).boxed(),
/// ];
/// assert_eq!(chain_all(producers).collect(), vec![1, 2, 10, 300, 400]);
/// ```
pub struct BoxContinuable<'a, T> {
    body: Box<DynDrive<'a, T>>,
}

impl<'a, T> BoxContinuable<'a, T> {
    /// Erases the type of `producer`.
    pub fn new<C>(producer: C) -> Self
    where
        C: Continuable<Item = T> + 'a,
    {
        Self {
            body: Box::new(move |receiver: &mut dyn FnMut(T) -> Flow| producer.drive(receiver)),
        }
    }
}

impl<T> Continuable for BoxContinuable<'_, T> {
    type Item = T;

    #[inline]
    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(T) -> Flow,
    {
        (self.body)(&mut receiver)
    }
}

impl<T> fmt::Debug for BoxContinuable<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("BoxContinuable")
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::{ContinuableExt, empty, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_boxed_producer_yields_the_same_elements() {
        let boxed = BoxContinuable::new(from_iter(1..=3).filter(|x| x % 2 == 1));
        assert_eq!(boxed.collect(), vec![1, 3]);
    }

    #[rstest]
    fn test_boxed_producer_propagates_stop() {
        let boxed = from_iter(1..).boxed();
        assert_eq!(boxed.take(2).collect(), vec![1, 2]);
    }

    #[rstest]
    fn test_boxed_producers_of_different_types_share_a_vec() {
        let producers: Vec<BoxContinuable<'_, u8>> =
            vec![empty().boxed(), from_iter([1, 2]).boxed()];
        let total: usize = producers.iter().map(ContinuableExt::count).sum();
        assert_eq!(total, 2);
    }
}
