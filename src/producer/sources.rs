//! Elementary producers.

use std::fmt;
use std::marker::PhantomData;
use std::ops::ControlFlow;

use super::Continuable;
use crate::control::Flow;

// =============================================================================
// Empty
// =============================================================================

/// A producer with no elements.
///
/// Created by [`empty`].
pub struct Empty<T> {
    _item: PhantomData<fn() -> T>,
}

/// Creates a producer that never calls its receiver.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// assert_eq!(empty::<i32>().count(), 0);
/// ```
pub const fn empty<T>() -> Empty<T> {
    Empty { _item: PhantomData }
}

impl<T> Continuable for Empty<T> {
    type Item = T;

    #[inline]
    fn drive<F>(&self, _receiver: F) -> Flow
    where
        F: FnMut(T) -> Flow,
    {
        ControlFlow::Continue(())
    }
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        empty()
    }
}

impl<T> fmt::Debug for Empty<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Empty")
    }
}

// =============================================================================
// Once
// =============================================================================

/// A producer with exactly one element.
///
/// Created by [`once`].
#[derive(Debug, Clone)]
pub struct Once<T> {
    value: T,
}

/// Creates a producer that yields a clone of `value` once per drive.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// assert_eq!(once("only").collect(), vec!["only"]);
/// ```
pub const fn once<T: Clone>(value: T) -> Once<T> {
    Once { value }
}

impl<T: Clone> Continuable for Once<T> {
    type Item = T;

    #[inline]
    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(T) -> Flow,
    {
        receiver(self.value.clone())
    }
}

// =============================================================================
// RepeatWith
// =============================================================================

/// An infinite producer calling a function for every element.
///
/// Created by [`repeat_with`].
#[derive(Clone)]
pub struct RepeatWith<F> {
    generator: F,
}

/// Creates an infinite producer yielding `generator()` for every element.
///
/// The producer only ends when its receiver stops it, so combine it with
/// [`take`](crate::producer::ContinuableExt::take) or similar.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// assert_eq!(repeat_with(|| 7).take(3).collect(), vec![7, 7, 7]);
/// ```
pub const fn repeat_with<T, F>(generator: F) -> RepeatWith<F>
where
    F: Fn() -> T,
{
    RepeatWith { generator }
}

impl<T, F> Continuable for RepeatWith<F>
where
    F: Fn() -> T,
{
    type Item = T;

    fn drive<R>(&self, mut receiver: R) -> Flow
    where
        R: FnMut(T) -> Flow,
    {
        loop {
            receiver((self.generator)())?;
        }
    }
}

impl<F> fmt::Debug for RepeatWith<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("RepeatWith").finish_non_exhaustive()
    }
}

// =============================================================================
// Successors
// =============================================================================

/// A producer where each element is computed from the previous one.
///
/// Created by [`successors`].
#[derive(Clone)]
pub struct Successors<T, F> {
    first: Option<T>,
    successor: F,
}

/// Creates a producer starting at `first` and applying `successor` to the
/// previous element until it returns `None`.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let powers = successors(Some(1_u32), |n| n.checked_mul(10).filter(|n| *n < 10_000));
/// assert_eq!(powers.collect(), vec![1, 10, 100, 1000]);
/// ```
pub const fn successors<T, F>(first: Option<T>, successor: F) -> Successors<T, F>
where
    T: Clone,
    F: Fn(&T) -> Option<T>,
{
    Successors { first, successor }
}

impl<T, F> Continuable for Successors<T, F>
where
    T: Clone,
    F: Fn(&T) -> Option<T>,
{
    type Item = T;

    fn drive<R>(&self, mut receiver: R) -> Flow
    where
        R: FnMut(T) -> Flow,
    {
        let mut current = self.first.clone();
        while let Some(value) = current {
            current = (self.successor)(&value);
            receiver(value)?;
        }
        ControlFlow::Continue(())
    }
}

impl<T: fmt::Debug, F> fmt::Debug for Successors<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Successors")
            .field("first", &self.first)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::ContinuableExt;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_empty_never_calls_receiver() {
        let producer = empty::<String>();
        let _ = producer.drive(|_| panic!("receiver must not be called"));
    }

    #[rstest]
    fn test_once_is_restartable() {
        let producer = once(5);
        assert_eq!(producer.collect(), vec![5]);
        assert_eq!(producer.collect(), vec![5]);
    }

    #[rstest]
    fn test_repeat_with_calls_generator_per_element() {
        let calls = Cell::new(0);
        let producer = repeat_with(|| {
            calls.set(calls.get() + 1);
            calls.get()
        });
        assert_eq!(producer.take(4).collect(), vec![1, 2, 3, 4]);
        assert_eq!(calls.get(), 4);
    }

    #[rstest]
    #[case(None, vec![])]
    #[case(Some(3), vec![3, 2, 1, 0])]
    fn test_successors_counts_down(#[case] first: Option<u8>, #[case] expected: Vec<u8>) {
        let producer = successors(first, |n| n.checked_sub(1));
        assert_eq!(producer.collect(), expected);
    }

    #[rstest]
    fn test_successors_does_not_compute_past_a_stop() {
        let computed = Cell::new(0);
        let producer = successors(Some(0_u64), |n| {
            computed.set(computed.get() + 1);
            Some(n + 1)
        });
        assert_eq!(producer.take(3).collect(), vec![0, 1, 2]);
        assert_eq!(computed.get(), 3);
    }
}
