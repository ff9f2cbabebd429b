use std::fmt;
use std::marker::PhantomData;

use super::Continuable;
use crate::control::Flow;

/// A producer whose body is an ordinary closure.
///
/// Created by [`from_fn`].
pub struct FromFn<T, F> {
    body: F,
    _item: PhantomData<fn() -> T>,
}

/// Wraps a block of imperative code as a producer.
///
/// The body receives the receiver as `&mut dyn FnMut(T) -> Flow`, may call it
/// any number of times, and must propagate a `Break` with `?`. The body runs
/// again on every drive.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
/// use std::ops::ControlFlow;
///
/// let fizz = from_fn(|emit: &mut dyn FnMut(&'static str) -> Flow| {
///     emit("fizz")?;
///     emit("buzz")?;
///     ControlFlow::Continue(())
/// });
/// assert_eq!(fizz.take(1).collect(), vec!["fizz"]);
/// ```
pub const fn from_fn<T, F>(body: F) -> FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> Flow) -> Flow,
{
    FromFn {
        body,
        _item: PhantomData,
    }
}

impl<T, F> Continuable for FromFn<T, F>
where
    F: Fn(&mut dyn FnMut(T) -> Flow) -> Flow,
{
    type Item = T;

    #[inline]
    fn drive<R>(&self, mut receiver: R) -> Flow
    where
        R: FnMut(T) -> Flow,
    {
        (self.body)(&mut receiver)
    }
}

impl<T, F: Clone> Clone for FromFn<T, F> {
    fn clone(&self) -> Self {
        Self {
            body: self.body.clone(),
            _item: PhantomData,
        }
    }
}

impl<T, F> fmt::Debug for FromFn<T, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_struct("FromFn").finish_non_exhaustive()
    }
}
