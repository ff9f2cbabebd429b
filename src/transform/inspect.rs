use std::fmt;

use crate::control::Flow;
use crate::producer::Continuable;

/// A producer that calls a function on a reference to each element before
/// passing the element on.
///
/// Created by [`ContinuableExt::inspect`](crate::producer::ContinuableExt::inspect).
#[must_use = "producers do nothing unless driven"]
#[derive(Clone)]
pub struct Inspect<C, F> {
    upstream: C,
    function: F,
}

impl<C, F> Inspect<C, F> {
    pub(crate) const fn new(upstream: C, function: F) -> Self {
        Self { upstream, function }
    }
}

impl<C, F> Continuable for Inspect<C, F>
where
    C: Continuable,
    F: Fn(&C::Item),
{
    type Item = C::Item;

    #[inline]
    fn drive<R>(&self, mut receiver: R) -> Flow
    where
        R: FnMut(Self::Item) -> Flow,
    {
        self.upstream.drive(|item| {
            (self.function)(&item);
            receiver(item)
        })
    }
}

impl<C: fmt::Debug, F> fmt::Debug for Inspect<C, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Inspect")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::producer::{ContinuableExt, from_iter};
    use rstest::rstest;
    use std::cell::RefCell;

    #[rstest]
    fn test_inspect_sees_only_elements_that_reach_downstream() {
        let seen = RefCell::new(Vec::new());
        let producer = from_iter(1..=10).inspect(|x| seen.borrow_mut().push(*x));
        assert_eq!(producer.take(3).collect(), vec![1, 2, 3]);
        assert_eq!(*seen.borrow(), vec![1, 2, 3]);
    }
}
