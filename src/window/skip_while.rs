use std::fmt;
use std::ops::ControlFlow;

use crate::control::Flow;
use crate::producer::Continuable;

/// A producer skipping the upstream prefix whose elements satisfy a
/// predicate, then yielding everything else, starting with the first
/// element that failed it.
///
/// Created by [`ContinuableExt::skip_while`](crate::producer::ContinuableExt::skip_while).
#[must_use = "producers do nothing unless driven"]
#[derive(Clone)]
pub struct SkipWhile<C, P> {
    upstream: C,
    predicate: P,
}

impl<C, P> SkipWhile<C, P> {
    pub(crate) const fn new(upstream: C, predicate: P) -> Self {
        Self {
            upstream,
            predicate,
        }
    }
}

impl<C, P> Continuable for SkipWhile<C, P>
where
    C: Continuable,
    P: Fn(&C::Item) -> bool,
{
    type Item = C::Item;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut skipping = true;
        self.upstream.drive(|item| {
            if skipping && (self.predicate)(&item) {
                return ControlFlow::Continue(());
            }
            skipping = false;
            receiver(item)
        })
    }
}

impl<C: fmt::Debug, P> fmt::Debug for SkipWhile<C, P> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SkipWhile")
            .field("upstream", &self.upstream)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use crate::producer::{ContinuableExt, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_skip_while_keeps_the_first_failing_element() {
        let rest = from_iter([1, 2, 7, 1, 2]).skip_while(|x| *x < 5);
        assert_eq!(rest.collect(), vec![7, 1, 2]);
    }

    #[rstest]
    fn test_skip_while_predicate_is_not_consulted_after_the_prefix() {
        let consulted = std::cell::Cell::new(0);
        let rest = from_iter([1, 9, 1, 1]).skip_while(|x| {
            consulted.set(consulted.get() + 1);
            *x < 5
        });
        assert_eq!(rest.collect(), vec![9, 1, 1]);
        assert_eq!(consulted.get(), 2);
    }

    #[rstest]
    fn test_skip_while_all_matching_yields_nothing() {
        assert!(from_iter(1..=3).skip_while(|_| true).collect().is_empty());
    }
}
