use std::ops::ControlFlow;

use crate::control::Flow;
use crate::producer::Continuable;

/// A producer skipping the first `count` upstream elements.
///
/// Skipped elements are still produced by the upstream; they just never
/// reach the receiver.
///
/// Created by [`ContinuableExt::skip`](crate::producer::ContinuableExt::skip).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct Skip<C> {
    upstream: C,
    count: usize,
}

impl<C> Skip<C> {
    pub(crate) const fn new(upstream: C, count: usize) -> Self {
        Self { upstream, count }
    }
}

impl<C: Continuable> Continuable for Skip<C> {
    type Item = C::Item;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut to_skip = self.count;
        self.upstream.drive(|item| {
            if to_skip == 0 {
                receiver(item)
            } else {
                to_skip -= 1;
                ControlFlow::Continue(())
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::producer::{ContinuableExt, from_iter};
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![1, 2, 3, 4])]
    #[case(1, vec![2, 3, 4])]
    #[case(4, vec![])]
    #[case(9, vec![])]
    fn test_skip_drops_a_prefix(#[case] count: usize, #[case] expected: Vec<i32>) {
        assert_eq!(from_iter(1..=4).skip(count).collect(), expected);
    }

    #[rstest]
    fn test_skip_counter_is_local_to_each_drive() {
        let producer = from_iter(1..=3).skip(1);
        assert_eq!(producer.collect(), vec![2, 3]);
        assert_eq!(producer.collect(), vec![2, 3]);
    }
}
