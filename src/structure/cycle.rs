use std::ops::ControlFlow;

use crate::control::Flow;
use crate::producer::Continuable;

/// A producer repeating its whole upstream a fixed number of times, or
/// forever.
///
/// Every repetition drives the upstream again; nothing is buffered. An
/// endless cycle over an upstream that yields nothing ends after the first
/// empty pass instead of spinning.
///
/// Created by [`ContinuableExt::cycle`](crate::producer::ContinuableExt::cycle)
/// and [`ContinuableExt::cycle_n`](crate::producer::ContinuableExt::cycle_n).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct Cycle<C> {
    upstream: C,
    times: Option<usize>,
}

impl<C> Cycle<C> {
    pub(crate) const fn new(upstream: C, times: Option<usize>) -> Self {
        Self { upstream, times }
    }
}

impl<C: Continuable> Continuable for Cycle<C> {
    type Item = C::Item;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        if let Some(times) = self.times {
            for _ in 0..times {
                self.upstream.drive(&mut receiver)?;
            }
            return ControlFlow::Continue(());
        }

        loop {
            let mut yielded = false;
            self.upstream.drive(|item| {
                yielded = true;
                receiver(item)
            })?;
            if !yielded {
                return ControlFlow::Continue(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::producer::{ContinuableExt, empty, from_iter};
    use rstest::rstest;

    #[rstest]
    #[case(0, vec![])]
    #[case(1, vec![1, 2])]
    #[case(3, vec![1, 2, 1, 2, 1, 2])]
    fn test_cycle_n_repeats(#[case] times: usize, #[case] expected: Vec<i32>) {
        assert_eq!(from_iter([1, 2]).cycle_n(times).collect(), expected);
    }

    #[rstest]
    fn test_cycle_forever_needs_a_take() {
        let repeated = from_iter(['a', 'b', 'c']).cycle().take(7);
        assert_eq!(repeated.collect(), vec!['a', 'b', 'c', 'a', 'b', 'c', 'a']);
    }

    #[rstest]
    fn test_cycle_of_empty_terminates() {
        assert_eq!(empty::<i32>().cycle().count(), 0);
    }
}
