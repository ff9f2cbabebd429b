use crate::control::Flow;
use crate::producer::Continuable;

/// A producer pairing every upstream element with its 1-based position.
///
/// The counter starts over on every drive, so driving the same `Enumerate`
/// twice numbers both runs from 1.
///
/// Created by [`ContinuableExt::enumerate`](crate::producer::ContinuableExt::enumerate).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct Enumerate<C> {
    upstream: C,
}

impl<C> Enumerate<C> {
    pub(crate) const fn new(upstream: C) -> Self {
        Self { upstream }
    }
}

impl<C: Continuable> Continuable for Enumerate<C> {
    type Item = (usize, C::Item);

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut index = 0;
        self.upstream.drive(|item| {
            index += 1;
            receiver((index, item))
        })
    }
}

#[cfg(test)]
mod tests {
    use crate::producer::{ContinuableExt, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_enumerate_is_one_based() {
        let numbered = from_iter(['x', 'y', 'z']).enumerate();
        assert_eq!(numbered.collect(), vec![(1, 'x'), (2, 'y'), (3, 'z')]);
    }

    #[rstest]
    fn test_enumerate_counter_is_local_to_each_drive() {
        let numbered = from_iter(['x', 'y']).enumerate();
        assert_eq!(numbered.collect(), numbered.collect());
        assert_eq!(numbered.last(), Some((2, 'y')));
    }
}
