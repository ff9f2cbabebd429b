use std::mem;
use std::ops::ControlFlow;

use crate::control::Flow;
use crate::error::ContinuableError;
use crate::producer::Continuable;

/// Upper bound on the capacity reserved for a chunk before any element
/// arrives. Larger chunks grow as they fill.
const CHUNK_PREALLOCATION: usize = 64;

fn chunk_buffer<T>(size: usize) -> Vec<T> {
    Vec::with_capacity(size.min(CHUNK_PREALLOCATION))
}

// =============================================================================
// Partition
// =============================================================================

/// A producer grouping upstream elements into non-overlapping chunks.
///
/// Every chunk holds `size` elements except possibly the last, which holds
/// whatever remained (it is neither padded nor dropped).
///
/// Created by [`ContinuableExt::partition`](crate::producer::ContinuableExt::partition).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct Partition<C> {
    upstream: C,
    size: usize,
}

impl<C> Partition<C> {
    pub(crate) fn new(upstream: C, size: usize) -> Result<Self, ContinuableError> {
        if size == 0 {
            return Err(ContinuableError::invalid_argument(
                "partition",
                "chunk size must be greater than zero",
            ));
        }
        Ok(Self { upstream, size })
    }
}

impl<C: Continuable> Continuable for Partition<C> {
    type Item = Vec<C::Item>;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut chunk = chunk_buffer(self.size);
        self.upstream.drive(|item| {
            chunk.push(item);
            if chunk.len() == self.size {
                receiver(mem::replace(&mut chunk, chunk_buffer(self.size)))
            } else {
                ControlFlow::Continue(())
            }
        })?;

        if chunk.is_empty() {
            ControlFlow::Continue(())
        } else {
            receiver(chunk)
        }
    }
}

// =============================================================================
// PartitionStep
// =============================================================================

/// A producer emitting windows of `size` elements, each starting `step`
/// elements after the previous one.
///
/// With `step < size` consecutive windows overlap and the shared elements
/// are cloned into the next window, so every emitted `Vec` is independently
/// owned. With `step > size` the elements between windows are skipped.
/// Every window has exactly `size` elements; an incomplete remainder is
/// dropped.
///
/// Created by [`ContinuableExt::partition_step`](crate::producer::ContinuableExt::partition_step).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct PartitionStep<C> {
    upstream: C,
    size: usize,
    step: usize,
}

impl<C> PartitionStep<C> {
    pub(crate) fn new(upstream: C, size: usize, step: usize) -> Result<Self, ContinuableError> {
        if size == 0 {
            return Err(ContinuableError::invalid_argument(
                "partition_step",
                "window size must be greater than zero",
            ));
        }
        if step == 0 {
            return Err(ContinuableError::invalid_argument(
                "partition_step",
                "step must be greater than zero",
            ));
        }
        Ok(Self {
            upstream,
            size,
            step,
        })
    }
}

impl<C> Continuable for PartitionStep<C>
where
    C: Continuable,
    C::Item: Clone,
{
    type Item = Vec<C::Item>;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut window = chunk_buffer(self.size);
        let mut to_skip = 0;
        self.upstream.drive(|item| {
            if to_skip > 0 {
                to_skip -= 1;
                return ControlFlow::Continue(());
            }
            window.push(item);
            if window.len() < self.size {
                return ControlFlow::Continue(());
            }

            let next = if self.step < self.size {
                let mut next = chunk_buffer(self.size);
                next.extend_from_slice(&window[self.step..]);
                next
            } else {
                to_skip = self.step - self.size;
                chunk_buffer(self.size)
            };
            receiver(mem::replace(&mut window, next))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::{ContinuableExt, empty, from_iter};
    use rstest::rstest;

    #[rstest]
    fn test_partition_exact_multiple() {
        let chunks = from_iter(1..=9).partition(3).unwrap();
        assert_eq!(chunks.collect(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
    }

    #[rstest]
    fn test_partition_truncates_the_final_chunk() {
        let chunks = from_iter(1..=7).partition(3).unwrap();
        assert_eq!(chunks.collect(), vec![vec![1, 2, 3], vec![4, 5, 6], vec![7]]);
    }

    #[rstest]
    #[case(usize::MAX)]
    #[case(usize::MAX / 2)]
    #[case(usize::MAX / 4 + 1)]
    fn test_partition_with_huge_size_yields_one_short_chunk(#[case] size: usize) {
        let chunks = from_iter(1..=3).partition(size).unwrap();
        assert_eq!(chunks.collect(), vec![vec![1, 2, 3]]);
    }

    #[rstest]
    #[case(usize::MAX, 1)]
    #[case(usize::MAX / 4 + 1, usize::MAX)]
    fn test_partition_step_with_huge_size_yields_nothing(#[case] size: usize, #[case] step: usize) {
        assert_eq!(from_iter(1..=3).partition_step(size, step).unwrap().count(), 0);
    }

    #[rstest]
    fn test_partition_of_empty_yields_nothing() {
        assert_eq!(empty::<i32>().partition(2).unwrap().count(), 0);
    }

    #[rstest]
    fn test_partition_rejects_zero_size() {
        let error = from_iter(1..=3).partition(0).unwrap_err();
        assert_eq!(
            error,
            ContinuableError::invalid_argument("partition", "chunk size must be greater than zero")
        );
    }

    #[rstest]
    fn test_partition_stopped_downstream_does_not_emit_the_remainder() {
        let chunks = from_iter(1..=7).partition(3).unwrap().take(1);
        assert_eq!(chunks.collect(), vec![vec![1, 2, 3]]);
    }

    #[rstest]
    #[case(3, 2, vec![vec![1, 2, 3], vec![3, 4, 5], vec![5, 6, 7], vec![7, 8, 9]])]
    #[case(3, 3, vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]])]
    #[case(2, 3, vec![vec![1, 2], vec![4, 5], vec![7, 8]])]
    #[case(4, 1, vec![
        vec![1, 2, 3, 4], vec![2, 3, 4, 5], vec![3, 4, 5, 6],
        vec![4, 5, 6, 7], vec![5, 6, 7, 8], vec![6, 7, 8, 9],
    ])]
    #[case(4, 4, vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8]])]
    #[case(10, 1, vec![])]
    fn test_partition_step_windows(
        #[case] size: usize,
        #[case] step: usize,
        #[case] expected: Vec<Vec<i32>>,
    ) {
        let windows = from_iter(1..=9).partition_step(size, step).unwrap();
        assert_eq!(windows.collect(), expected);
    }

    #[rstest]
    fn test_partition_step_windows_are_independent() {
        let windows = from_iter(vec![String::from("a"), String::from("b"), String::from("c")])
            .partition_step(2, 1)
            .unwrap()
            .collect();
        assert_eq!(windows[0], vec!["a", "b"]);
        assert_eq!(windows[1], vec!["b", "c"]);
    }

    #[rstest]
    #[case(0, 1)]
    #[case(1, 0)]
    fn test_partition_step_rejects_zero_arguments(#[case] size: usize, #[case] step: usize) {
        assert!(matches!(
            from_iter(1..=3).partition_step(size, step),
            Err(ContinuableError::InvalidArgument { combinator: "partition_step", .. })
        ));
    }
}
