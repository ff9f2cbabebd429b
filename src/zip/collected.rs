use std::ops::ControlFlow;

use crate::control::Flow;
use crate::producer::Continuable;
use crate::reduce;

/// Two producers zipped by collecting both first.
///
/// Created by [`zip_collected`].
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct ZipCollected<A, B> {
    left: A,
    right: B,
}

/// Zips two producers by collecting each into a `Vec` on every drive and
/// pairing the elements up, stopping at the shorter one.
///
/// Memory use is the total size of both inputs. Both inputs are driven to the
/// end even when the receiver stops after the first pair.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
/// use continuable::zip::zip_collected;
///
/// let pairs = zip_collected(from_iter(1..=3), from_iter("ab".chars()));
/// assert_eq!(pairs.collect(), vec![(1, 'a'), (2, 'b')]);
/// ```
pub const fn zip_collected<A, B>(left: A, right: B) -> ZipCollected<A, B>
where
    A: Continuable,
    B: Continuable,
{
    ZipCollected { left, right }
}

impl<A, B> Continuable for ZipCollected<A, B>
where
    A: Continuable,
    B: Continuable,
{
    type Item = (A::Item, B::Item);

    fn drive<F>(&self, receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let left = reduce::try_collect(&self.left)?;
        let right = reduce::try_collect(&self.right)?;
        left.into_iter().zip(right).try_for_each(receiver)
    }
}

/// Any number of producers of one item type zipped by collecting them first.
///
/// Created by [`zip_all_collected`].
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct ZipAllCollected<C> {
    producers: Vec<C>,
}

/// Zips `producers` into rows by collecting each of them on every drive.
///
/// Row `i` holds the `i`-th element of every producer, in argument order.
/// The shortest producer decides the number of rows; zipping no producers
/// yields no rows.
pub fn zip_all_collected<I>(producers: I) -> ZipAllCollected<I::Item>
where
    I: IntoIterator,
    I::Item: Continuable,
{
    ZipAllCollected {
        producers: producers.into_iter().collect(),
    }
}

impl<C: Continuable> Continuable for ZipAllCollected<C> {
    type Item = Vec<C::Item>;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        if self.producers.is_empty() {
            return ControlFlow::Continue(());
        }

        let mut columns = Vec::with_capacity(self.producers.len());
        for producer in &self.producers {
            columns.push(reduce::try_collect(producer)?.into_iter());
        }
        while let Some(row) = columns.iter_mut().map(Iterator::next).collect::<Option<Vec<_>>>() {
            receiver(row)?;
        }
        ControlFlow::Continue(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::{ContinuableExt, empty, from_iter};
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    #[case(vec![1, 2, 3], vec![10, 20, 30], vec![(1, 10), (2, 20), (3, 30)])]
    #[case(vec![1, 2, 3], vec![10], vec![(1, 10)])]
    #[case(vec![], vec![10, 20], vec![])]
    fn test_zip_collected_stops_at_shortest(
        #[case] left: Vec<i32>,
        #[case] right: Vec<i32>,
        #[case] expected: Vec<(i32, i32)>,
    ) {
        assert_eq!(zip_collected(from_iter(left), from_iter(right)).collect(), expected);
    }

    #[rstest]
    fn test_zip_collected_drives_inputs_once_per_drive() {
        let drives = Cell::new(0);
        let left = from_iter([1, 2]).inspect(|_| drives.set(drives.get() + 1));
        let zipped = zip_collected(left, from_iter(['x', 'y']));
        assert_eq!(zipped.first(), Some((1, 'x')));
        assert_eq!(drives.get(), 2);
    }

    #[rstest]
    fn test_zip_all_collected_builds_rows() {
        let rows = zip_all_collected(vec![from_iter(vec![1, 2, 3]), from_iter(vec![4, 5]), from_iter(vec![6, 7, 8])]);
        assert_eq!(rows.collect(), vec![vec![1, 4, 6], vec![2, 5, 7]]);
    }

    #[rstest]
    fn test_zip_all_collected_of_nothing_is_empty() {
        assert_eq!(zip_all_collected(Vec::<crate::producer::Empty<u8>>::new()).count(), 0);
        assert_eq!(zip_all_collected(vec![empty::<u8>()]).count(), 0);
    }
}
