use smallvec::SmallVec;

use crate::control::Flow;
use crate::producer::Continuable;

/// One row of an n-ary Cartesian product.
///
/// Rows of up to four elements live inline.
pub type Row<T> = SmallVec<[T; 4]>;

// =============================================================================
// Product
// =============================================================================

/// The Cartesian product of two producers, right side varying fastest.
///
/// The right producer is driven once per left element; left elements are
/// cloned into every pair.
///
/// Created by [`ContinuableExt::cartesian_product`](crate::producer::ContinuableExt::cartesian_product).
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct Product<A, B> {
    left: A,
    right: B,
}

impl<A, B> Product<A, B> {
    pub(crate) const fn new(left: A, right: B) -> Self {
        Self { left, right }
    }
}

impl<A, B> Continuable for Product<A, B>
where
    A: Continuable,
    A::Item: Clone,
    B: Continuable,
{
    type Item = (A::Item, B::Item);

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        self.left
            .drive(|left| self.right.drive(|right| receiver((left.clone(), right))))
    }
}

// =============================================================================
// ProductAll
// =============================================================================

/// The Cartesian product of any number of producers of one item type.
///
/// Rows are built by extending a prefix row one producer at a time, so the
/// last producer varies fastest. The product of no producers is a single
/// empty row.
///
/// Created by [`product_all`].
#[must_use = "producers do nothing unless driven"]
#[derive(Debug, Clone)]
pub struct ProductAll<C> {
    producers: Vec<C>,
}

/// Builds the n-ary Cartesian product of `producers`.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let bits = product_all(vec![from_iter(0..2), from_iter(0..2), from_iter(0..2)]);
/// let rows: Vec<Vec<i32>> = bits.map(|row| row.to_vec()).collect();
/// assert_eq!(rows.len(), 8);
/// assert_eq!(rows[1], vec![0, 0, 1]);
/// assert_eq!(rows[6], vec![1, 1, 0]);
/// ```
pub fn product_all<I>(producers: I) -> ProductAll<I::Item>
where
    I: IntoIterator,
    I::Item: Continuable,
{
    ProductAll {
        producers: producers.into_iter().collect(),
    }
}

impl<C> Continuable for ProductAll<C>
where
    C: Continuable,
    C::Item: Clone,
{
    type Item = Row<C::Item>;

    fn drive<F>(&self, mut receiver: F) -> Flow
    where
        F: FnMut(Self::Item) -> Flow,
    {
        let mut prefix = Row::new();
        extend_rows(&self.producers, &mut prefix, &mut receiver)
    }
}

fn extend_rows<C, F>(producers: &[C], prefix: &mut Row<C::Item>, receiver: &mut F) -> Flow
where
    C: Continuable,
    C::Item: Clone,
    F: FnMut(Row<C::Item>) -> Flow,
{
    let Some((next, rest)) = producers.split_first() else {
        return receiver(prefix.clone());
    };

    next.drive(|item| {
        prefix.push(item);
        let flow = extend_rows(rest, prefix, receiver);
        prefix.pop();
        flow
    })
}
