//! Reducers: operations that drive a producer to a single result.
//!
//! Every reducer here is also available as a method of
//! [`ContinuableExt`](crate::producer::ContinuableExt). The free functions take
//! the producer by reference, so the same producer can be reduced any number
//! of times.
//!
//! Reducers that only need a prefix ([`first`], [`nth`], [`find`], [`all`],
//! [`any`]) stop their producer as soon as the answer is known.
//!
//! # Stops from enclosing frames
//!
//! A producer may be stopped by a [`Stopper`] of a frame outside the reducer
//! call, typically when an inner producer is reduced inside the receiver of
//! an outer [`stoppable`]. The `try_` reducers ([`try_for_each`],
//! [`try_fold`], [`try_reduce`], [`try_count`], [`try_collect`],
//! [`try_first`], [`try_find`]) return such a stop as `Break(stop)` so the
//! receiver can pass it on with `?`.
//!
//! # Panics
//!
//! The reducers returning a plain value panic when the producer was stopped
//! by an enclosing frame, since no plain value can carry the stop on.
//!
//! # Examples
//!
//! ```rust
//! use continuable::prelude::*;
//! use continuable::reduce;
//!
//! let odds = from_iter(1..=9).filter(|x| x % 2 == 1);
//! assert_eq!(reduce::fold(&odds, 0, |acc, x| acc + x), 25);
//! assert_eq!(reduce::count(&odds), 5);
//! assert_eq!(reduce::reduce(&odds, i32::max), Some(9));
//! ```

use std::iter::{Product, Sum};
use std::ops::{Add, ControlFlow, Mul};

use crate::control::{Flow, Stop, Stopper, stoppable};
use crate::error::ContinuableError;
use crate::producer::Continuable;

/// Unwraps the result of a `try_` reducer for a reducer that returns a plain
/// value.
///
/// A `Break` reaching this point carries a token minted by a frame enclosing
/// the reducer call. A plain value cannot carry it any further, so this
/// panics instead of passing a partial result off as a complete one.
pub(crate) fn settle<T>(operation: &'static str, flow: ControlFlow<Stop, T>) -> T {
    match flow {
        ControlFlow::Continue(value) => value,
        ControlFlow::Break(stop) => panic!(
            "{operation}: producer was stopped by an enclosing frame ({stop:?}); \
             reduce with a `try_` reducer and propagate the stop with `?`"
        ),
    }
}

/// Runs the receiver in a stoppable frame and returns the payload it stopped
/// with, if any. Tokens of enclosing frames are handed back unchanged.
fn try_stopped_with<C, P, F>(producer: &C, receiver: F) -> ControlFlow<Stop, Option<P>>
where
    C: Continuable + ?Sized,
    F: FnMut(C::Item, &Stopper<'_, P>) -> Flow,
{
    let outcome = stoppable(producer, receiver)?;
    ControlFlow::Continue(outcome.into_payload())
}

// =============================================================================
// Folds
// =============================================================================

/// Drives the producer, handing every element to `action`.
///
/// A `Break` returned by `action`, or produced by a stop of an enclosing
/// frame, ends the drive and is returned unchanged.
///
/// # Examples
///
/// ```rust
/// use continuable::control::{stoppable, Outcome};
/// use continuable::prelude::*;
/// use continuable::reduce;
/// use std::ops::ControlFlow;
///
/// let rows = from_iter([vec![1, 2], vec![3, 4, 5]]);
/// let outcome = stoppable(&rows, |row, outer| {
///     reduce::try_for_each(&from_iter(row), |x| {
///         if x == 4 { outer.stop_with(x) } else { ControlFlow::Continue(()) }
///     })
/// });
/// assert_eq!(outcome.continue_value(), Some(Outcome::Stopped(Some(4))));
/// ```
pub fn try_for_each<C, F>(producer: &C, action: F) -> Flow
where
    C: Continuable + ?Sized,
    F: FnMut(C::Item) -> Flow,
{
    producer.drive(action)
}

/// Calls `action` on every element.
pub fn for_each<C, F>(producer: &C, mut action: F)
where
    C: Continuable + ?Sized,
    F: FnMut(C::Item),
{
    settle(
        "for_each",
        try_for_each(producer, |item| {
            action(item);
            ControlFlow::Continue(())
        }),
    );
}

/// Left fold with an explicit seed that hands stops of enclosing frames back
/// to the caller instead of returning a partial accumulator.
pub fn try_fold<C, B, F>(producer: &C, init: B, mut combine: F) -> ControlFlow<Stop, B>
where
    C: Continuable + ?Sized,
    F: FnMut(B, C::Item) -> B,
{
    let mut accumulator = Some(init);
    producer.drive(|item| {
        if let Some(acc) = accumulator.take() {
            accumulator = Some(combine(acc, item));
        }
        ControlFlow::Continue(())
    })?;
    match accumulator {
        Some(acc) => ControlFlow::Continue(acc),
        // Only a panic unwinding out of `combine` leaves the slot empty.
        None => unreachable!("fold accumulator lost to a panic in `combine`"),
    }
}

/// Left fold with an explicit seed.
pub fn fold<C, B, F>(producer: &C, init: B, combine: F) -> B
where
    C: Continuable + ?Sized,
    F: FnMut(B, C::Item) -> B,
{
    settle("fold", try_fold(producer, init, combine))
}

/// Like [`reduce`], handing stops of enclosing frames back to the caller.
pub fn try_reduce<C, F>(producer: &C, mut combine: F) -> ControlFlow<Stop, Option<C::Item>>
where
    C: Continuable + ?Sized,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    let mut accumulator = None;
    producer.drive(|item| {
        accumulator = Some(match accumulator.take() {
            Some(acc) => combine(acc, item),
            None => item,
        });
        ControlFlow::Continue(())
    })?;
    ControlFlow::Continue(accumulator)
}

/// Left fold seeded with the first element.
///
/// Returns `None` for a producer without elements.
pub fn reduce<C, F>(producer: &C, combine: F) -> Option<C::Item>
where
    C: Continuable + ?Sized,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    settle("reduce", try_reduce(producer, combine))
}

/// Like [`reduce`], but a producer without elements is an error.
///
/// # Errors
///
/// Returns [`ContinuableError::Empty`] if the producer yields nothing.
pub fn reduce_strict<C, F>(producer: &C, combine: F) -> Result<C::Item, ContinuableError>
where
    C: Continuable + ?Sized,
    F: FnMut(C::Item, C::Item) -> C::Item,
{
    settle("reduce_strict", try_reduce(producer, combine)).ok_or(ContinuableError::Empty {
        operation: "reduce_strict",
    })
}

/// Folds every element into a caller-owned accumulator, returning the same
/// reference.
///
/// # Examples
///
/// ```rust
/// use continuable::prelude::*;
///
/// let mut text = String::from(">");
/// from_iter(["a", "b"]).reduce_into(&mut text, |text, s| text.push_str(s)).push('<');
/// assert_eq!(text, ">ab<");
/// ```
pub fn reduce_into<'a, C, A, F>(producer: &C, accumulator: &'a mut A, mut combine: F) -> &'a mut A
where
    C: Continuable + ?Sized,
    A: ?Sized,
    F: FnMut(&mut A, C::Item),
{
    settle(
        "reduce_into",
        try_for_each(producer, |item| {
            combine(accumulator, item);
            ControlFlow::Continue(())
        }),
    );
    accumulator
}

/// Like [`count`], handing stops of enclosing frames back to the caller.
pub fn try_count<C>(producer: &C) -> ControlFlow<Stop, usize>
where
    C: Continuable + ?Sized,
{
    try_fold(producer, 0, |count, _| count + 1)
}

/// Counts the elements.
pub fn count<C>(producer: &C) -> usize
where
    C: Continuable + ?Sized,
{
    settle("count", try_count(producer))
}

/// Adds up the elements, starting from the additive identity of `S`.
pub fn sum<C, S>(producer: &C) -> S
where
    C: Continuable + ?Sized,
    S: Sum<S> + Add<C::Item, Output = S>,
{
    settle(
        "sum",
        try_fold(producer, std::iter::empty::<S>().sum(), |total, item| total + item),
    )
}

/// Multiplies the elements, starting from the multiplicative identity of `S`.
pub fn product<C, S>(producer: &C) -> S
where
    C: Continuable + ?Sized,
    S: Product<S> + Mul<C::Item, Output = S>,
{
    settle(
        "product",
        try_fold(producer, std::iter::empty::<S>().product(), |total, item| {
            total * item
        }),
    )
}

// =============================================================================
// Predicates
// =============================================================================

/// Returns `true` if every element satisfies `predicate`, stopping at the
/// first one that does not.
pub fn all<C, P>(producer: &C, mut predicate: P) -> bool
where
    C: Continuable + ?Sized,
    P: FnMut(C::Item) -> bool,
{
    settle(
        "all",
        try_stopped_with(producer, |item, stop: &Stopper<'_, ()>| {
            if predicate(item) {
                ControlFlow::Continue(())
            } else {
                stop.stop_with(())
            }
        }),
    )
    .is_none()
}

/// Returns `true` if some element satisfies `predicate`, stopping at the
/// first one that does.
pub fn any<C, P>(producer: &C, mut predicate: P) -> bool
where
    C: Continuable + ?Sized,
    P: FnMut(C::Item) -> bool,
{
    settle(
        "any",
        try_stopped_with(producer, |item, stop: &Stopper<'_, ()>| {
            if predicate(item) {
                stop.stop_with(())
            } else {
                ControlFlow::Continue(())
            }
        }),
    )
    .is_some()
}

/// Like [`all`], but evaluates `predicate` on every element.
pub fn all_eager<C, P>(producer: &C, mut predicate: P) -> bool
where
    C: Continuable + ?Sized,
    P: FnMut(C::Item) -> bool,
{
    settle(
        "all_eager",
        try_fold(producer, true, |verdict, item| predicate(item) && verdict),
    )
}

/// Like [`any`], but evaluates `predicate` on every element.
pub fn any_eager<C, P>(producer: &C, mut predicate: P) -> bool
where
    C: Continuable + ?Sized,
    P: FnMut(C::Item) -> bool,
{
    settle(
        "any_eager",
        try_fold(producer, false, |verdict, item| predicate(item) || verdict),
    )
}

// =============================================================================
// Collecting
// =============================================================================

/// Like [`collect`], handing stops of enclosing frames back to the caller.
pub fn try_collect<C>(producer: &C) -> ControlFlow<Stop, Vec<C::Item>>
where
    C: Continuable + ?Sized,
{
    let mut items = Vec::new();
    try_for_each(producer, |item| {
        items.push(item);
        ControlFlow::Continue(())
    })?;
    ControlFlow::Continue(items)
}

/// Collects the elements into a vector, in order.
pub fn collect<C>(producer: &C) -> Vec<C::Item>
where
    C: Continuable + ?Sized,
{
    let mut items = Vec::new();
    reduce_into(producer, &mut items, Vec::push);
    items
}

/// Collects exactly `length` elements into a preallocated vector.
///
/// # Errors
///
/// Returns [`ContinuableError::LengthMismatch`] if the producer yields a
/// different number of elements. The producer is driven to the end either
/// way, so `actual` is the true length.
pub fn collect_with_len<C>(producer: &C, length: usize) -> Result<Vec<C::Item>, ContinuableError>
where
    C: Continuable + ?Sized,
{
    let mut items = Vec::with_capacity(length);
    let mut actual = 0_usize;
    for_each(producer, |item| {
        actual += 1;
        if actual <= length {
            items.push(item);
        }
    });
    if actual == length {
        Ok(items)
    } else {
        Err(ContinuableError::LengthMismatch {
            expected: length,
            actual,
        })
    }
}

/// Appends the elements to `target`, returning it.
pub fn collect_into<'a, C, E>(producer: &C, target: &'a mut E) -> &'a mut E
where
    C: Continuable + ?Sized,
    E: Extend<C::Item> + ?Sized,
{
    reduce_into(producer, target, |target, item| target.extend(Some(item)))
}

// =============================================================================
// Positional
// =============================================================================

/// Like [`first`], handing stops of enclosing frames back to the caller.
pub fn try_first<C>(producer: &C) -> ControlFlow<Stop, Option<C::Item>>
where
    C: Continuable + ?Sized,
{
    try_stopped_with(producer, |item, stop| stop.stop_with(item))
}

/// Returns the first element and stops the producer.
pub fn first<C>(producer: &C) -> Option<C::Item>
where
    C: Continuable + ?Sized,
{
    settle("first", try_first(producer))
}

/// Returns the last element.
pub fn last<C>(producer: &C) -> Option<C::Item>
where
    C: Continuable + ?Sized,
{
    settle("last", try_reduce(producer, |_, item| item))
}

/// Returns the element at the 0-based `index` and stops the producer.
///
/// # Errors
///
/// Returns [`ContinuableError::IndexOutOfBounds`] if the producer has `index`
/// or fewer elements.
pub fn nth<C>(producer: &C, index: usize) -> Result<C::Item, ContinuableError>
where
    C: Continuable + ?Sized,
{
    let mut position = 0_usize;
    let found = settle(
        "nth",
        try_stopped_with(producer, |item, stop| {
            if position == index {
                stop.stop_with(item)
            } else {
                position += 1;
                ControlFlow::Continue(())
            }
        }),
    );
    found.ok_or(ContinuableError::IndexOutOfBounds {
        index,
        length: position,
    })
}

/// Like [`find`], handing stops of enclosing frames back to the caller.
pub fn try_find<C, P>(producer: &C, mut predicate: P) -> ControlFlow<Stop, Option<C::Item>>
where
    C: Continuable + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    try_stopped_with(producer, |item, stop| {
        if predicate(&item) {
            stop.stop_with(item)
        } else {
            ControlFlow::Continue(())
        }
    })
}

/// Returns the first element satisfying `predicate` and stops the producer.
pub fn find<C, P>(producer: &C, predicate: P) -> Option<C::Item>
where
    C: Continuable + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    settle("find", try_find(producer, predicate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::producer::{ContinuableExt, empty, from_iter, repeat_with};
    use rstest::rstest;
    use std::cell::Cell;
    use std::collections::BTreeSet;

    #[rstest]
    #[case(vec![], None)]
    #[case(vec![7], Some(7))]
    #[case(vec![1, 2, 3, 4], Some(10))]
    fn test_reduce_seeds_with_first_element(#[case] input: Vec<i32>, #[case] expected: Option<i32>) {
        assert_eq!(reduce(&from_iter(input), |a, b| a + b), expected);
    }

    #[rstest]
    fn test_reduce_strict_reports_empty() {
        assert_eq!(
            reduce_strict(&empty::<i32>(), |a, b| a + b),
            Err(ContinuableError::Empty {
                operation: "reduce_strict"
            })
        );
        assert_eq!(reduce_strict(&from_iter([2, 3]), |a, b| a * b), Ok(6));
    }

    #[rstest]
    fn test_fold_is_left_associative() {
        let text = fold(&from_iter(["a", "b", "c"]), String::from("_"), |acc, s| {
            format!("({acc}{s})")
        });
        assert_eq!(text, "(((_a)b)c)");
    }

    #[rstest]
    fn test_reduce_into_returns_the_same_accumulator() {
        let mut seen = Vec::new();
        let returned = reduce_into(&from_iter(1..=3), &mut seen, |seen, x| seen.push(x * 2));
        returned.push(0);
        assert_eq!(seen, vec![2, 4, 6, 0]);
    }

    #[rstest]
    fn test_sum_and_product_identities() {
        assert_eq!(sum::<_, i64>(&empty::<i64>()), 0);
        assert_eq!(product::<_, i64>(&empty::<i64>()), 1);
        assert_eq!(sum::<_, u32>(&from_iter(1..=4_u32)), 10);
        assert_eq!(product::<_, u32>(&from_iter(1..=4_u32)), 24);
    }

    #[rstest]
    fn test_sum_of_references() {
        let values = vec![1.5_f64, 2.5];
        assert!((sum::<_, f64>(&from_iter(&values)) - 4.0).abs() < f64::EPSILON);
    }

    #[rstest]
    fn test_lazy_all_stops_at_first_failure() {
        let visited = Cell::new(0);
        let producer = from_iter(1..=10).inspect(|_| visited.set(visited.get() + 1));
        assert!(!all(&producer, |x| x < 3));
        assert_eq!(visited.get(), 3);
    }

    #[rstest]
    fn test_lazy_any_stops_at_first_success() {
        assert!(any(&repeat_with(|| 5), |x| x == 5));
        assert!(!any(&empty::<i32>(), |_| true));
        assert!(all(&empty::<i32>(), |_| false));
    }

    #[rstest]
    fn test_eager_predicates_visit_everything() {
        let visited = Cell::new(0);
        let producer = from_iter(1..=10).inspect(|_| visited.set(visited.get() + 1));
        assert!(!all_eager(&producer, |x| x < 3));
        assert!(any_eager(&producer, |x| x == 1));
        assert_eq!(visited.get(), 20);
    }

    #[rstest]
    #[case(3, Ok(vec![1, 2, 3]))]
    #[case(2, Err(ContinuableError::LengthMismatch { expected: 2, actual: 3 }))]
    #[case(5, Err(ContinuableError::LengthMismatch { expected: 5, actual: 3 }))]
    fn test_collect_with_len(
        #[case] length: usize,
        #[case] expected: Result<Vec<i32>, ContinuableError>,
    ) {
        assert_eq!(collect_with_len(&from_iter(1..=3), length), expected);
    }

    #[rstest]
    fn test_collect_into_extends_existing_collection() {
        let mut set = BTreeSet::from([10]);
        collect_into(&from_iter([3, 1, 3]), &mut set);
        assert_eq!(set.into_iter().collect::<Vec<_>>(), vec![1, 3, 10]);
    }

    #[rstest]
    fn test_first_stops_an_infinite_producer() {
        assert_eq!(first(&repeat_with(|| 'x')), Some('x'));
        assert_eq!(first(&empty::<char>()), None);
    }

    #[rstest]
    fn test_last() {
        assert_eq!(last(&from_iter(1..=4)), Some(4));
        assert_eq!(last(&empty::<i32>()), None);
    }

    #[rstest]
    #[case(0, Ok(10))]
    #[case(2, Ok(30))]
    #[case(3, Err(ContinuableError::IndexOutOfBounds { index: 3, length: 3 }))]
    fn test_nth_is_zero_based(#[case] index: usize, #[case] expected: Result<i32, ContinuableError>) {
        assert_eq!(nth(&from_iter([10, 20, 30]), index), expected);
    }

    #[rstest]
    fn test_find_returns_first_match_and_stops() {
        let visited = Cell::new(0);
        let producer = from_iter(1..).inspect(|_| visited.set(visited.get() + 1));
        assert_eq!(find(&producer, |x| x % 7 == 0), Some(7));
        assert_eq!(visited.get(), 7);
    }

    #[rstest]
    fn test_try_reducers_continue_without_enclosing_stops() {
        let producer = from_iter(1..=4);
        assert_eq!(try_count(&producer).continue_value(), Some(4));
        assert_eq!(try_fold(&producer, 0, |acc, x| acc + x).continue_value(), Some(10));
        assert_eq!(try_first(&empty::<i32>()).continue_value(), Some(None));
        assert_eq!(try_find(&producer, |x| *x > 2).continue_value(), Some(Some(3)));
    }

    #[rstest]
    fn test_reducers_compose_with_method_syntax() {
        let producer = from_iter(1..=5).map(|x| x * x);
        assert_eq!(producer.count(), count(&producer));
        assert_eq!(producer.collect(), collect(&producer));
    }
}
