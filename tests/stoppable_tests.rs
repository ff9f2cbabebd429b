//! Tests for the early-termination protocol.

use continuable::control::{Outcome, Stop, Stopper, stoppable};
use continuable::prelude::*;
use rstest::rstest;
use std::cell::Cell;
use std::ops::ControlFlow;
use std::panic::{AssertUnwindSafe, catch_unwind};

fn outcome<P>(flow: ControlFlow<Stop, Outcome<P>>) -> Outcome<P> {
    match flow {
        ControlFlow::Continue(outcome) => outcome,
        ControlFlow::Break(stop) => panic!("unexpected foreign stop: {stop:?}"),
    }
}

#[rstest]
fn test_stop_after_fourth_element_visits_exactly_four() {
    let visited = Cell::new(0);
    let producer = from_iter(1..=10).inspect(|_| visited.set(visited.get() + 1));
    let result = outcome(stoppable(&producer, |x, stop: &Stopper<'_, ()>| {
        if x == 4 { stop.stop() } else { ControlFlow::Continue(()) }
    }));
    assert_eq!(result, Outcome::Stopped(None));
    assert_eq!(visited.get(), 4);
}

#[rstest]
fn test_exhausted_and_stopped_without_payload_differ() {
    let exhausted: Outcome<Option<i32>> =
        outcome(stoppable(&from_iter(1..=3), |_, _| ControlFlow::Continue(())));
    let stopped_none: Outcome<Option<i32>> = outcome(stoppable(&from_iter(1..=3), |_, stop| stop.stop_with(None)));
    let stopped_bare: Outcome<Option<i32>> =
        outcome(stoppable(&from_iter(1..=3), |_, stop| stop.stop()));

    assert_eq!(exhausted, Outcome::Exhausted);
    assert_eq!(stopped_none, Outcome::Stopped(Some(None)));
    assert_eq!(stopped_bare, Outcome::Stopped(None));
    assert_ne!(exhausted, stopped_bare);
}

#[rstest]
fn test_inner_frame_propagates_the_outer_stop() {
    let inner_after = Cell::new(0);
    let result = outcome(stoppable(&from_iter(1..=3), |outer, outer_stop| {
        let inner = stoppable(&from_iter(1..=3), |inner, _: &Stopper<'_, ()>| {
            if outer * inner == 4 {
                return outer_stop.stop_with(outer * 100 + inner);
            }
            inner_after.set(inner_after.get() + 1);
            ControlFlow::Continue(())
        });
        inner?;
        ControlFlow::Continue(())
    }));
    assert_eq!(result, Outcome::Stopped(Some(202)));
    // (1,1) (1,2) (1,3) (2,1) before the stop at (2,2)
    assert_eq!(inner_after.get(), 4);
}

#[rstest]
fn test_outer_stop_crosses_combinators() {
    let result = outcome(stoppable(&from_iter(1..=5), |outer, stop| {
        from_iter(0..outer).map(|x| x * 2).take(10).drive(|x| {
            if x == 4 { stop.stop_with(outer) } else { ControlFlow::Continue(()) }
        })
    }));
    assert_eq!(result, Outcome::Stopped(Some(3)));
}

#[rstest]
fn test_panics_pass_through_frames() {
    let result = catch_unwind(AssertUnwindSafe(|| {
        stoppable(&from_iter(1..=3), |x, _: &Stopper<'_, ()>| {
            assert!(x < 2, "boom at {x}");
            ControlFlow::Continue(())
        })
    }));
    let payload = result.unwrap_err();
    let message = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .unwrap_or_default();
    assert_eq!(message, "boom at 2");
}

/// Yields `1..=3`, unless `armed`, in which case it stops `outer` with 99 first.
fn halting_inner<'s>(outer: &'s Stopper<'_, i32>, armed: bool) -> impl Continuable<Item = i32> + 's {
    from_fn(move |emit: &mut dyn FnMut(i32) -> Flow| {
        if armed {
            return outer.stop_with(99);
        }
        for x in 1..=3 {
            emit(x)?;
        }
        ControlFlow::Continue(())
    })
}

#[derive(Debug, Clone, Copy)]
enum Reducer {
    Count,
    First,
    Fold,
    Collect,
    Find,
    GroupBy,
}

fn try_reduce_with<C: Continuable<Item = i32>>(producer: &C, reducer: Reducer) -> ControlFlow<Stop, usize> {
    let result = match reducer {
        Reducer::Count => producer.try_count()?,
        Reducer::First => producer.try_first()?.map_or(0, |_| 1),
        Reducer::Fold => producer.try_fold(0, |acc, _| acc + 1)?,
        Reducer::Collect => producer.try_collect()?.len(),
        Reducer::Find => producer.try_find(|x| *x > 1)?.map_or(0, |_| 1),
        Reducer::GroupBy => return ControlFlow::Continue(0),
    };
    ControlFlow::Continue(result)
}

fn reduce_with<C: Continuable<Item = i32>>(producer: &C, reducer: Reducer) -> usize {
    match reducer {
        Reducer::Count => producer.count(),
        Reducer::First => producer.first().map_or(0, |_| 1),
        Reducer::Fold => producer.fold(0, |acc, _| acc + 1),
        Reducer::Collect => producer.collect().len(),
        Reducer::Find => producer.find(|x| *x > 1).map_or(0, |_| 1),
        Reducer::GroupBy => producer.group_by(|x| x % 2).len(),
    }
}

#[rstest]
#[case(Reducer::Count)]
#[case(Reducer::First)]
#[case(Reducer::Fold)]
#[case(Reducer::Collect)]
#[case(Reducer::Find)]
fn test_try_reducers_hand_an_enclosing_stop_back(#[case] reducer: Reducer) {
    let visited = Cell::new(0);
    let result = outcome(stoppable(&from_iter(1..=5), |x, outer| {
        visited.set(visited.get() + 1);
        try_reduce_with(&halting_inner(outer, x == 2), reducer)?;
        ControlFlow::Continue(())
    }));
    assert_eq!(result, Outcome::Stopped(Some(99)));
    assert_eq!(visited.get(), 2);
}

#[rstest]
fn test_try_reducers_without_a_stop_match_plain_reducers() {
    let result = outcome(stoppable(&from_iter(1..=2), |_, outer: &Stopper<'_, i32>| {
        let inner = halting_inner(outer, false);
        assert_eq!(inner.try_count()?, 3);
        assert_eq!(inner.try_collect()?, inner.collect());
        assert_eq!(inner.try_first()?, Some(1));
        ControlFlow::Continue(())
    }));
    assert_eq!(result, Outcome::Exhausted);
}

#[rstest]
#[case(Reducer::Count)]
#[case(Reducer::First)]
#[case(Reducer::Fold)]
#[case(Reducer::Collect)]
#[case(Reducer::Find)]
#[case(Reducer::GroupBy)]
#[should_panic(expected = "stopped by an enclosing frame")]
fn test_plain_reducers_refuse_an_enclosing_stop(#[case] reducer: Reducer) {
    let _ = stoppable(&from_iter(1..=5), |x, outer| {
        reduce_with(&halting_inner(outer, x == 2), reducer);
        ControlFlow::Continue(())
    });
}

#[rstest]
fn test_collected_zip_hands_an_enclosing_stop_back() {
    let result = outcome(stoppable(&from_iter(1..=3), |x, outer| {
        let zipped = continuable::zip::zip_collected(halting_inner(outer, x == 3), from_iter(10..13));
        zipped.try_count()?;
        ControlFlow::Continue(())
    }));
    assert_eq!(result, Outcome::Stopped(Some(99)));
}
