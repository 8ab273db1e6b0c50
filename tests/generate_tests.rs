#![cfg(feature = "generate")]
//! Unit tests for the lazy sequence generators.

use funtab::error::InvalidRangeError;
use funtab::generate::{ifill, irange, itimes, range, stream};
use rstest::rstest;

// =============================================================================
// range (eager)
// =============================================================================

#[rstest]
fn test_range_one_to_five_step_two() {
    let table = range(1, 5, 2).unwrap();
    assert_eq!(table.array(), &[1, 3, 5]);
}

#[rstest]
fn test_range_default_style_step_one() {
    let table = range(1, 4, 1).unwrap();
    assert_eq!(table.array(), &[1, 2, 3, 4]);
}

#[rstest]
fn test_range_inverted_bounds_fail_fast() {
    assert_eq!(
        range(5, 1, 1),
        Err(InvalidRangeError {
            from: 5,
            to: 1,
            step: 1
        })
    );
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(-100)]
fn test_range_rejects_non_positive_steps(#[case] step: i64) {
    assert!(range(1, 5, step).is_err());
}

// =============================================================================
// irange (pull-based)
// =============================================================================

#[rstest]
fn test_irange_validates_like_range() {
    assert!(irange(5, 1, 1).is_err());
    assert!(irange(1, 5, 0).is_err());
}

#[rstest]
fn test_irange_pulls_then_signals_end() {
    let mut producer = irange(1, 5, 2).unwrap();
    assert_eq!(producer.next(), Some(1));
    assert_eq!(producer.next(), Some(3));
    assert_eq!(producer.next(), Some(5));
    assert_eq!(producer.next(), None);
    assert_eq!(producer.next(), None);
}

#[rstest]
fn test_irange_agrees_with_eager_range() {
    let eager = range(-7, 23, 5).unwrap();
    let pulled: Vec<i64> = irange(-7, 23, 5).unwrap().collect();
    assert_eq!(eager.array(), pulled.as_slice());
}

#[rstest]
fn test_irange_is_not_restartable_but_fresh_calls_are_fresh() {
    let mut producer = irange(1, 2, 1).unwrap();
    producer.by_ref().for_each(drop);
    assert_eq!(producer.next(), None);

    let restarted: Vec<i64> = irange(1, 2, 1).unwrap().collect();
    assert_eq!(restarted, vec![1, 2]);
}

// =============================================================================
// stream
// =============================================================================

#[rstest]
fn test_stream_state_becomes_its_output() {
    let mut fibonacci = stream(|&(a, b)| (b, a + b), (0i64, 1i64));
    assert_eq!(fibonacci.next(), Some((1, 1)));
    assert_eq!(fibonacci.next(), Some((1, 2)));
    assert_eq!(fibonacci.next(), Some((2, 3)));
    assert_eq!(fibonacci.next(), Some((3, 5)));
    assert_eq!(*fibonacci.state(), (3, 5));
}

#[rstest]
fn test_stream_is_infinite_under_take() {
    let tail: Vec<i64> = stream(|&n: &i64| n + 1, 0).take(1000).collect();
    assert_eq!(tail.len(), 1000);
    assert_eq!(tail.last(), Some(&1000));
}

// =============================================================================
// itimes / ifill
// =============================================================================

#[rstest]
fn test_itimes_pulls_the_callable_exactly_n_times() {
    let mut calls = 0;
    let produced: Vec<i32> = itimes(5, || {
        calls += 1;
        calls
    })
    .collect();
    assert_eq!(produced, vec![1, 2, 3, 4, 5]);
    assert_eq!(calls, 5);
}

#[rstest]
fn test_itimes_limits_a_stream_through_take() {
    let mut doubling = stream(|&n: &i64| n * 2, 1);
    let first_three: Vec<i64> = doubling.by_ref().take(3).collect();
    assert_eq!(first_three, vec![2, 4, 8]);
}

#[rstest]
fn test_itimes_end_of_sequence_is_sticky() {
    let mut producer = itimes(2, || "x");
    assert_eq!(producer.next(), Some("x"));
    assert_eq!(producer.next(), Some("x"));
    assert_eq!(producer.next(), None);
    assert_eq!(producer.next(), None);
}

#[rstest]
fn test_ifill_is_curried_and_finite() {
    let builder = ifill(3);
    let produced: Vec<i32> = builder.of(9).collect();
    assert_eq!(produced, vec![9, 9, 9]);

    let mut exhausted = builder.of(9);
    exhausted.by_ref().for_each(drop);
    assert_eq!(exhausted.next(), None);
}

#[rstest]
fn test_ifill_zero_yields_nothing() {
    assert_eq!(ifill(0).of('a').count(), 0);
}
