#![cfg(feature = "compose")]
//! Unit tests for the partial application macros.

use funtab::{partial, partial_last};
use rstest::rstest;

fn add(first: i32, second: i32) -> i32 {
    first + second
}

fn subtract(minuend: i32, subtrahend: i32) -> i32 {
    minuend - subtrahend
}

fn weighted_sum(weight_a: i32, weight_b: i32, a: i32, b: i32) -> i32 {
    weight_a * a + weight_b * b
}

// =============================================================================
// partial!: fixed arguments are prepended
// =============================================================================

#[rstest]
fn test_partial_prepends_the_fixed_prefix() {
    let from_ten = partial!(subtract, 10, __);
    assert_eq!(from_ten(3), 7);
    assert_eq!(from_ten(-5), 15);
}

#[rstest]
fn test_partial_with_two_fixed_arguments() {
    let weighted = partial!(weighted_sum, 2, 3, __, __);
    assert_eq!(weighted(10, 100), 320);
}

#[rstest]
fn test_partial_with_three_fixed_arguments() {
    let almost = partial!(weighted_sum, 2, 3, 10, __);
    assert_eq!(almost(100), 320);
}

#[rstest]
fn test_partial_thunk_fixes_everything() {
    let thunk = partial!(add, 20, 22);
    assert_eq!(thunk(), 42);
    assert_eq!(thunk(), 42);
}

#[rstest]
fn test_partial_accepts_closures() {
    let scale = |factor: i32, value: i32| factor * value;
    let double = partial!(scale, 2, __);
    assert_eq!(double(21), 42);
}

// =============================================================================
// partial_last!: fixed arguments are appended
// =============================================================================

#[rstest]
fn test_partial_last_appends_the_fixed_suffix() {
    let minus_three = partial_last!(subtract, __, 3);
    assert_eq!(minus_three(10), 7);
}

#[rstest]
fn test_partial_and_partial_last_fix_different_ends() {
    let ten_minus = partial!(subtract, 10, __);
    let minus_ten = partial_last!(subtract, __, 10);
    assert_eq!(ten_minus(4), 6);
    assert_eq!(minus_ten(4), -6);
}

#[rstest]
fn test_partial_last_with_two_fixed_arguments() {
    let fixed_values = partial_last!(weighted_sum, __, __, 10, 100);
    assert_eq!(fixed_values(2, 3), 320);
}

#[rstest]
fn test_partial_last_with_three_fixed_arguments() {
    let only_weight_a = partial_last!(weighted_sum, __, 3, 10, 100);
    assert_eq!(only_weight_a(2), 320);
}

#[rstest]
fn test_partial_functions_compose() {
    let add_five = partial!(add, 5, __);
    let add_seven = partial_last!(add, __, 7);
    assert_eq!(add_seven(add_five(30)), 42);
}
