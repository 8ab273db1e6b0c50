#![cfg(feature = "ops")]
//! Property-based tests for the operation laws.
//!
//! This module verifies the algebraic properties of the transform and
//! folding operations using proptest. Properties touching the keyed segment
//! compare multisets, never positions.

use funtab::ops::{
    all, array_part, corresponds, distinct, drop_while, filter, filter_not, fold_left,
    fold_right, map, partition, reduce, reverse, slice, take_while, unzip, zip,
};
use funtab::table::Table;
use proptest::prelude::*;

fn table_of(values: &[i32]) -> Table<String, i32> {
    Table::from_values(values.iter().copied())
}

fn sorted(mut values: Vec<i32>) -> Vec<i32> {
    values.sort_unstable();
    values
}

// =============================================================================
// Transform laws
// =============================================================================

proptest! {
    /// map preserves length, and element i of the result is f(input[i]).
    #[test]
    fn prop_map_preserves_length_and_elements(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let table = table_of(&elements);
        let mapped = map(&table, |n| i64::from(*n) * 3);

        prop_assert_eq!(mapped.len(), table.len());
        for position in 1..=table.len() {
            let input = *table.get(position).unwrap();
            prop_assert_eq!(mapped.get(position), Some(&(i64::from(input) * 3)));
        }
    }

    /// Every element filter keeps satisfies the predicate.
    #[test]
    fn prop_filter_then_all_holds(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let table = table_of(&elements);
        let kept = filter(&table, |n| n % 3 == 0);
        prop_assert!(all(&kept, |n| n % 3 == 0));
    }

    /// filter and filter_not together reconstruct the input as a multiset.
    #[test]
    fn prop_filter_and_filter_not_reconstruct(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let table = table_of(&elements);
        let kept = filter(&table, |n| n % 2 == 0);
        let dropped = filter_not(&table, |n| n % 2 == 0);

        let mut combined: Vec<i32> = kept.values().copied().collect();
        combined.extend(dropped.values().copied());
        prop_assert_eq!(sorted(combined), sorted(elements));
    }

    /// partition reconstructs the input as a multiset, split by the predicate.
    #[test]
    fn prop_partition_reconstructs(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let table = table_of(&elements);
        let (matches, non_matches) = partition(&table, |n| *n > 0);

        prop_assert!(all(&matches, |n| *n > 0));
        prop_assert!(all(&non_matches, |n| *n <= 0));

        let mut combined: Vec<i32> = matches.values().copied().collect();
        combined.extend(non_matches.values().copied());
        prop_assert_eq!(sorted(combined), sorted(elements));
    }

    /// distinct holds exactly the value set, each value once.
    #[test]
    fn prop_distinct_is_the_value_set(
        elements in prop::collection::vec(-10..10_i32, 0..50)
    ) {
        let table = table_of(&elements);
        let unique = distinct(&table);

        let mut expected = sorted(elements);
        expected.dedup();
        prop_assert_eq!(sorted(unique.values().copied().collect()), expected);
    }

    /// array_part is idempotent.
    #[test]
    fn prop_array_part_idempotent(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let table = table_of(&elements);
        let once = array_part(&table);
        let twice = array_part(&once);
        prop_assert_eq!(once, twice);
    }

    /// reverse is an involution on the array segment.
    #[test]
    fn prop_reverse_involution(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let table = table_of(&elements);
        let back = reverse(&reverse(&table));
        prop_assert_eq!(back.array(), table.array());
    }

    /// slice agrees with std slicing on in-range bounds.
    #[test]
    fn prop_slice_matches_std_slicing(
        elements in prop::collection::vec(any::<i32>(), 1..50),
        raw_from in 1..60_usize,
        raw_to in 1..60_usize,
    ) {
        let table = table_of(&elements);
        let (from, to) = (raw_from.min(raw_to), raw_from.max(raw_to));
        let sliced = slice(&table, from, to);

        let clamped_to = to.min(elements.len());
        let expected: &[i32] = if from > clamped_to {
            &[]
        } else {
            &elements[from - 1..clamped_to]
        };
        prop_assert_eq!(sliced.array(), expected);
    }

    /// take_while and drop_while concatenate back to the array segment.
    #[test]
    fn prop_take_drop_while_reconstruct(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let table = table_of(&elements);
        let mut combined: Vec<i32> = take_while(&table, |n| n % 2 == 0).values().copied().collect();
        combined.extend(drop_while(&table, |n| n % 2 == 0).values().copied());
        prop_assert_eq!(combined, elements);
    }

    /// unzip inverts zip up to the shorter input.
    #[test]
    fn prop_zip_unzip_inverse(
        left in prop::collection::vec(any::<i32>(), 0..50),
        right in prop::collection::vec(any::<i32>(), 0..50),
    ) {
        let left_table = table_of(&left);
        let right_table = table_of(&right);
        let (firsts, seconds) = unzip(&zip(&left_table, &right_table));

        let shorter = left.len().min(right.len());
        prop_assert_eq!(firsts, left[..shorter].to_vec());
        prop_assert_eq!(seconds, right[..shorter].to_vec());
    }
}

// =============================================================================
// Fold laws
// =============================================================================

proptest! {
    /// fold_left with addition equals the iterator sum.
    #[test]
    fn prop_fold_left_sum(
        elements in prop::collection::vec(-1000..1000_i32, 0..50)
    ) {
        let table = table_of(&elements);
        let total = fold_left(&table, 0).with(|acc, n| acc + n);
        prop_assert_eq!(total, elements.iter().sum::<i32>());
    }

    /// fold_left and fold_right agree for commutative, associative combiners.
    #[test]
    fn prop_fold_directions_agree_when_commutative(
        elements in prop::collection::vec(-1000..1000_i32, 0..50)
    ) {
        let table = table_of(&elements);
        let left = fold_left(&table, 0).with(|acc, n| acc + n);
        let right = fold_right(&table, 0).with(|acc, n| acc + n);
        prop_assert_eq!(left, right);
    }

    /// reduce equals a fold seeded from the first element.
    #[test]
    fn prop_reduce_equals_seeded_fold(
        elements in prop::collection::vec(-1000..1000_i32, 1..50)
    ) {
        let table = table_of(&elements);
        let reduced = reduce(&table, |acc, n| acc.min(*n)).unwrap();
        prop_assert_eq!(reduced, elements.iter().copied().min().unwrap());
    }

    /// corresponds with equality holds exactly for equal array segments.
    #[test]
    fn prop_corresponds_reflexive(
        elements in prop::collection::vec(any::<i32>(), 0..50)
    ) {
        let table = table_of(&elements);
        let copy = table_of(&elements);
        prop_assert!(corresponds(&table, &copy).with(|a, b| a == b));
    }

    /// corresponds is false whenever the lengths differ.
    #[test]
    fn prop_corresponds_rejects_length_mismatch(
        elements in prop::collection::vec(any::<i32>(), 1..50)
    ) {
        let table = table_of(&elements);
        let shorter = table_of(&elements[..elements.len() - 1]);
        prop_assert!(!corresponds(&table, &shorter).with(|_, _| true));
    }
}
