//! Transform operations: container in, container out.

use std::collections::HashSet;
use std::hash::Hash;

use smallvec::SmallVec;

use crate::table::{Table, TableKey};

/// A value shape that may nest arbitrarily deep, consumed by [`flat_map`].
///
/// `flat_map` callbacks return a `Nested<T>`: either a single leaf value or a
/// sequence whose elements may themselves nest. Flattening walks the whole
/// shape with an explicit worklist, so arbitrarily deep nesting cannot
/// overflow the call stack.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::Nested;
///
/// let shape = Nested::Seq(vec![
///     Nested::Value(1),
///     Nested::Seq(vec![Nested::Value(2), Nested::Seq(vec![Nested::Value(3)])]),
///     Nested::Value(4),
/// ]);
/// assert_eq!(shape.flatten(), vec![1, 2, 3, 4]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Nested<T> {
    /// A single leaf value.
    Value(T),
    /// A sequence of further shapes.
    Seq(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Flattens the shape into its leaf values, depth-first, in order.
    #[must_use]
    pub fn flatten(self) -> Vec<T> {
        let mut flat = Vec::new();
        // Iterators of the sequences currently being walked; inline storage
        // covers typical nesting depths without touching the heap.
        let mut worklist: SmallVec<[std::vec::IntoIter<Self>; 8]> = SmallVec::new();
        let mut current = match self {
            Self::Value(value) => {
                flat.push(value);
                return flat;
            }
            Self::Seq(children) => children.into_iter(),
        };
        loop {
            match current.next() {
                Some(Self::Value(value)) => flat.push(value),
                Some(Self::Seq(children)) => {
                    worklist.push(current);
                    current = children.into_iter();
                }
                None => match worklist.pop() {
                    Some(parent) => current = parent,
                    None => return flat,
                },
            }
        }
    }
}

impl<T> From<T> for Nested<T> {
    fn from(value: T) -> Self {
        Self::Value(value)
    }
}

impl<T> From<Vec<T>> for Nested<T> {
    fn from(values: Vec<T>) -> Self {
        Self::Seq(values.into_iter().map(Self::Value).collect())
    }
}

/// Applies `transform` to every value, preserving each entry's key or
/// position and its segment.
///
/// Array order is preserved; the keyed segment's evaluation order is
/// unspecified.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::map;
/// use funtab::table;
///
/// let table = table![1, 2; "k" => 3];
/// let doubled = map(&table, |n| n * 2);
/// assert_eq!(doubled.array(), &[2, 4]);
/// assert_eq!(doubled.get_named("k"), Some(&6));
/// ```
pub fn map<K, V, U, F>(table: &Table<K, V>, mut transform: F) -> Table<K, U>
where
    K: Clone + Eq + Hash,
    F: FnMut(&V) -> U,
{
    let mut result = Table::new();
    for value in table.values() {
        result.push(transform(value));
    }
    for (key, value) in table.named_entries() {
        result.insert_named(key.clone(), transform(value));
    }
    result
}

/// Maps every value to a [`Nested`] shape and flattens the results into a
/// single array-only table.
///
/// Original keys are discarded; output positions are assigned 1..n in
/// flattening order. Nesting is flattened to arbitrary depth.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::{Nested, flat_map};
/// use funtab::table;
/// use funtab::table::Table;
///
/// let table: Table<String, i32> = table![1, 2, 3];
/// let expanded = flat_map(&table, |n| Nested::from(vec![*n, n * 10]));
/// assert_eq!(expanded.array(), &[1, 10, 2, 20, 3, 30]);
/// ```
pub fn flat_map<K, V, U, F>(table: &Table<K, V>, mut transform: F) -> Table<K, U>
where
    F: FnMut(&V) -> Nested<U>,
{
    let mut result = Table::new();
    for (_, value) in table.entries() {
        for flat in transform(value).flatten() {
            result.push(flat);
        }
    }
    result
}

/// Keeps the entries whose value satisfies `predicate`.
///
/// Array matches are re-compacted into contiguous positions in their original
/// relative order; keyed matches keep their key.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::filter;
/// use funtab::table;
/// use funtab::table::Table;
///
/// let table: Table<String, i32> = table![1, 2, 3, 4];
/// let even = filter(&table, |n| n % 2 == 0);
/// assert_eq!(even.array(), &[2, 4]);
/// ```
pub fn filter<K, V, P>(table: &Table<K, V>, mut predicate: P) -> Table<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    P: FnMut(&V) -> bool,
{
    let mut result = Table::new();
    for value in table.values() {
        if predicate(value) {
            result.push(value.clone());
        }
    }
    for (key, value) in table.named_entries() {
        if predicate(value) {
            result.insert_named(key.clone(), value.clone());
        }
    }
    result
}

/// Keeps the entries whose value does not satisfy `predicate`.
///
/// `filter_not(t, p)` is equivalent to `filter(t, |v| !p(v))`.
pub fn filter_not<K, V, P>(table: &Table<K, V>, mut predicate: P) -> Table<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    P: FnMut(&V) -> bool,
{
    filter(table, move |value| !predicate(value))
}

/// Returns a single-entry table holding the first entry whose value satisfies
/// `predicate`, at its original key; an empty table when none does.
///
/// The array segment is scanned first, positionally, so positional hits are
/// deterministic. Keyed entries are scanned in unspecified order: when only
/// keyed entries match, which one is found is nondeterministic.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::find;
/// use funtab::table;
/// use funtab::table::{Table, TableKey};
///
/// let table: Table<String, i32> = table![1, 8, 3];
/// let hit = find(&table, |n| n % 2 == 0);
/// assert_eq!(hit.get_named(&TableKey::Position(2)), Some(&8));
///
/// let miss = find(&table, |n| *n > 100);
/// assert!(miss.is_empty());
/// ```
pub fn find<K, V, P>(table: &Table<K, V>, mut predicate: P) -> Table<TableKey<K>, V>
where
    K: Clone + Eq + Hash,
    V: Clone,
    P: FnMut(&V) -> bool,
{
    let mut result = Table::new();
    for (key, value) in table.entries() {
        if predicate(value) {
            result.insert_named(key.cloned(), value.clone());
            break;
        }
    }
    result
}

/// Returns a table holding exactly the array segment, in order, with every
/// keyed entry discarded.
///
/// Idempotent: `array_part(&array_part(&t)) == array_part(&t)`.
pub fn array_part<K, V>(table: &Table<K, V>) -> Table<K, V>
where
    V: Clone,
{
    Table::from_values(table.values().cloned())
}

/// Splits the table's values into `(matches, non_matches)` by `predicate`.
///
/// Both results are array-only. Array values keep their relative order;
/// keyed values are appended after them, their keys dropped.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::partition;
/// use funtab::table;
/// use funtab::table::Table;
///
/// let table: Table<String, i32> = table![1, 3, 2, 7, 4, 9];
/// let (even, odd) = partition(&table, |n| n % 2 == 0);
/// assert_eq!(even.array(), &[2, 4]);
/// assert_eq!(odd.array(), &[1, 3, 7, 9]);
/// ```
pub fn partition<K, V, P>(table: &Table<K, V>, mut predicate: P) -> (Table<K, V>, Table<K, V>)
where
    V: Clone,
    P: FnMut(&V) -> bool,
{
    let mut matches = Table::new();
    let mut non_matches = Table::new();
    for (_, value) in table.entries() {
        if predicate(value) {
            matches.push(value.clone());
        } else {
            non_matches.push(value.clone());
        }
    }
    (matches, non_matches)
}

/// Returns an array-only table with one occurrence per distinct value.
///
/// Values from both segments are considered. The output's order is
/// unspecified; callers must not depend on it.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::distinct;
/// use funtab::table;
/// use funtab::table::Table;
///
/// let table: Table<String, i32> = table![1, 2, 2, 3, 1, 2, 5];
/// let unique = distinct(&table);
/// assert_eq!(unique.len(), 4);
/// ```
pub fn distinct<K, V>(table: &Table<K, V>) -> Table<K, V>
where
    V: Clone + Eq + Hash,
{
    let mut seen = HashSet::new();
    let mut result = Table::new();
    for (_, value) in table.entries() {
        if seen.insert(value.clone()) {
            result.push(value.clone());
        }
    }
    result
}

/// Groups every entry by the value `classify` computes from its key and
/// value.
///
/// Returns a keyed-only table mapping each distinct group to an array-only
/// table of the `(key, value)` pairs in that group, in input iteration order
/// (array entries first).
///
/// # Examples
///
/// ```rust
/// use funtab::ops::group_by;
/// use funtab::table;
/// use funtab::table::Table;
///
/// let table: Table<String, i32> = table![1, 2, 3, 4, 5];
/// let by_parity = group_by(&table, |_, n| n % 2);
/// let odd = by_parity.get_named(&1).unwrap();
/// let values: Vec<i32> = odd.values().map(|(_, n)| *n).collect();
/// assert_eq!(values, vec![1, 3, 5]);
/// ```
pub fn group_by<K, V, G, F>(
    table: &Table<K, V>,
    mut classify: F,
) -> Table<G, Table<K, (TableKey<K>, V)>>
where
    K: Clone + Eq + Hash,
    V: Clone,
    G: Eq + Hash,
    F: FnMut(TableKey<&K>, &V) -> G,
{
    let mut result: Table<G, Table<K, (TableKey<K>, V)>> = Table::new();
    for (key, value) in table.entries() {
        let group = classify(key, value);
        result
            .keyed
            .entry(group)
            .or_insert_with(Table::new)
            .push((key.cloned(), value.clone()));
    }
    result
}

/// Returns the array-segment elements at positions `from..=to`, re-indexed
/// from position 1.
///
/// Positions are 1-based and inclusive. Positions outside the array segment
/// are silently skipped: `from` below 1 starts at 1, `to` past the length
/// stops at the length, and `from > to` yields an empty table.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::slice;
/// use funtab::table;
/// use funtab::table::Table;
///
/// let table: Table<String, i32> = table![10, 20, 30, 40];
/// assert_eq!(slice(&table, 2, 3).array(), &[20, 30]);
/// assert_eq!(slice(&table, 3, 99).array(), &[30, 40]);
/// assert!(slice(&table, 3, 2).is_empty());
/// ```
pub fn slice<K, V>(table: &Table<K, V>, from: usize, to: usize) -> Table<K, V>
where
    V: Clone,
{
    let mut result = Table::new();
    for position in from.max(1)..=to {
        match table.get(position) {
            Some(value) => result.push(value.clone()),
            None => break,
        }
    }
    result
}

/// Returns the array segment reversed, re-indexed from position 1; keyed
/// entries are discarded.
pub fn reverse<K, V>(table: &Table<K, V>) -> Table<K, V>
where
    V: Clone,
{
    Table::from_values(table.values().rev().cloned())
}

/// Pairs the array-segment elements of `left` and `right` positionally, up to
/// the shorter length.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::zip;
/// use funtab::table;
/// use funtab::table::Table;
///
/// let numbers: Table<String, i32> = table![1, 2];
/// let letters: Table<String, &str> = table!["a", "b", "c"];
/// let pairs = zip(&numbers, &letters);
/// assert_eq!(pairs.array(), &[(1, "a"), (2, "b")]);
/// ```
pub fn zip<K, V, K2, W>(left: &Table<K, V>, right: &Table<K2, W>) -> Table<K, (V, W)>
where
    V: Clone,
    W: Clone,
{
    Table::from_values(
        left.values()
            .zip(right.values())
            .map(|(first, second)| (first.clone(), second.clone())),
    )
}

/// Splits a table of pairs into two plain ordered sequences: the firsts and
/// the seconds, in array order.
///
/// The inverse of [`zip`]. Only the array segment is read.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::unzip;
/// use funtab::table;
/// use funtab::table::Table;
///
/// let pairs: Table<String, (i32, &str)> = table![(1, "a"), (2, "b")];
/// let (numbers, letters) = unzip(&pairs);
/// assert_eq!(numbers, vec![1, 2]);
/// assert_eq!(letters, vec!["a", "b"]);
/// ```
pub fn unzip<K, V, W>(pairs: &Table<K, (V, W)>) -> (Vec<V>, Vec<W>)
where
    V: Clone,
    W: Clone,
{
    pairs
        .values()
        .map(|(first, second)| (first.clone(), second.clone()))
        .unzip()
}

/// First stage of the curried [`fill`] constructor, holding the repeat count.
#[derive(Clone, Copy, Debug)]
pub struct Fill {
    count: usize,
}

impl Fill {
    /// Builds an array-only table repeating `value` the captured number of
    /// times.
    #[must_use]
    pub fn of<K, V: Clone>(self, value: V) -> Table<K, V> {
        Table::from_values(std::iter::repeat_n(value, self.count))
    }
}

/// Curried constructor: captures a repeat count, then takes the value to
/// repeat.
///
/// # Examples
///
/// ```rust
/// use funtab::ops::fill;
/// use funtab::table::Table;
///
/// let tabs: Table<String, &str> = fill(3).of("x");
/// assert_eq!(tabs.array(), &["x", "x", "x"]);
/// ```
#[must_use]
pub const fn fill(count: usize) -> Fill {
    Fill { count }
}

/// Returns the longest array-segment prefix whose values satisfy
/// `predicate`, as an array-only table.
pub fn take_while<K, V, P>(table: &Table<K, V>, mut predicate: P) -> Table<K, V>
where
    V: Clone,
    P: FnMut(&V) -> bool,
{
    let mut result = Table::new();
    for value in table.values() {
        if !predicate(value) {
            break;
        }
        result.push(value.clone());
    }
    result
}

/// Returns the array segment with its longest satisfying prefix removed, as
/// an array-only table.
pub fn drop_while<K, V, P>(table: &Table<K, V>, mut predicate: P) -> Table<K, V>
where
    V: Clone,
    P: FnMut(&V) -> bool,
{
    let mut result = Table::new();
    let mut dropping = true;
    for value in table.values() {
        if dropping && predicate(value) {
            continue;
        }
        dropping = false;
        result.push(value.clone());
    }
    result
}
