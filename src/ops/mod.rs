//! Pure operations over [`Table`](crate::table::Table)s.
//!
//! Every operation here borrows its input table(s) and builds a fresh result;
//! inputs are never mutated. Operations come in two families:
//!
//! - **Transforms** (container in, container out): [`map`], [`flat_map`],
//!   [`filter`], [`filter_not`], [`find`], [`array_part`], [`partition`],
//!   [`distinct`], [`group_by`], [`slice`], [`reverse`], [`zip`], [`unzip`],
//!   [`fill`], [`take_while`], [`drop_while`]
//! - **Folds & aggregations** (container in, value out): [`fold_left`],
//!   [`fold_right`], [`reduce`], [`any`], [`all`], [`corresponds`], [`max`],
//!   [`min`], [`apply`], [`is_empty`], [`if_empty`], [`if_empty_with`]
//!
//! Curried operations (`fold_left`, `fold_right`, `corresponds`, `fill`) are
//! split into two stages: the first call captures the container(s) and
//! configuration and returns a builder; the builder's single method supplies
//! the callback and produces the result.
//!
//! # Examples
//!
//! ```rust
//! use funtab::ops::{filter, fold_left, map};
//! use funtab::table;
//! use funtab::table::Table;
//!
//! let numbers: Table<String, i32> = table![1, 3, 2, 7, 4, 9];
//! let odds = filter(&numbers, |n| n % 2 == 1);
//! let scaled = map(&odds, |n| n * 10);
//! let total = fold_left(&scaled, 0).with(|acc, n| acc + n);
//! assert_eq!(total, 200);
//! ```

mod fold;
mod transform;

pub use fold::{
    Corresponds, Fold, all, any, apply, corresponds, fold_left, fold_right, if_empty,
    if_empty_with, is_empty, max, min, reduce,
};
pub use transform::{
    Fill, Nested, array_part, distinct, drop_while, fill, filter, filter_not, find, flat_map,
    group_by, map, partition, reverse, slice, take_while, unzip, zip,
};
