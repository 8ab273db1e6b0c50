//! The hybrid array/keyed container.
//!
//! This module provides [`Table`], the single container abstraction the whole
//! library operates on, combining:
//!
//! - an *array segment*: a dense, contiguous, order-significant run of
//!   positional elements (positions 1..=n with no gaps);
//! - a *keyed segment*: arbitrary key-to-value entries with no significant
//!   order.
//!
//! A table may hold both segments at once. Most operations in
//! [`ops`](crate::ops) only ever populate the array segment of their result;
//! a few (`find`, `group_by`) deliberately produce keyed entries.
//!
//! # Examples
//!
//! ```rust
//! use funtab::table;
//! use funtab::table::Table;
//!
//! let mut table: Table<&str, i32> = table![10, 20, 30];
//! table.insert_named("answer", 42);
//!
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.get(1), Some(&10));
//! assert_eq!(table.get_named("answer"), Some(&42));
//! ```

mod iter;
mod key;
mod macros;
#[allow(clippy::module_inception)]
mod table;

pub use iter::{Entries, IntoEntries, NamedEntries};
pub use key::TableKey;
pub use table::Table;
