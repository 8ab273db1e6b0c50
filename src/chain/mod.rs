//! Fluent chaining over tables.
//!
//! [`Chain`] wraps a [`Table`] so every operation in [`ops`](crate::ops) can
//! be invoked as a method with the table as implicit first argument, and
//! container-returning operations re-wrap their result so calls compose:
//!
//! ```rust
//! use funtab::chain::chain;
//! use funtab::table;
//! use funtab::table::Table;
//!
//! let numbers: Table<String, i32> = table![1, 3, 2, 7, 4, 9];
//! let sum_of_even = chain(numbers)
//!     .filter(|n| n % 2 == 0)
//!     .fold_left(0)
//!     .with(|acc, n| acc + n);
//! assert_eq!(sum_of_even, 6);
//! ```
//!
//! Every method delegates to the free function of the same name, so
//! `chain(t).op(..)` and `op(&t, ..)` always agree. Methods returning a bare
//! value (`apply`, `is_empty`, `any`, `all`, `reduce`, `unzip`, fold results)
//! terminate the chain; [`Chain::into_table`] unwraps it explicitly.
//!
//! Dispatch is static: the wrapper is an ordinary struct, not a method table
//! attached at runtime.

use std::hash::Hash;

use crate::error::EmptyTableError;
use crate::ops;
use crate::ops::{Corresponds, Fold, Nested};
use crate::table::{Table, TableKey};

/// Wraps a table for fluent chaining.
///
/// See the [module documentation](self) for an overview.
#[inline]
#[must_use]
pub fn chain<K, V>(table: Table<K, V>) -> Chain<K, V> {
    Chain { table }
}

/// A table carrying the chaining capability: every [`ops`](crate::ops)
/// operation is available as a method. Created by [`chain`].
#[derive(Clone, Debug)]
pub struct Chain<K, V> {
    table: Table<K, V>,
}

impl<K, V> Chain<K, V> {
    /// Unwraps the underlying table.
    #[inline]
    #[must_use]
    pub fn into_table(self) -> Table<K, V> {
        self.table
    }

    /// Borrows the underlying table.
    #[inline]
    #[must_use]
    pub const fn table(&self) -> &Table<K, V> {
        &self.table
    }

    /// Chained [`ops::map`].
    pub fn map<U, F>(self, transform: F) -> Chain<K, U>
    where
        K: Clone + Eq + Hash,
        F: FnMut(&V) -> U,
    {
        Chain {
            table: ops::map(&self.table, transform),
        }
    }

    /// Chained [`ops::flat_map`].
    pub fn flat_map<U, F>(self, transform: F) -> Chain<K, U>
    where
        F: FnMut(&V) -> Nested<U>,
    {
        Chain {
            table: ops::flat_map(&self.table, transform),
        }
    }

    /// Chained [`ops::filter`].
    pub fn filter<P>(self, predicate: P) -> Self
    where
        K: Clone + Eq + Hash,
        V: Clone,
        P: FnMut(&V) -> bool,
    {
        Self {
            table: ops::filter(&self.table, predicate),
        }
    }

    /// Chained [`ops::filter_not`].
    pub fn filter_not<P>(self, predicate: P) -> Self
    where
        K: Clone + Eq + Hash,
        V: Clone,
        P: FnMut(&V) -> bool,
    {
        Self {
            table: ops::filter_not(&self.table, predicate),
        }
    }

    /// Chained [`ops::find`].
    pub fn find<P>(self, predicate: P) -> Chain<TableKey<K>, V>
    where
        K: Clone + Eq + Hash,
        V: Clone,
        P: FnMut(&V) -> bool,
    {
        Chain {
            table: ops::find(&self.table, predicate),
        }
    }

    /// Chained [`ops::array_part`].
    pub fn array_part(self) -> Self
    where
        V: Clone,
    {
        Self {
            table: ops::array_part(&self.table),
        }
    }

    /// Chained [`ops::partition`].
    pub fn partition<P>(self, predicate: P) -> (Self, Self)
    where
        V: Clone,
        P: FnMut(&V) -> bool,
    {
        let (matches, non_matches) = ops::partition(&self.table, predicate);
        (Self { table: matches }, Self { table: non_matches })
    }

    /// Chained [`ops::distinct`].
    pub fn distinct(self) -> Self
    where
        V: Clone + Eq + Hash,
    {
        Self {
            table: ops::distinct(&self.table),
        }
    }

    /// Chained [`ops::group_by`].
    pub fn group_by<G, F>(self, classify: F) -> Chain<G, Table<K, (TableKey<K>, V)>>
    where
        K: Clone + Eq + Hash,
        V: Clone,
        G: Eq + Hash,
        F: FnMut(TableKey<&K>, &V) -> G,
    {
        Chain {
            table: ops::group_by(&self.table, classify),
        }
    }

    /// Chained [`ops::slice`].
    pub fn slice(self, from: usize, to: usize) -> Self
    where
        V: Clone,
    {
        Self {
            table: ops::slice(&self.table, from, to),
        }
    }

    /// Chained [`ops::reverse`].
    pub fn reverse(self) -> Self
    where
        V: Clone,
    {
        Self {
            table: ops::reverse(&self.table),
        }
    }

    /// Chained [`ops::take_while`].
    pub fn take_while<P>(self, predicate: P) -> Self
    where
        V: Clone,
        P: FnMut(&V) -> bool,
    {
        Self {
            table: ops::take_while(&self.table, predicate),
        }
    }

    /// Chained [`ops::drop_while`].
    pub fn drop_while<P>(self, predicate: P) -> Self
    where
        V: Clone,
        P: FnMut(&V) -> bool,
    {
        Self {
            table: ops::drop_while(&self.table, predicate),
        }
    }

    /// Chained [`ops::zip`].
    pub fn zip<K2, W>(self, other: &Table<K2, W>) -> Chain<K, (V, W)>
    where
        V: Clone,
        W: Clone,
    {
        Chain {
            table: ops::zip(&self.table, other),
        }
    }

    /// Chained [`ops::fold_left`]; terminate with [`Fold::with`].
    pub fn fold_left<B>(&self, start: B) -> Fold<'_, V, B> {
        ops::fold_left(&self.table, start)
    }

    /// Chained [`ops::fold_right`]; terminate with [`Fold::with`].
    pub fn fold_right<B>(&self, start: B) -> Fold<'_, V, B> {
        ops::fold_right(&self.table, start)
    }

    /// Chained [`ops::reduce`]; terminates the chain.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyTableError`] when the array segment is empty.
    pub fn reduce<F>(&self, combine: F) -> Result<V, EmptyTableError>
    where
        V: Clone,
        F: FnMut(V, &V) -> V,
    {
        ops::reduce(&self.table, combine)
    }

    /// Chained [`ops::corresponds`]; terminate with [`Corresponds::with`].
    pub fn corresponds<'a, K2, W>(&'a self, other: &'a Table<K2, W>) -> Corresponds<'a, V, W> {
        ops::corresponds(&self.table, other)
    }

    /// Chained [`ops::any`]; terminates the chain.
    pub fn any<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        ops::any(&self.table, predicate)
    }

    /// Chained [`ops::all`]; terminates the chain.
    pub fn all<P>(&self, predicate: P) -> bool
    where
        P: FnMut(&V) -> bool,
    {
        ops::all(&self.table, predicate)
    }

    /// Chained [`ops::max`].
    pub fn max(self) -> Self
    where
        V: Clone + Ord,
    {
        Self {
            table: ops::max(&self.table),
        }
    }

    /// Chained [`ops::min`].
    pub fn min(self) -> Self
    where
        V: Clone + Ord,
    {
        Self {
            table: ops::min(&self.table),
        }
    }

    /// Chained [`ops::apply`]; terminates the chain.
    pub fn apply<F, R>(&self, function: F) -> R
    where
        F: FnOnce(&[V]) -> R,
    {
        ops::apply(&self.table, function)
    }

    /// Chained [`ops::is_empty`]; terminates the chain.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        ops::is_empty(&self.table)
    }

    /// Chained [`ops::if_empty`]: keeps the wrapped table when non-empty,
    /// substitutes `default` otherwise.
    #[must_use]
    pub fn if_empty(self, default: Table<K, V>) -> Self {
        if self.table.is_empty() {
            Self { table: default }
        } else {
            self
        }
    }

    /// Chained [`ops::if_empty_with`]: the thunk form of
    /// [`if_empty`](Chain::if_empty).
    #[must_use]
    pub fn if_empty_with<F>(self, default: F) -> Self
    where
        F: FnOnce() -> Table<K, V>,
    {
        if self.table.is_empty() {
            Self { table: default() }
        } else {
            self
        }
    }
}

impl<K, A, B> Chain<K, (A, B)> {
    /// Chained [`ops::unzip`]; terminates the chain.
    pub fn unzip(&self) -> (Vec<A>, Vec<B>)
    where
        A: Clone,
        B: Clone,
    {
        ops::unzip(&self.table)
    }
}

impl<K, V> From<Table<K, V>> for Chain<K, V> {
    fn from(table: Table<K, V>) -> Self {
        chain(table)
    }
}
