//! # funtab
//!
//! A functional programming library for Rust providing hybrid array/keyed
//! tables, transformation and folding operations, and lazy pull-based
//! generators.
//!
//! ## Overview
//!
//! Everything in this library operates on one container abstraction:
//! [`Table<K, V>`](table::Table), a hybrid structure combining a contiguous,
//! order-significant *array segment* (positions starting at 1) with an
//! order-insignificant *keyed segment* of arbitrary entries. The library
//! provides:
//!
//! - **Transform Operations**: map, `flat_map`, filter, partition, `group_by`,
//!   distinct, slice, reverse, zip and friends
//! - **Folding & Aggregation**: `fold_left`/`fold_right`, reduce, any/all,
//!   corresponds, max/min
//! - **Partial Application**: `partial!` and `partial_last!` macros
//! - **Lazy Generators**: range, `Irange`, `Stream`, `Itimes`, `Ifill`
//!   pull-based producers
//! - **Fluent Chaining**: the [`Chain`](chain::Chain) wrapper for pipeline
//!   composition
//!
//! Every operation takes its input table by reference and builds a fresh
//! result; inputs are never mutated.
//!
//! ## Feature Flags
//!
//! - `ops`: Transform and folding operations
//! - `compose`: Partial application macros
//! - `generate`: Lazy sequence generators
//! - `chain`: Fluent chaining wrapper
//! - `serde`: Serialize/Deserialize for `Table`
//! - `fxhash` / `ahash`: Alternative hashers for the keyed segment
//!
//! ## Example
//!
//! ```rust
//! use funtab::chain::chain;
//! use funtab::table;
//! use funtab::table::Table;
//!
//! let numbers: Table<String, i32> = table![1, 3, 2, 7, 4, 9];
//! let total = chain(numbers)
//!     .filter(|n| n % 2 == 1)
//!     .map(|n| n * 10)
//!     .fold_left(0)
//!     .with(|acc, n| acc + n);
//!
//! assert_eq!(total, 200);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and functions.
///
/// # Usage
///
/// ```rust
/// use funtab::prelude::*;
/// ```
pub mod prelude {

    pub use crate::error::*;
    pub use crate::table::*;

    #[cfg(feature = "ops")]
    pub use crate::ops::*;

    #[cfg(feature = "generate")]
    pub use crate::generate::*;

    #[cfg(feature = "chain")]
    pub use crate::chain::*;
}

pub mod error;

pub mod table;

#[cfg(feature = "ops")]
pub mod ops;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "generate")]
pub mod generate;

#[cfg(feature = "chain")]
pub mod chain;
