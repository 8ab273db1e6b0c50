//! Partial application utilities.
//!
//! This module provides two macros for fixing part of a function's argument
//! list ahead of time:
//!
//! - [`partial!`](crate::partial): fixes a leading prefix of arguments; the
//!   returned closure takes the trailing arguments.
//! - [`partial_last!`](crate::partial_last): fixes a trailing suffix of
//!   arguments; the returned closure takes the leading arguments.
//!
//! Open argument slots are marked with the `__` placeholder token, which is
//! how the macros know the arity of the closure to build.
//!
//! # Examples
//!
//! ```rust
//! use funtab::{partial, partial_last};
//!
//! fn describe(name: &str, count: usize, unit: &str) -> String {
//!     format!("{name}: {count} {unit}")
//! }
//!
//! let apples = partial!(describe, "apples", __, __);
//! assert_eq!(apples(3, "kg"), "apples: 3 kg");
//!
//! let in_grams = partial_last!(describe, __, __, "g");
//! assert_eq!(in_grams("flour", 500), "flour: 500 g");
//! ```

mod partial_macro;
