//! Lazy sequence generators.
//!
//! This module provides one eager constructor and a family of pull-based
//! producers:
//!
//! - [`range`]: eagerly builds a table of `from, from + step, ..= to`
//! - [`irange`]: the pull-based counterpart of `range`
//! - [`stream`]: an infinite producer whose state transitions to its own
//!   output on every pull
//! - [`itimes`]: pulls a zero-argument callable a fixed number of times
//! - [`ifill`]: curried; yields one value a fixed number of times
//!
//! Producers are ordinary [`Iterator`]s: a pull is `next()`, and `None` is
//! the end-of-sequence marker. Each producer holds private cursor state, is
//! driven by exactly one caller at a time (`&mut self`), and is one-shot: a
//! finished producer stays finished, and a fresh sequence needs a fresh
//! constructor call.
//!
//! # Examples
//!
//! ```rust
//! use funtab::generate::{irange, stream};
//!
//! let odds: Vec<i64> = irange(1, 9, 2).unwrap().collect();
//! assert_eq!(odds, vec![1, 3, 5, 7, 9]);
//!
//! // Fibonacci pairs: the stored pair becomes the most recent output.
//! let fibonacci: Vec<i64> = stream(|&(a, b)| (b, a + b), (0i64, 1i64))
//!     .take(6)
//!     .map(|(a, _)| a)
//!     .collect();
//! assert_eq!(fibonacci, vec![1, 1, 2, 3, 5, 8]);
//! ```

mod fill;
mod range;
mod stream;
mod times;

pub use fill::{Ifill, IfillBuilder, ifill};
pub use range::{Irange, irange, range};
pub use stream::{Stream, stream};
pub use times::{Itimes, itimes};
