//! Error types for table operations and generators.
//!
//! This module provides the error types raised by operations whose
//! preconditions can be violated at runtime: folding an empty table where a
//! seed element is structurally required, or constructing a range with
//! inverted bounds or a non-positive step.
//!
//! Every failure propagates immediately to the caller as a typed error; no
//! operation retries, recovers, or silently substitutes a default.

/// Represents an error raised when an operation requires a non-empty array
/// segment but the table's array segment is empty.
///
/// `reduce` seeds its accumulator from the element at position 1; on a table
/// without one there is no defined result, so the operation fails instead of
/// returning a fabricated value.
///
/// # Examples
///
/// ```rust
/// use funtab::error::EmptyTableError;
///
/// let error = EmptyTableError { operation: "reduce" };
/// assert_eq!(
///     format!("{}", error),
///     "reduce: empty array segment has no element at position 1"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmptyTableError {
    /// The name of the operation that required a non-empty array segment.
    pub operation: &'static str,
}

impl std::fmt::Display for EmptyTableError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: empty array segment has no element at position 1",
            self.operation
        )
    }
}

impl std::error::Error for EmptyTableError {}

/// Represents a precondition violation in `range` or `irange`.
///
/// A range is well-formed only when `from <= to` and `step >= 1`. Anything
/// else fails fast with this error rather than looping incorrectly or
/// silently clamping the bounds.
///
/// # Examples
///
/// ```rust
/// use funtab::error::InvalidRangeError;
///
/// let error = InvalidRangeError { from: 5, to: 1, step: 1 };
/// assert_eq!(
///     format!("{}", error),
///     "range: invalid bounds from=5 to=1 step=1 (requires from <= to and step >= 1)"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidRangeError {
    /// The requested lower bound.
    pub from: i64,
    /// The requested upper bound.
    pub to: i64,
    /// The requested step.
    pub step: i64,
}

impl std::fmt::Display for InvalidRangeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "range: invalid bounds from={} to={} step={} (requires from <= to and step >= 1)",
            self.from, self.to, self.step
        )
    }
}

impl std::error::Error for InvalidRangeError {}

/// Represents errors that can occur across the library.
///
/// This enum provides a unified error type aggregating the individual error
/// kinds, for callers that route several fallible operations through one
/// error path.
///
/// # Examples
///
/// ```rust
/// use funtab::error::{EmptyTableError, TableError};
///
/// let error = TableError::from(EmptyTableError { operation: "reduce" });
/// assert!(matches!(error, TableError::Empty(_)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// An operation required a non-empty array segment.
    Empty(EmptyTableError),
    /// A range constructor was given invalid bounds.
    InvalidRange(InvalidRangeError),
}

impl std::fmt::Display for TableError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(error) => write!(formatter, "{error}"),
            Self::InvalidRange(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for TableError {}

impl From<EmptyTableError> for TableError {
    fn from(error: EmptyTableError) -> Self {
        Self::Empty(error)
    }
}

impl From<InvalidRangeError> for TableError {
    fn from(error: InvalidRangeError) -> Self {
        Self::InvalidRange(error)
    }
}
