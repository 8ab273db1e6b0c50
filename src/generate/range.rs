//! Eager and pull-based arithmetic ranges.

use crate::error::InvalidRangeError;
use crate::table::Table;

fn validate(from: i64, to: i64, step: i64) -> Result<(), InvalidRangeError> {
    if from > to || step < 1 {
        return Err(InvalidRangeError { from, to, step });
    }
    Ok(())
}

/// Eagerly builds an array-only table of `from, from + step, ..` up to and
/// including `to`.
///
/// # Errors
///
/// Returns [`InvalidRangeError`] when `from > to` or `step < 1`.
///
/// # Examples
///
/// ```rust
/// use funtab::generate::range;
///
/// let odds = range(1, 5, 2).unwrap();
/// assert_eq!(odds.array(), &[1, 3, 5]);
///
/// assert!(range(5, 1, 1).is_err());
/// assert!(range(1, 5, 0).is_err());
/// ```
pub fn range(from: i64, to: i64, step: i64) -> Result<Table<i64, i64>, InvalidRangeError> {
    validate(from, to, step)?;
    Ok(irange(from, to, step)?.collect())
}

/// Creates a pull-based producer of `from, from + step, ..= to`.
///
/// Finite and one-shot: after the last value every further pull returns
/// `None`. A fresh sequence needs a fresh `irange` call.
///
/// # Errors
///
/// Returns [`InvalidRangeError`] when `from > to` or `step < 1`.
///
/// # Examples
///
/// ```rust
/// use funtab::generate::irange;
///
/// let mut producer = irange(10, 12, 1).unwrap();
/// assert_eq!(producer.next(), Some(10));
/// assert_eq!(producer.next(), Some(11));
/// assert_eq!(producer.next(), Some(12));
/// assert_eq!(producer.next(), None);
/// assert_eq!(producer.next(), None); // stays exhausted
/// ```
pub fn irange(from: i64, to: i64, step: i64) -> Result<Irange, InvalidRangeError> {
    validate(from, to, step)?;
    Ok(Irange {
        next: Some(from),
        to,
        step,
    })
}

/// A pull-based arithmetic range producer. Created by [`irange`].
#[derive(Clone, Debug)]
pub struct Irange {
    /// The value the next pull yields; `None` once exhausted.
    next: Option<i64>,
    to: i64,
    step: i64,
}

impl Iterator for Irange {
    type Item = i64;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = match current.checked_add(self.step) {
            Some(candidate) if candidate <= self.to => Some(candidate),
            _ => None,
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.next.map_or(0, |next| {
            let span = (i128::from(self.to) - i128::from(next)) / i128::from(self.step);
            usize::try_from(span).map_or(usize::MAX, |count| count.saturating_add(1))
        });
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Irange {}

impl std::iter::FusedIterator for Irange {}
