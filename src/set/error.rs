//! Error types for the set container.
//!
//! This module provides the two failure kinds raised by the single-element
//! mutating primitives on [`SlotSet`]: adding a value that is already
//! present, and removing a value that is absent. The tolerant merge and
//! discard operations swallow exactly their corresponding kind and never
//! fail.
//!
//! [`SlotSet`]: crate::set::SlotSet

use std::fmt;

/// Raised by [`SlotSet::add`] when a slot already holds the offered value.
///
/// The container is left unchanged when this error is reported. A vacant
/// slot holds the element type's default value, so adding the default value
/// to a container with at least one vacant slot also reports a duplicate.
///
/// # Examples
///
/// ```rust
/// use slotset::set::{DuplicateElementError, SlotSet};
///
/// let mut numbers = SlotSet::with_capacity(2);
/// assert_eq!(numbers.add(7), Ok(()));
/// assert_eq!(numbers.add(7), Err(DuplicateElementError));
/// assert_eq!(
///     DuplicateElementError.to_string(),
///     "Element already in the set"
/// );
/// ```
///
/// [`SlotSet::add`]: crate::set::SlotSet::add
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateElementError;

impl fmt::Display for DuplicateElementError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Element already in the set")
    }
}

impl std::error::Error for DuplicateElementError {}

/// Raised by [`SlotSet::remove`] when no slot holds the offered value.
///
/// The container is left unchanged when this error is reported.
///
/// # Examples
///
/// ```rust
/// use slotset::set::{NotFoundError, SlotSet};
///
/// let mut numbers: SlotSet<i32> = [7].into_iter().collect();
/// assert_eq!(numbers.remove(&8), Err(NotFoundError));
/// assert_eq!(NotFoundError.to_string(), "Element not in the set");
/// ```
///
/// [`SlotSet::remove`]: crate::set::SlotSet::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFoundError;

impl fmt::Display for NotFoundError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Element not in the set")
    }
}

impl std::error::Error for NotFoundError {}

/// Represents any failure raised by the set container.
///
/// This enum unifies the two per-operation kinds so that callers mixing
/// [`SlotSet::add`] and [`SlotSet::remove`] can propagate both with `?`.
///
/// # Examples
///
/// ```rust
/// use slotset::set::{SetError, SlotSet};
///
/// fn rebalance(numbers: &mut SlotSet<i32>) -> Result<(), SetError> {
///     numbers.remove(&10)?;
///     numbers.add(40)?;
///     Ok(())
/// }
///
/// let mut numbers: SlotSet<i32> = [10, 20].into_iter().collect();
/// assert!(rebalance(&mut numbers).is_ok());
/// assert_eq!(rebalance(&mut numbers), Err(SetError::NotFound(
///     slotset::set::NotFoundError,
/// )));
/// ```
///
/// [`SlotSet::add`]: crate::set::SlotSet::add
/// [`SlotSet::remove`]: crate::set::SlotSet::remove
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetError {
    /// A value offered to `add` already occupies a slot.
    Duplicate(DuplicateElementError),
    /// A value offered to `remove` occupies no slot.
    NotFound(NotFoundError),
}

impl fmt::Display for SetError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate(error) => write!(formatter, "{error}"),
            Self::NotFound(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for SetError {}

impl From<DuplicateElementError> for SetError {
    fn from(error: DuplicateElementError) -> Self {
        Self::Duplicate(error)
    }
}

impl From<NotFoundError> for SetError {
    fn from(error: NotFoundError) -> Self {
        Self::NotFound(error)
    }
}
