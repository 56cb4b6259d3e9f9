//! Common traits shared by the toolkit's containers
//!
//! The priority queue follows the same conventions as the toolkit's stack,
//! queue, default map and set: a size query, a way to empty the container and a
//! membership test. [`Collection`] names those conventions so code can be
//! written against any of them.

use std::fmt;

/// Error type for heap construction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// A required argument was missing or unusable
    InvalidArgument(&'static str),
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::InvalidArgument(reason) => {
                write!(f, "PriorityQueue: {}", reason)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// Conventions shared by every container in the toolkit
///
/// # Example
///
/// ```rust
/// use rust_comparator_heap::{Collection, PriorityQueue};
///
/// fn drop_all<T, C: Collection<T>>(container: &mut C) -> usize {
///     let dropped = container.len();
///     container.clear();
///     dropped
/// }
///
/// let mut queue = PriorityQueue::natural_min_from([3, 1, 2]);
/// assert!(queue.has(&2));
/// assert_eq!(drop_all(&mut queue), 3);
/// assert!(queue.is_empty());
/// ```
pub trait Collection<T> {
    /// Returns the number of elements held
    fn len(&self) -> usize;

    /// Returns true if nothing is held
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Discards every element
    fn clear(&mut self);

    /// Returns true if an element equivalent to `item` is held
    fn has(&self, item: &T) -> bool;
}
