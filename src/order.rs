//! Comparison functions that drive heap order
//!
//! A [`Comparator`] is a three-way pre-order over `T`: `Less` when the first
//! argument must come out of the heap before the second, `Equal` when the two are
//! interchangeable, `Greater` otherwise. Any `Fn(&T, &T) -> Ordering` is a
//! comparator, so closures and fn pointers can be passed directly.

use std::cmp::Ordering;

/// A three-way ordering over `T`
///
/// Implementations must be pure and deterministic. A comparator that answers
/// inconsistently leaves the heap in an unspecified (but memory-safe) order.
pub trait Comparator<T> {
    /// Compares `a` against `b`
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Natural ascending order: smallest value first
///
/// Values that are neither less nor greater than each other (including
/// incomparable pairs such as `NaN`) are treated as equivalent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalMin;

/// Natural descending order: largest value first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaturalMax;

#[inline]
fn natural<T: PartialOrd>(a: &T, b: &T) -> Ordering {
    if a < b {
        Ordering::Less
    } else if a > b {
        Ordering::Greater
    } else {
        Ordering::Equal
    }
}

impl<T: PartialOrd> Comparator<T> for NaturalMin {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        natural(a, b)
    }
}

impl<T: PartialOrd> Comparator<T> for NaturalMax {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        natural(a, b).reverse()
    }
}

/// Builds a comparator that orders elements by an extracted key
///
/// # Example
///
/// ```rust
/// use rust_comparator_heap::{by_key, PriorityQueue};
///
/// struct Job {
///     val: u32,
/// }
///
/// let mut queue = PriorityQueue::new(by_key(|job: &Job| job.val));
/// queue.add(Job { val: 4 }).add(Job { val: 1 });
/// assert_eq!(queue.remove().map(|job| job.val), Some(1));
/// ```
pub fn by_key<T, K, F>(key: F) -> impl Fn(&T, &T) -> Ordering
where
    K: Ord,
    F: Fn(&T) -> K,
{
    move |a: &T, b: &T| key(a).cmp(&key(b))
}
