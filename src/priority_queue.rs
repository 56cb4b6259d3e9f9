//! Comparator-driven binary heap
//!
//! [`PriorityQueue`] stores its elements in a single `Vec` laid out as an implicit
//! binary tree and keeps the minimum (under its comparator) at index 0.
//!
//! # Time Complexity
//!
//! | Operation         | Complexity |
//! |-------------------|------------|
//! | `add`             | O(log n)   |
//! | `remove`          | O(log n)   |
//! | `peek`            | O(1)       |
//! | `delete` / `take` | O(n)       |
//! | `has`             | O(n)       |
//! | `with_initial`    | O(n)       |
//! | `merge`           | O(n + m)   |
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::natural_max_from([3, 1, 2, 4, 1]);
//! assert_eq!(queue.len(), 5);
//! assert_eq!(queue.drain_sorted().collect::<Vec<_>>(), vec![4, 3, 2, 1, 1]);
//! assert!(queue.is_empty());
//! ```

use crate::order::{Comparator, NaturalMax, NaturalMin};
use crate::sift::{bubble_up, heapify, sink};
use crate::traits::{Collection, HeapError};
use log::{debug, trace};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FusedIterator;
use std::slice;
use std::vec;

/// A binary min-heap ordered by a caller-supplied comparator
///
/// The element at the front is always a minimum under `C`. Elements that the
/// comparator treats as equivalent come out in no particular order.
///
/// Iteration ([`iter`](Self::iter), `for` loops, [`for_each`](Self::for_each))
/// walks the backing array in heap order, which is not sorted order. Use
/// [`drain_sorted`](Self::drain_sorted) or [`into_sorted_vec`](Self::into_sorted_vec)
/// for extraction order.
pub struct PriorityQueue<T, C> {
    /// Array-form heap: children of `i` live at `2i + 1` and `2i + 2`
    elements: Vec<T>,
    compare: C,
}

impl<T, C: Comparator<T>> PriorityQueue<T, C> {
    /// Creates an empty queue ordered by `compare`
    pub fn new(compare: C) -> Self {
        Self {
            elements: Vec::new(),
            compare,
        }
    }

    /// Creates a queue holding `initial`, arranged by a single bottom-up heapify pass
    ///
    /// # Time Complexity
    /// O(n), cheaper than adding the elements one at a time.
    pub fn with_initial<I>(compare: C, initial: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut elements: Vec<T> = initial.into_iter().collect();
        trace!("heapifying {} initial elements", elements.len());
        heapify(&mut elements, &compare);
        Self { elements, compare }
    }

    /// Creates a queue, failing if no comparator is supplied
    ///
    /// # Errors
    /// Returns [`HeapError::InvalidArgument`] when `compare` is `None`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use rust_comparator_heap::{HeapError, NaturalMin, PriorityQueue};
    ///
    /// let missing = PriorityQueue::<i32, NaturalMin>::try_new(None, None::<Vec<i32>>);
    /// assert!(matches!(missing, Err(HeapError::InvalidArgument(_))));
    ///
    /// let queue = PriorityQueue::try_new(Some(NaturalMin), Some(vec![2, 1])).unwrap();
    /// assert_eq!(queue.peek(), Some(&1));
    /// ```
    pub fn try_new<I>(compare: Option<C>, initial: Option<I>) -> Result<Self, HeapError>
    where
        I: IntoIterator<Item = T>,
    {
        let Some(compare) = compare else {
            debug!("refusing to build a priority queue without a comparator");
            return Err(HeapError::InvalidArgument("no comparator function defined"));
        };
        Ok(match initial {
            Some(initial) => Self::with_initial(compare, initial),
            None => Self::new(compare),
        })
    }

    /// Returns the number of elements in the queue
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the queue is empty
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns a minimum element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.elements.first()
    }

    /// Inserts an element, returning the queue so calls can be chained
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn add(&mut self, item: T) -> &mut Self {
        self.elements.push(item);
        let last = self.elements.len() - 1;
        bubble_up(&mut self.elements, &self.compare, last);
        self
    }

    /// Removes and returns a minimum element, or `None` if the queue is empty
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn remove(&mut self) -> Option<T> {
        match self.elements.len() {
            0 => None,
            1 => self.elements.pop(),
            _ => {
                let output = self.elements.swap_remove(0);
                sink(&mut self.elements, &self.compare, 0);
                Some(output)
            }
        }
    }

    /// Removes one element equivalent to `item`, returning true if one was found
    ///
    /// Equivalence is `compare(item, x) == Equal`. When several elements match,
    /// any one of them may be removed.
    ///
    /// # Time Complexity
    /// O(n) to find the element, O(log n) to repair the heap.
    pub fn delete(&mut self, item: &T) -> bool {
        self.take(item).is_some()
    }

    /// Removes one element equivalent to `item` and hands it back
    pub fn take(&mut self, item: &T) -> Option<T> {
        let last = self.elements.len().checked_sub(1)?;
        let found = self.elements[..last]
            .iter()
            .position(|x| self.compare.compare(item, x) == Ordering::Equal);

        match found {
            Some(index) => {
                // The last element fills the hole and may need to travel either way.
                let removed = self.elements.swap_remove(index);
                let rest = bubble_up(&mut self.elements, &self.compare, index);
                sink(&mut self.elements, &self.compare, rest);
                Some(removed)
            }
            // Dropping the last leaf cannot break the heap property.
            None if self.compare.compare(item, &self.elements[last]) == Ordering::Equal => {
                self.elements.pop()
            }
            None => None,
        }
    }

    /// Returns true if an element equivalent to `item` is in the queue
    pub fn has(&self, item: &T) -> bool {
        self.elements
            .iter()
            .any(|x| self.compare.compare(item, x) == Ordering::Equal)
    }

    /// Discards every element, keeping the comparator
    pub fn clear(&mut self) {
        self.elements.clear();
    }

    /// Moves every element of `other` into this queue
    ///
    /// # Time Complexity
    /// O(n + m): the combined storage is heapified once.
    pub fn merge(&mut self, other: Self) {
        if other.is_empty() {
            return;
        }
        trace!(
            "merging {} elements into a queue of {}",
            other.len(),
            self.len()
        );
        self.elements.extend(other.elements);
        heapify(&mut self.elements, &self.compare);
    }

    /// Returns an iterator that removes elements in comparator order
    ///
    /// Elements not yielded stay in the queue when the iterator is dropped.
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, C> {
        DrainSorted { queue: self }
    }

    /// Consumes the queue, returning its elements in comparator order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        self.drain_sorted().collect()
    }
}

impl<T, C> PriorityQueue<T, C> {
    /// Returns an iterator over the elements in heap (array) order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            inner: self.elements.iter(),
        }
    }

    /// Calls `f` with every element and the queue itself, in iteration order
    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&T, &Self),
    {
        for item in self.iter() {
            f(item, self);
        }
    }

    /// Calls `f` with a caller-supplied context, every element and the queue itself
    ///
    /// ```rust
    /// use rust_comparator_heap::PriorityQueue;
    ///
    /// struct Totals {
    ///     sum: i32,
    /// }
    ///
    /// let queue = PriorityQueue::natural_min_from([1, 2, 3]);
    /// let mut totals = Totals { sum: 0 };
    /// queue.for_each_with(&mut totals, |totals, item, _queue| totals.sum += item);
    /// assert_eq!(totals.sum, 6);
    /// ```
    pub fn for_each_with<X, F>(&self, context: &mut X, mut f: F)
    where
        F: FnMut(&mut X, &T, &Self),
    {
        for item in self.iter() {
            f(context, item, self);
        }
    }

    /// Returns the backing storage in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    /// Consumes the queue, returning the backing storage in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }
}

impl<T: PartialOrd> PriorityQueue<T, NaturalMin> {
    /// Creates an empty queue that yields the smallest value first
    pub fn new_natural_min() -> Self {
        Self::new(NaturalMin)
    }

    /// Creates a smallest-first queue seeded from `initial`
    pub fn natural_min_from<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self::with_initial(NaturalMin, initial)
    }
}

impl<T: PartialOrd> PriorityQueue<T, NaturalMax> {
    /// Creates an empty queue that yields the largest value first
    pub fn new_natural_max() -> Self {
        Self::new(NaturalMax)
    }

    /// Creates a largest-first queue seeded from `initial`
    pub fn natural_max_from<I: IntoIterator<Item = T>>(initial: I) -> Self {
        Self::with_initial(NaturalMax, initial)
    }
}

impl<T, C: Comparator<T>> Collection<T> for PriorityQueue<T, C> {
    fn len(&self) -> usize {
        PriorityQueue::len(self)
    }

    fn clear(&mut self) {
        PriorityQueue::clear(self)
    }

    fn has(&self, item: &T) -> bool {
        PriorityQueue::has(self, item)
    }
}

impl<T: fmt::Debug, C> fmt::Debug for PriorityQueue<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityQueue")
            .field("elements", &self.elements)
            .finish_non_exhaustive()
    }
}

impl<T: Clone, C: Clone> Clone for PriorityQueue<T, C> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            compare: self.compare.clone(),
        }
    }
}

impl<T, C: Comparator<T> + Default> Default for PriorityQueue<T, C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

impl<T, C: Comparator<T> + Default> FromIterator<T> for PriorityQueue<T, C> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::with_initial(C::default(), iter)
    }
}

impl<T, C: Comparator<T> + Default> From<Vec<T>> for PriorityQueue<T, C> {
    fn from(elements: Vec<T>) -> Self {
        Self::with_initial(C::default(), elements)
    }
}

impl<T, C: Comparator<T>> Extend<T> for PriorityQueue<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityQueue<T, C> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T, C> IntoIterator for PriorityQueue<T, C> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.elements.into_iter(),
        }
    }
}

/// Borrowing iterator over a [`PriorityQueue`] in heap order
#[derive(Debug)]
pub struct Iter<'a, T> {
    inner: slice::Iter<'a, T>,
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a [`PriorityQueue`] in heap order
#[derive(Debug, Clone)]
pub struct IntoIter<T> {
    inner: vec::IntoIter<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// Iterator returned by [`PriorityQueue::drain_sorted`]
pub struct DrainSorted<'a, T, C: Comparator<T>> {
    queue: &'a mut PriorityQueue<T, C>,
}

impl<T, C: Comparator<T>> Iterator for DrainSorted<'_, T, C> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.queue.remove()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.queue.len();
        (len, Some(len))
    }
}

impl<T, C: Comparator<T>> ExactSizeIterator for DrainSorted<'_, T, C> {}

impl<T, C: Comparator<T>> FusedIterator for DrainSorted<'_, T, C> {}
