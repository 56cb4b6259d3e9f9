//! Heap-repair primitives over an array-form binary heap
//!
//! Index `i` has children `2i + 1` and `2i + 2` and parent `(i - 1) / 2`.
//! Every function returns the index where the moved element came to rest.

use crate::order::Comparator;
use std::cmp::Ordering;

/// Moves the element at `index` towards the root while it strictly precedes its parent
pub(crate) fn bubble_up<T, C>(data: &mut [T], compare: &C, mut index: usize) -> usize
where
    C: Comparator<T> + ?Sized,
{
    while index > 0 {
        let parent = (index - 1) / 2;
        if compare.compare(&data[index], &data[parent]) == Ordering::Less {
            data.swap(index, parent);
            index = parent;
        } else {
            break;
        }
    }
    index
}

/// Moves the element at `index` towards the leaves while a child strictly precedes it
///
/// The right child is chosen only when it strictly precedes the left one, so
/// ties go to the left child.
pub(crate) fn sink<T, C>(data: &mut [T], compare: &C, mut index: usize) -> usize
where
    C: Comparator<T> + ?Sized,
{
    let len = data.len();
    loop {
        let mut child = 2 * index + 1;
        if child >= len {
            break;
        }
        if child + 1 < len && compare.compare(&data[child + 1], &data[child]) == Ordering::Less {
            child += 1;
        }
        if compare.compare(&data[index], &data[child]) != Ordering::Greater {
            break;
        }
        data.swap(index, child);
        index = child;
    }
    index
}

/// Restores the heap property over the whole slice in O(n)
pub(crate) fn heapify<T, C>(data: &mut [T], compare: &C)
where
    C: Comparator<T> + ?Sized,
{
    if data.len() < 2 {
        return;
    }
    let last_parent = (data.len() - 2) / 2;
    for index in (0..=last_parent).rev() {
        sink(data, compare, index);
    }
}

/// Returns true if no element compares greater than either of its children
#[cfg(test)]
pub(crate) fn is_heap<T, C>(data: &[T], compare: &C) -> bool
where
    C: Comparator<T> + ?Sized,
{
    (1..data.len()).all(|child| {
        compare.compare(&data[(child - 1) / 2], &data[child]) != Ordering::Greater
    })
}
