//! Comparator-Driven Binary Heap for Rust
//!
//! This crate provides [`PriorityQueue`], an array-backed binary min-heap whose
//! ordering is defined by a comparison function supplied at construction rather
//! than by the element type's `Ord` implementation.
//!
//! # Features
//!
//! - **Any ordering**: closures, fn pointers and the [`NaturalMin`] / [`NaturalMax`]
//!   comparators all plug in through the [`Comparator`] trait
//! - **Linear-time construction**: an initial collection is heapified bottom-up in O(n)
//! - **Targeted removal**: [`PriorityQueue::delete`] removes any element equivalent
//!   to a probe value, not just the minimum
//! - **Chaining**: [`PriorityQueue::add`] returns the queue so inserts can be chained
//!
//! # Example
//!
//! ```rust
//! use rust_comparator_heap::PriorityQueue;
//!
//! let mut queue = PriorityQueue::new_natural_min();
//! queue.add(3).add(1).add(2);
//!
//! assert_eq!(queue.peek(), Some(&1));
//! assert_eq!(queue.remove(), Some(1));
//! assert!(queue.delete(&3));
//! assert_eq!(queue.remove(), Some(2));
//! assert_eq!(queue.remove(), None);
//! ```
//!
//! # Cargo features
//!
//! - `serde`: `Serialize` for every queue and `Deserialize` for queues whose
//!   comparator implements `Default`.

pub mod order;
pub mod priority_queue;
#[cfg(feature = "serde")]
mod serde_impl;
mod sift;
pub mod traits;

pub use order::{by_key, Comparator, NaturalMax, NaturalMin};
pub use priority_queue::PriorityQueue;
pub use traits::{Collection, HeapError};
