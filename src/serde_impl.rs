//! `serde` support, enabled by the `serde` feature
//!
//! A queue serializes as a plain sequence in heap order. Deserializing needs a
//! comparator, so it is only offered when `C: Default`; the loaded sequence is
//! heapified rather than trusted.

use crate::order::Comparator;
use crate::priority_queue::PriorityQueue;
use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

impl<T: Serialize, C> Serialize for PriorityQueue<T, C> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.as_slice())
    }
}

impl<'de, T, C> Deserialize<'de> for PriorityQueue<T, C>
where
    T: Deserialize<'de>,
    C: Comparator<T> + Default,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let elements = Vec::<T>::deserialize(deserializer)?;
        Ok(Self::with_initial(C::default(), elements))
    }
}
