//! Property-based tests using proptest
//!
//! These tests generate random sequences of operations and verify
//! that the heap invariants are always maintained.

use proptest::prelude::*;
use rust_comparator_heap::{Comparator, NaturalMax, NaturalMin, PriorityQueue};
use std::cmp::Ordering;

#[derive(Debug, Clone)]
enum Op {
    Add(i32),
    Remove,
    Delete(i32),
    Clear,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (-50i32..50).prop_map(Op::Add),
        3 => Just(Op::Remove),
        3 => (-50i32..50).prop_map(Op::Delete),
        1 => Just(Op::Clear),
    ]
}

/// Checks that no element compares greater than either of its children
fn assert_heap_order<T, C>(queue: &PriorityQueue<T, C>, compare: &C) -> Result<(), TestCaseError>
where
    T: std::fmt::Debug,
    C: Comparator<T>,
{
    let data = queue.as_slice();
    for child in 1..data.len() {
        let parent = (child - 1) / 2;
        prop_assert_ne!(
            compare.compare(&data[parent], &data[child]),
            Ordering::Greater,
            "parent {:?} at {} is greater than child {:?} at {}",
            data[parent],
            parent,
            data[child],
            child
        );
    }
    Ok(())
}

fn sorted_contents<C: Comparator<i32>>(queue: &PriorityQueue<i32, C>) -> Vec<i32> {
    let mut contents: Vec<i32> = queue.iter().copied().collect();
    contents.sort_unstable();
    contents
}

/// Runs `ops` against a queue and a plain `Vec` model side by side
fn run_against_model<C: Comparator<i32> + Copy>(
    compare: C,
    ops: Vec<Op>,
) -> Result<(), TestCaseError> {
    let mut queue = PriorityQueue::new(compare);
    let mut model: Vec<i32> = Vec::new();

    for op in ops {
        match op {
            Op::Add(value) => {
                queue.add(value);
                model.push(value);
            }
            Op::Remove => {
                let removed = queue.remove();
                let expected = model
                    .iter()
                    .copied()
                    .min_by(|a, b| compare.compare(a, b));
                prop_assert_eq!(removed, expected);
                if let Some(value) = removed {
                    let pos = model.iter().position(|&v| v == value).unwrap();
                    model.swap_remove(pos);
                }
            }
            Op::Delete(value) => {
                let present = model.contains(&value);
                prop_assert_eq!(queue.has(&value), present);
                prop_assert_eq!(queue.delete(&value), present);
                if present {
                    let pos = model.iter().position(|&v| v == value).unwrap();
                    model.swap_remove(pos);
                }
            }
            Op::Clear => {
                queue.clear();
                model.clear();
            }
        }

        assert_heap_order(&queue, &compare)?;
        prop_assert_eq!(queue.len(), model.len());
        prop_assert_eq!(queue.is_empty(), model.is_empty());

        let mut expected = model.clone();
        expected.sort_unstable();
        prop_assert_eq!(sorted_contents(&queue), expected);
    }

    Ok(())
}

proptest! {
    #[test]
    fn test_min_ops_match_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        run_against_model(NaturalMin, ops)?;
    }

    #[test]
    fn test_max_ops_match_model(ops in prop::collection::vec(op_strategy(), 0..200)) {
        run_against_model(NaturalMax, ops)?;
    }

    #[test]
    fn test_heapify_establishes_order(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let queue = PriorityQueue::natural_min_from(values.clone());
        assert_heap_order(&queue, &NaturalMin)?;
        prop_assert_eq!(queue.len(), values.len());
    }

    #[test]
    fn test_full_drain_is_sorted(values in prop::collection::vec(-1000i32..1000, 0..300)) {
        let drained = PriorityQueue::natural_min_from(values.clone()).into_sorted_vec();
        let mut expected = values;
        expected.sort();
        prop_assert_eq!(drained, expected);
    }

    #[test]
    fn test_heapify_matches_repeated_add(values in prop::collection::vec(-100i32..100, 0..200)) {
        let heapified = PriorityQueue::natural_max_from(values.clone());
        let mut added = PriorityQueue::new_natural_max();
        for value in &values {
            added.add(*value);
        }
        prop_assert_eq!(heapified.into_sorted_vec(), added.into_sorted_vec());
    }

    #[test]
    fn test_drain_by_key_is_non_decreasing(
        pairs in prop::collection::vec((-20i32..20, any::<u8>()), 0..150)
    ) {
        let by_priority = |a: &(i32, u8), b: &(i32, u8)| a.0.cmp(&b.0);
        let mut queue = PriorityQueue::with_initial(by_priority, pairs.clone());
        let mut last = i32::MIN;
        let mut count = 0;
        while let Some((priority, _)) = queue.remove() {
            prop_assert!(priority >= last, "popped {} after {}", priority, last);
            last = priority;
            count += 1;
        }
        prop_assert_eq!(count, pairs.len());
    }

    #[test]
    fn test_delete_single_present_value(
        values in prop::collection::btree_set(-500i32..500, 1..100),
        pick in any::<prop::sample::Index>()
    ) {
        let values: Vec<i32> = values.into_iter().collect();
        let target = values[pick.index(values.len())];
        let mut queue = PriorityQueue::natural_min_from(values.clone());

        prop_assert!(queue.delete(&target));
        prop_assert!(!queue.has(&target));
        prop_assert_eq!(queue.len(), values.len() - 1);
        assert_heap_order(&queue, &NaturalMin)?;
    }

    #[test]
    fn test_delete_absent_value_changes_nothing(
        values in prop::collection::vec(0i32..100, 0..100),
        absent in 100i32..200
    ) {
        let mut queue = PriorityQueue::natural_min_from(values);
        let before = queue.as_slice().to_vec();
        prop_assert!(!queue.delete(&absent));
        prop_assert_eq!(queue.as_slice(), &before[..]);
    }

    #[test]
    fn test_merge_preserves_contents(
        left in prop::collection::vec(-100i32..100, 0..100),
        right in prop::collection::vec(-100i32..100, 0..100)
    ) {
        let mut merged = PriorityQueue::natural_min_from(left.clone());
        merged.merge(PriorityQueue::natural_min_from(right.clone()));
        assert_heap_order(&merged, &NaturalMin)?;

        let mut expected = left;
        expected.extend(right);
        expected.sort();
        prop_assert_eq!(merged.into_sorted_vec(), expected);
    }
}
