//! Property-based tests for the collections
//!
//! Tests cover:
//! - FIFO order under interleaved appends and front removals
//! - Size accounting
//! - Growth preserving values
//! - Slot reuse without growth in steady queue usage
//! - LIFO order

use std::collections::VecDeque;

use callq_foundation::{DynArray, Queue, Stack, collections::INITIAL_CAPACITY};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Append(u32),
    RemoveFront,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u32>().prop_map(Op::Append),
        2 => Just(Op::RemoveFront),
    ]
}

proptest! {
    #[test]
    fn prop_matches_vecdeque_model(ops in proptest::collection::vec(op_strategy(), 0..200)) {
        let mut array = DynArray::new();
        let mut model = VecDeque::new();

        for op in ops {
            match op {
                Op::Append(value) => {
                    array.push_back(value).unwrap();
                    model.push_back(value);
                }
                Op::RemoveFront => {
                    prop_assert_eq!(array.remove_front().ok(), model.pop_front());
                }
            }
            prop_assert_eq!(array.len(), model.len());
            prop_assert!(array.len() <= array.capacity());
            prop_assert_eq!(array.peek_front().ok(), model.front());
        }

        for (index, expected) in model.iter().enumerate() {
            prop_assert_eq!(array.get(index).unwrap(), expected);
        }
        prop_assert!(array.get(model.len()).is_err());
    }

    #[test]
    fn prop_size_is_appends_minus_removals(n in 0usize..100, m_frac in 0.0f64..=1.0) {
        let m = ((n as f64) * m_frac) as usize;
        let mut queue = Queue::new();
        for value in 0..n {
            queue.enqueue(value).unwrap();
        }
        for expected in 0..m {
            prop_assert_eq!(queue.dequeue(), Some(expected));
        }
        prop_assert_eq!(queue.size(), n - m);
        prop_assert_eq!(queue.front().copied(), if m < n { Some(m) } else { None });
    }

    #[test]
    fn prop_growth_preserves_values(values in proptest::collection::vec(any::<i64>(), 0..64), skip in 0usize..8) {
        let mut array = DynArray::new();
        for value in &values {
            array.push_back(*value).unwrap();
        }
        let skip = skip.min(values.len());
        for _ in 0..skip {
            array.remove_front().unwrap();
        }
        let before: Vec<i64> = array.iter().copied().collect();

        // Force at least one grow-and-compact
        let extra = array.capacity() - array.len() + 1;
        for value in 0..extra {
            array.push_back(value as i64).unwrap();
        }

        for (index, value) in before.iter().enumerate() {
            prop_assert_eq!(array.get(index).unwrap(), value);
        }
        prop_assert_eq!(&before[..], &values[skip..]);
    }

    #[test]
    fn prop_steady_state_reuses_slots(rounds in 1usize..500, depth in 1usize..=INITIAL_CAPACITY) {
        let mut queue = Queue::new();
        let mut next = 0usize;
        for _ in 0..depth {
            queue.enqueue(next).unwrap();
            next += 1;
        }
        for round in 0..rounds {
            prop_assert_eq!(queue.dequeue(), Some(round));
            queue.enqueue(next).unwrap();
            next += 1;
        }
        prop_assert_eq!(queue.size(), depth);

        let mut array = DynArray::new();
        array.try_extend(0..depth).unwrap();
        for round in 0..rounds {
            prop_assert_eq!(array.remove_front().unwrap(), round);
            array.push_back(round + depth).unwrap();
        }
        prop_assert_eq!(array.capacity(), INITIAL_CAPACITY);
    }

    #[test]
    fn prop_stack_pops_in_reverse(values in proptest::collection::vec(any::<u16>(), 0..100)) {
        let mut stack = Stack::new();
        for value in &values {
            stack.push(*value);
        }
        prop_assert_eq!(stack.size(), values.len());

        let popped: Vec<u16> = std::iter::from_fn(|| stack.try_pop()).collect();
        let mut expected = values.clone();
        expected.reverse();
        prop_assert_eq!(popped, expected);
        prop_assert!(stack.is_empty());
    }
}
