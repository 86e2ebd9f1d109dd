//! Stack invariants
//!
//! - size always equals pushes minus successful pops
//! - pop returns elements in reverse push order
//! - empty pop/peek is an error, never a default

use kata::{Error, Stack};
use proptest::prelude::*;

#[test]
fn test_push_pop_sequence() {
    let mut stack = Stack::new();
    for item in ["a", "b", "c"] {
        stack.push(item);
    }

    assert_eq!(stack.size(), 3);
    assert_eq!(stack.pop(), Ok("c"));
    assert_eq!(stack.size(), 2);
    assert_eq!(stack.peek(), Ok(&"b"));
}

#[test]
fn test_empty_access_reports_empty_stack() {
    let mut stack: Stack<String> = Stack::new();
    assert_eq!(stack.pop().unwrap_err().to_string(), "Empty stack");
    assert_eq!(stack.peek().unwrap_err(), Error::EmptyStack);
}

#[test]
fn test_pop_after_draining_is_error() {
    let mut stack = Stack::new();
    stack.push(1);
    stack.pop().unwrap();

    assert!(stack.is_empty());
    assert!(stack.pop().is_err());
}

proptest! {
    #[test]
    fn prop_size_tracks_pushes(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut stack = Stack::new();
        for item in &items {
            stack.push(*item);
        }
        prop_assert_eq!(stack.size(), items.len());
        prop_assert_eq!(stack.is_empty(), items.is_empty());
    }

    #[test]
    fn prop_pop_reverses_push_order(items in prop::collection::vec(any::<i32>(), 1..64)) {
        let mut stack: Stack<i32> = items.iter().copied().collect();
        let mut popped = Vec::new();
        while let Ok(item) = stack.pop() {
            popped.push(item);
        }
        popped.reverse();
        prop_assert_eq!(popped, items);
        prop_assert!(stack.peek().is_err());
    }

    #[test]
    fn prop_pop_decrements_size(items in prop::collection::vec(any::<u8>(), 1..64)) {
        let mut stack: Stack<u8> = items.iter().copied().collect();
        let before = stack.size();
        let top = stack.pop().unwrap();
        prop_assert_eq!(Some(&top), items.last());
        prop_assert_eq!(stack.size(), before - 1);
    }

    #[test]
    fn prop_clear_always_empties(items in prop::collection::vec(any::<i64>(), 0..64)) {
        let mut stack: Stack<i64> = items.into_iter().collect();
        stack.clear();
        prop_assert!(stack.is_empty());
        prop_assert_eq!(stack.size(), 0);
    }
}
