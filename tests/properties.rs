use std::collections::VecDeque;

use linked_collections::{DoubleLinkedList, Error, Queue, Stack};
use proptest::prelude::*;

#[derive(Clone, Debug)]
enum Op {
    Append(i32),
    AddToBeginning(i32),
    Insert(usize, i32),
    Remove(usize),
    DeleteHead,
    DeleteTail,
    RemoveValue(i32),
}

fn op() -> impl Strategy<Value = Op> {
    // Indices overshoot the list on purpose so that rejections are covered.
    prop_oneof![
        2 => any::<i32>().prop_map(Op::Append),
        2 => any::<i32>().prop_map(Op::AddToBeginning),
        3 => (0..24usize, any::<i32>()).prop_map(|(i, e)| Op::Insert(i, e)),
        2 => (0..24usize).prop_map(Op::Remove),
        1 => Just(Op::DeleteHead),
        1 => Just(Op::DeleteTail),
        1 => (-4..4i32).prop_map(Op::RemoveValue),
    ]
}

fn contents<T: Clone>(list: &DoubleLinkedList<T>) -> Vec<T> {
    list.iter().cloned().collect()
}

proptest! {
    #[test]
    fn append_keeps_order(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list = DoubleLinkedList::new();
        for &item in &items {
            list.append(item);
        }
        prop_assert_eq!(list.len(), items.len());
        prop_assert_eq!(contents(&list), items.clone());
        for (i, item) in items.iter().enumerate() {
            prop_assert_eq!(list.get(i), Ok(item));
        }
        prop_assert!(list.get(items.len()).is_err());
    }

    #[test]
    fn add_to_beginning_reverses(items in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut list = DoubleLinkedList::new();
        for &item in &items {
            list.add_to_beginning(item);
        }
        let reversed: Vec<_> = items.iter().rev().copied().collect();
        prop_assert_eq!(contents(&list), reversed);
    }

    #[test]
    fn insert_then_remove_restores(
        items in prop::collection::vec(any::<i32>(), 0..32),
        at in any::<prop::sample::Index>(),
        element in any::<i32>(),
    ) {
        let mut list = DoubleLinkedList::from_iter(items.iter().copied());
        let at = at.index(items.len() + 1);
        list.insert(at, element).unwrap();
        prop_assert_eq!(list.get(at), Ok(&element));
        prop_assert_eq!(list.len(), items.len() + 1);
        prop_assert_eq!(list.remove(at), Ok(element));
        prop_assert_eq!(contents(&list), items);
    }

    #[test]
    fn map_and_filter_agree_with_vec(items in prop::collection::vec(-100..100i32, 0..48)) {
        let list = DoubleLinkedList::from_iter(items.iter().copied());
        let mapped = list.map(|x| x * 3 - 1);
        prop_assert_eq!(
            contents(&mapped),
            items.iter().map(|x| x * 3 - 1).collect::<Vec<_>>()
        );
        let kept = list.filter(|x| x % 3 == 0);
        prop_assert_eq!(
            contents(&kept),
            items.iter().copied().filter(|x| x % 3 == 0).collect::<Vec<_>>()
        );
        prop_assert_eq!(contents(&list), items);
    }

    #[test]
    fn remove_all_keeps_survivors(items in prop::collection::vec(0..10u8, 0..48)) {
        let mut list = DoubleLinkedList::from_iter(items.iter().copied());
        let removed = list.remove_all(|x| x % 2 == 1);
        let survivors: Vec<_> = items.iter().copied().filter(|x| x % 2 == 0).collect();
        prop_assert_eq!(removed, items.len() - survivors.len());
        prop_assert_eq!(contents(&list), survivors);
        prop_assert!(!list.contains(&1));
    }

    #[test]
    fn list_matches_model(ops in prop::collection::vec(op(), 0..200)) {
        let mut list = DoubleLinkedList::new();
        let mut model: Vec<i32> = Vec::new();
        for op in ops {
            match op {
                Op::Append(e) => {
                    list.append(e);
                    model.push(e);
                }
                Op::AddToBeginning(e) => {
                    list.add_to_beginning(e);
                    model.insert(0, e);
                }
                Op::Insert(i, e) => {
                    let result = list.insert(i, e);
                    if i <= model.len() {
                        prop_assert!(result.is_ok());
                        model.insert(i, e);
                    } else {
                        let is_out_of_bounds = matches!(result, Err(Error::OutOfBounds { .. }));
                        prop_assert!(is_out_of_bounds);
                    }
                }
                Op::Remove(i) => {
                    let result = list.remove(i);
                    if i < model.len() {
                        prop_assert_eq!(result, Ok(model.remove(i)));
                    } else {
                        let is_out_of_bounds = matches!(result, Err(Error::OutOfBounds { .. }));
                        prop_assert!(is_out_of_bounds);
                    }
                }
                Op::DeleteHead => {
                    prop_assert_eq!(list.delete_head(), model.pop().ok_or(Error::Empty));
                }
                Op::DeleteTail => {
                    let expected = if model.is_empty() {
                        Err(Error::Empty)
                    } else {
                        Ok(model.remove(0))
                    };
                    prop_assert_eq!(list.delete_tail(), expected);
                }
                Op::RemoveValue(e) => {
                    let expected = match model.iter().position(|x| *x == e) {
                        Some(i) => Ok(model.remove(i)),
                        None => Err(Error::NotFound),
                    };
                    prop_assert_eq!(list.remove_value(&e), expected);
                }
            }
            prop_assert_eq!(list.len(), model.len());
            prop_assert_eq!(list.is_empty(), model.is_empty());
            prop_assert_eq!(list.tail().ok(), model.first());
            prop_assert_eq!(list.head().ok(), model.last());
        }
        prop_assert_eq!(contents(&list), model.clone());
        let backward: Vec<_> = list.iter().rev().copied().collect();
        prop_assert_eq!(backward, model.iter().rev().copied().collect::<Vec<_>>());
    }

    #[test]
    fn stack_is_lifo(ops in prop::collection::vec(prop::option::of(any::<u16>()), 0..100)) {
        let mut stack = Stack::new();
        let mut model = Vec::new();
        for op in ops {
            match op {
                Some(e) => {
                    stack.push(e);
                    model.push(e);
                }
                None => {
                    prop_assert_eq!(stack.pop(), model.pop());
                }
            }
            prop_assert_eq!(stack.peek(), model.last());
            prop_assert_eq!(stack.len(), model.len());
        }
    }

    #[test]
    fn queue_is_fifo(ops in prop::collection::vec(prop::option::of(any::<u16>()), 0..100)) {
        let mut queue = Queue::new();
        let mut model = VecDeque::new();
        for op in ops {
            match op {
                Some(e) => {
                    queue.enqueue(e);
                    model.push_back(e);
                }
                None => {
                    prop_assert_eq!(queue.dequeue(), model.pop_front().ok_or(Error::Empty));
                }
            }
            prop_assert_eq!(queue.head().ok(), model.front());
            prop_assert_eq!(queue.tail().ok(), model.back());
            prop_assert_eq!(queue.len(), model.len());
        }
    }
}
