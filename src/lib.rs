//! This crate provides a doubly-linked list with shortest-direction indexing,
//! together with a linked stack and a linked queue.
//!
//! The [`DoubleLinkedList`] adds and removes elements at either end in constant
//! time. Accessing, inserting or removing at an index walks from whichever end
//! is closer, so it takes *O*(min(*i*, *n* - *i*)) time.
//!
//! Here is a quick example showing how the list works.
//!
//! ```
//! use linked_collections::DoubleLinkedList;
//!
//! let mut list = DoubleLinkedList::from([1, 2, 3]);
//!
//! list.insert(1, 99).unwrap(); // becomes [1, 99, 2, 3]
//! assert_eq!(list.get(1), Ok(&99));
//!
//! list.add_to_beginning(0); // becomes [0, 1, 99, 2, 3]
//! assert_eq!(list.tail(), Ok(&0));
//! assert_eq!(list.head(), Ok(&3));
//!
//! assert_eq!(list.remove(2), Ok(99));
//! assert_eq!(list, DoubleLinkedList::from([0, 1, 2, 3]));
//! ```
//!
//! # Memory Layout
//!
//! Every collection owns an arena of node slots. Nodes refer to their
//! neighbors by slot handle, never by pointer:
//! ```text
//!                  slot 0         slot 1          slot 2
//!               ┌─────────┐    ┌─────────┐    ┌─────────┐
//!  arena        │ prev: ∅ │    │ prev: 2 │    │ prev: 0 │
//!               │ next: 2 │    │ next: ∅ │    │ next: 1 │    (slot 3: free)
//!               │    a    │    │    c    │    │    b    │
//!               └─────────┘    └─────────┘    └─────────┘
//!               tail = 0, head = 1          reads as [a, b, c]
//! ```
//! Removing an element puts its slot on a free list, and the next insertion
//! takes it back, so a list whose length stays the same stops allocating.
//!
//! Note the naming of the two ends: the **tail** is the element at index 0
//! and the **head** is the element at index `len - 1`. [`append`] grows the
//! head end and [`add_to_beginning`] grows the tail end.
//!
//! # Iteration
//!
//! Iterating over a list is by the [`Iter`] and [`IterMut`] iterators. These
//! are double-ended iterators that go from the tail to the head.
//!
//! ## Examples
//!
//! ```
//! use linked_collections::DoubleLinkedList;
//!
//! let mut list = DoubleLinkedList::from_iter([1, 2, 3]);
//! let mut iter = list.iter();
//! assert_eq!(iter.next(), Some(&1));
//! assert_eq!(iter.next_back(), Some(&3));
//! assert_eq!(iter.next(), Some(&2));
//! assert_eq!(iter.next(), None);
//!
//! list.iter_mut().for_each(|item| *item *= 2);
//! assert_eq!(Vec::from_iter(list), vec![2, 4, 6]);
//! ```
//!
//! # Cursors
//!
//! The cursors [`Cursor`] and [`CursorMut`] hold a position in the list and
//! can move forward or backward over it. In a list with length *n*, there are
//! *n* + 1 valid locations for the cursor, indexed by 0, 1, ..., *n*, where
//! *n* is past the end. [`CursorMut`] can also [`insert`] before and
//! [`remove`] at its position in constant time.
//!
//! ```
//! use linked_collections::DoubleLinkedList;
//!
//! let mut list = DoubleLinkedList::from_iter(0..6);
//! let mut cursor = list.cursor_mut(2).unwrap();
//!
//! assert_eq!(cursor.remove(), Some(2)); // becomes [0, 1, 3, 4, 5], points to 3
//! cursor.insert(7); // becomes [0, 1, 7, 3, 4, 5], still points to 3
//! assert!(cursor.seek_to(5).is_ok());
//! assert_eq!(cursor.current(), Some(&5));
//!
//! assert_eq!(Vec::from_iter(list), vec![0, 1, 7, 3, 4, 5]);
//! ```
//!
//! # Algorithms
//!
//! The list carries a few whole-list operations taking closures:
//! [`for_each`], [`reverse_for_each`], [`map`], [`filter`], [`remove_if`] and
//! [`remove_all`].
//!
//! ```
//! use linked_collections::DoubleLinkedList;
//!
//! let mut list = DoubleLinkedList::from_iter(1..=6);
//! assert_eq!(list.map(|x| x * x), DoubleLinkedList::from([1, 4, 9, 16, 25, 36]));
//! assert_eq!(list.remove_all(|x| x % 2 == 0), 3);
//! assert_eq!(list.find(&5), Some(2));
//! ```
//!
//! # Stack and Queue
//!
//! [`Stack`] and [`Queue`] are singly linked. Popping an empty stack yields
//! `None`, while dequeuing an empty queue is an [`Error::Empty`].
//!
//! ```
//! use linked_collections::{Error, Queue, Stack};
//!
//! let mut stack = Stack::from_iter([1, 2]);
//! assert_eq!(stack.pop(), Some(2));
//!
//! let mut queue = Queue::from_iter([1, 2]);
//! assert_eq!(queue.dequeue(), Ok(1));
//! assert_eq!(queue.dequeue(), Ok(2));
//! assert_eq!(queue.dequeue(), Err(Error::Empty));
//! ```
//!
//! [`append`]: crate::DoubleLinkedList::append
//! [`add_to_beginning`]: crate::DoubleLinkedList::add_to_beginning
//! [`Cursor`]: crate::list::cursor::Cursor
//! [`CursorMut`]: crate::list::cursor::CursorMut
//! [`insert`]: crate::list::cursor::CursorMut::insert
//! [`remove`]: crate::list::cursor::CursorMut::remove
//! [`for_each`]: crate::DoubleLinkedList::for_each
//! [`reverse_for_each`]: crate::DoubleLinkedList::reverse_for_each
//! [`map`]: crate::DoubleLinkedList::map
//! [`filter`]: crate::DoubleLinkedList::filter
//! [`remove_if`]: crate::DoubleLinkedList::remove_if
//! [`remove_all`]: crate::DoubleLinkedList::remove_all

#[doc(inline)]
pub use error::{Access, Error, Result};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter, IterMut};
#[doc(inline)]
pub use list::DoubleLinkedList;
#[doc(inline)]
pub use queue::Queue;
#[doc(inline)]
pub use stack::Stack;

pub mod list;
pub mod queue;
pub mod stack;

mod arena;
mod error;
mod node;
