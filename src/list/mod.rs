use std::fmt::{Debug, Formatter};

use log::trace;

use crate::arena::Arena;
use crate::error::{Access, Error, Result};
use crate::list::cursor::{Cursor, CursorMut};
use crate::node::{NodeId, TwoWayNode};
use crate::{Iter, IterMut};

pub mod cursor;
pub mod iterator;

mod algorithms;

pub use algorithms::Dump;

/// The `DoubleLinkedList` is a doubly-linked list whose nodes live in an
/// arena owned by the list and refer to each other by handle.
///
/// Elements are indexed from the **tail** (index 0, the logical front) to the
/// **head** (index `len - 1`, the logical back): [`append`] grows the head end
/// and [`add_to_beginning`] grows the tail end, both in constant time.
/// Indexed operations walk from whichever end is closer to the index, so they
/// take *O*(min(*i*, *n* - *i*)) time.
///
/// ```text
///   index:     0            1                   len - 1
///          ┌────────┐   ┌────────┐          ┌────────┐
///  tail ─→ │  next  │─→ │  next  │─→ ┄┄ ─→  │  next  │─→ ∅
///     ∅ ←─ │  prev  │ ←─│  prev  │ ←─ ┄┄ ←─ │  prev  │ ←─ head
///          │element │   │element │          │element │
///          └────────┘   └────────┘          └────────┘
/// ```
///
/// # Naming Conventions
///
/// - `tail`/`head`: the index-0 end and the index-(`len` - 1) end;
/// - `front`/`back`: used by cursors and iterators for the same two ends,
///   since they read in index order.
///
/// [`append`]: DoubleLinkedList::append
/// [`add_to_beginning`]: DoubleLinkedList::add_to_beginning
pub struct DoubleLinkedList<T> {
    pub(crate) nodes: Arena<TwoWayNode<T>>,
    /// The node at index `len - 1`.
    pub(crate) head: Option<NodeId>,
    /// The node at index 0.
    pub(crate) tail: Option<NodeId>,
}

/// Where a walk to some index starts, how far it goes, and which way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Route {
    start: Option<NodeId>,
    steps: usize,
    forward: bool,
}

// private methods
impl<T> DoubleLinkedList<T> {
    pub(crate) fn node(&self, id: NodeId) -> &TwoWayNode<T> {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut TwoWayNode<T> {
        &mut self.nodes[id]
    }

    /// Walk `steps` links from `start`, following `next` when `forward`,
    /// `previous` otherwise.
    fn walk(&self, start: Option<NodeId>, steps: usize, forward: bool) -> Option<NodeId> {
        let mut current = start;
        for _ in 0..steps {
            let node = self.node(current?);
            current = if forward { node.next } else { node.previous };
        }
        current
    }

    /// Choose where the walk to `target` starts, or `None` when
    /// `target >= len`.
    ///
    /// The walk starts from the tail when `target < len - target`, from the
    /// head otherwise. If `origin` (a known index and its node) is strictly
    /// closer than both ends, the walk starts there instead.
    fn route(&self, origin: Option<(usize, NodeId)>, target: usize) -> Option<Route> {
        let len = self.len();
        if target >= len {
            return None;
        }
        let mut route = if target < len - target {
            Route {
                start: self.tail,
                steps: target,
                forward: true,
            }
        } else {
            Route {
                start: self.head,
                steps: len - 1 - target,
                forward: false,
            }
        };
        if let Some((index, node)) = origin {
            let distance = index.abs_diff(target);
            if distance < route.steps {
                route = Route {
                    start: Some(node),
                    steps: distance,
                    forward: target > index,
                };
            }
        }
        Some(route)
    }

    /// Find the node at `target` along [`route`](Self::route), or `None` when
    /// `target >= len`.
    pub(crate) fn seek(&self, origin: Option<(usize, NodeId)>, target: usize) -> Option<NodeId> {
        let route = self.route(origin, target)?;
        trace!(
            "seek {} of {}: {} step(s) {}",
            target,
            self.len(),
            route.steps,
            if route.forward { "forward" } else { "backward" }
        );
        self.walk(route.start, route.steps, route.forward)
    }

    /// Find the node at `index` with the shortest-direction walk.
    pub(crate) fn locate(&self, index: usize) -> Option<NodeId> {
        self.seek(None, index)
    }

    /// Link a new node between the adjacent nodes `previous` and `next`.
    pub(crate) fn splice_between(&mut self, previous: NodeId, next: NodeId, element: T) -> NodeId {
        debug_assert_eq!(self.node(previous).next, Some(next));
        debug_assert_eq!(self.node(next).previous, Some(previous));
        let node = self
            .nodes
            .insert(TwoWayNode::new(element, Some(previous), Some(next)));
        self.node_mut(previous).next = Some(node);
        self.node_mut(next).previous = Some(node);
        trace!("spliced {:?} between {:?} and {:?}", node, previous, next);
        node
    }

    /// Unlink the node `id` from its neighbors, release its slot, and return
    /// its element. The list ends are updated when `id` is one of them.
    pub(crate) fn detach(&mut self, id: NodeId) -> T {
        let node = self.nodes.remove(id);
        match node.previous {
            Some(previous) => self.node_mut(previous).next = node.next,
            None => self.tail = node.next,
        }
        match node.next {
            Some(next) => self.node_mut(next).previous = node.previous,
            None => self.head = node.previous,
        }
        node.into_element()
    }
}

impl<T> DoubleLinkedList<T> {
    /// Creates an empty `DoubleLinkedList`.
    ///
    /// # Examples
    /// ```
    /// use linked_collections::DoubleLinkedList;
    /// let list: DoubleLinkedList<u32> = DoubleLinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty `DoubleLinkedList` with room for `capacity` nodes
    /// before it reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes the list can hold without reallocating.
    pub fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    /// Returns the number of elements in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::new();
    /// list.append(2);
    /// assert_eq!(list.len(), 1);
    /// list.add_to_beginning(1);
    /// assert_eq!(list.len(), 2);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the list holds no elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tail.is_none()
    }

    /// Removes all elements from the list, in index order.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    pub fn clear(&mut self) {
        while let Some(tail) = self.tail {
            self.detach(tail);
        }
        self.nodes.clear();
    }

    /// Adds an element at the head end (the logical back) of the list.
    ///
    /// On an empty list the new node becomes both head and tail.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::new();
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.head(), Ok(&2));
    /// assert_eq!(list.tail(), Ok(&1));
    /// ```
    pub fn append(&mut self, element: T) {
        let node = self.nodes.insert(TwoWayNode::new(element, self.head, None));
        match self.head {
            Some(head) => self.node_mut(head).next = Some(node),
            None => self.tail = Some(node),
        }
        self.head = Some(node);
    }

    /// Same as [`append`](DoubleLinkedList::append).
    #[inline]
    pub fn add(&mut self, element: T) {
        self.append(element)
    }

    /// Adds an element at the tail end (the logical front, index 0) of the
    /// list.
    ///
    /// On an empty list this behaves exactly like
    /// [`append`](DoubleLinkedList::append).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::new();
    /// list.add_to_beginning(2);
    /// list.add_to_beginning(1);
    /// assert_eq!(list.get(0), Ok(&1));
    /// assert_eq!(list.get(1), Ok(&2));
    /// ```
    pub fn add_to_beginning(&mut self, element: T) {
        let node = self.nodes.insert(TwoWayNode::new(element, None, self.tail));
        match self.tail {
            Some(tail) => self.node_mut(tail).previous = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Inserts `element` so that it becomes the element at `index`.
    ///
    /// `index == 0` adds to the beginning and `index == len` appends;
    /// any other index walks to the node currently there (from the closer
    /// end) and splices the new node in front of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len`. The list is left
    /// unchanged.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::from([1, 2, 3]);
    /// list.insert(1, 99).unwrap();
    /// list.insert(4, 100).unwrap();
    /// assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 99, 2, 3, 100]);
    ///
    /// assert!(list.insert(9, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<()> {
        let len = self.len();
        if index > len {
            return Err(Error::out_of_bounds(index, 0..len + 1, Access::Insert));
        }
        let current = self.locate(index);
        CursorMut::new(self, current, index).insert(element);
        Ok(())
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let list = DoubleLinkedList::from(['a', 'b', 'c']);
    /// assert_eq!(list.get(0), Ok(&'a'));
    /// assert_eq!(list.get(2), Ok(&'c'));
    /// assert!(list.get(3).is_err());
    /// ```
    pub fn get(&self, index: usize) -> Result<&T> {
        match self.locate(index) {
            Some(id) => Ok(&self.node(id).element),
            None => Err(Error::out_of_bounds(index, 0..self.len(), Access::Get)),
        }
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        match self.locate(index) {
            Some(id) => Ok(&mut self.node_mut(id).element),
            None => Err(Error::out_of_bounds(index, 0..self.len(), Access::Get)),
        }
    }

    /// Returns the element at the tail end (index 0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    pub fn tail(&self) -> Result<&T> {
        match self.tail {
            Some(tail) => Ok(&self.node(tail).element),
            None => Err(Error::empty("tail")),
        }
    }

    /// Mutable counterpart of [`tail`](DoubleLinkedList::tail).
    pub fn tail_mut(&mut self) -> Result<&mut T> {
        match self.tail {
            Some(tail) => Ok(&mut self.node_mut(tail).element),
            None => Err(Error::empty("tail_mut")),
        }
    }

    /// Returns the element at the head end (index `len - 1`).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::{DoubleLinkedList, Error};
    ///
    /// let mut list = DoubleLinkedList::new();
    /// assert_eq!(list.head(), Err(Error::Empty));
    /// list.append(1);
    /// list.append(2);
    /// assert_eq!(list.head(), Ok(&2));
    /// ```
    pub fn head(&self) -> Result<&T> {
        match self.head {
            Some(head) => Ok(&self.node(head).element),
            None => Err(Error::empty("head")),
        }
    }

    /// Mutable counterpart of [`head`](DoubleLinkedList::head).
    pub fn head_mut(&mut self) -> Result<&mut T> {
        match self.head {
            Some(head) => Ok(&mut self.node_mut(head).element),
            None => Err(Error::empty("head_mut")),
        }
    }

    /// Removes the element at the tail end (index 0) and returns it.
    ///
    /// Removing the last remaining element leaves both ends empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn delete_tail(&mut self) -> Result<T> {
        match self.tail {
            Some(tail) => Ok(self.detach(tail)),
            None => Err(Error::empty("delete_tail")),
        }
    }

    /// Removes the element at the head end (index `len - 1`) and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the list is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::{DoubleLinkedList, Error};
    ///
    /// let mut list = DoubleLinkedList::from([1, 2]);
    /// assert_eq!(list.delete_head(), Ok(2));
    /// assert_eq!(list.delete_head(), Ok(1));
    /// assert_eq!(list.delete_head(), Err(Error::Empty));
    /// ```
    pub fn delete_head(&mut self) -> Result<T> {
        match self.head {
            Some(head) => Ok(self.detach(head)),
            None => Err(Error::empty("delete_head")),
        }
    }

    /// Removes the element at `index` and returns it.
    ///
    /// Index 0 and index `len - 1` are removed through
    /// [`delete_tail`](DoubleLinkedList::delete_tail) and
    /// [`delete_head`](DoubleLinkedList::delete_head); any other index is
    /// reached from the closer end and spliced out.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `index >= len`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(min(*i*, *n* - *i*)) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::from([3, 2, 1]);
    /// assert_eq!(list.remove(1), Ok(2));
    /// assert_eq!(list.remove(0), Ok(3));
    /// assert_eq!(list.remove(0), Ok(1));
    /// assert!(list.remove(0).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T> {
        let len = self.len();
        let out_of_bounds = || Error::out_of_bounds(index, 0..len, Access::Remove);
        if index >= len {
            return Err(out_of_bounds());
        }
        if index == 0 {
            return self.delete_tail();
        }
        if index == len - 1 {
            return self.delete_head();
        }
        let current = self.locate(index);
        CursorMut::new(self, current, index)
            .remove()
            .ok_or_else(out_of_bounds)
    }

    /// Provides a cursor at the element with given index.
    ///
    /// By convention, the cursor is past the end (at no element) if
    /// `at == len`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let list = DoubleLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.cursor(1).unwrap().current(), Some(&2));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// assert!(list.cursor(4).is_err());
    /// ```
    pub fn cursor(&self, at: usize) -> Result<Cursor<'_, T>> {
        let len = self.len();
        if at > len {
            return Err(Error::out_of_bounds(at, 0..len + 1, Access::Cursor));
        }
        Ok(Cursor::new(self, self.locate(at), at))
    }

    /// Provides a cursor at the tail (index 0).
    ///
    /// The cursor is past the end if the list is empty.
    pub fn cursor_front(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.tail, 0)
    }

    /// Provides a cursor at the head (index `len - 1`).
    ///
    /// The cursor is past the end if the list is empty.
    pub fn cursor_back(&self) -> Cursor<'_, T> {
        Cursor::new(self, self.head, self.len().saturating_sub(1))
    }

    /// Provides a cursor with editing operations at the element with given
    /// index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `at > len`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// if let Some(x) = cursor.current_mut() {
    ///     *x *= 5;
    /// }
    /// assert_eq!(cursor.current(), Some(&10));
    /// ```
    pub fn cursor_mut(&mut self, at: usize) -> Result<CursorMut<'_, T>> {
        let len = self.len();
        if at > len {
            return Err(Error::out_of_bounds(at, 0..len + 1, Access::Cursor));
        }
        let current = self.locate(at);
        Ok(CursorMut::new(self, current, at))
    }

    /// Provides a cursor with editing operations at the tail (index 0).
    pub fn cursor_front_mut(&mut self) -> CursorMut<'_, T> {
        let tail = self.tail;
        CursorMut::new(self, tail, 0)
    }

    /// Provides a cursor with editing operations at the head
    /// (index `len - 1`).
    pub fn cursor_back_mut(&mut self) -> CursorMut<'_, T> {
        let (head, index) = (self.head, self.len().saturating_sub(1));
        CursorMut::new(self, head, index)
    }

    /// Provides an iterator from the tail to the head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::new();
    ///
    /// list.append(0);
    /// list.append(1);
    /// list.add_to_beginning(2);
    ///
    /// let mut iter = list.iter();
    /// assert_eq!(iter.next(), Some(&2));
    /// assert_eq!(iter.next(), Some(&0));
    /// assert_eq!(iter.next(), Some(&1));
    /// assert_eq!(iter.next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Provides an iterator with mutable references, from the tail to the
    /// head.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::from([0, 1, 2]);
    /// for element in list.iter_mut() {
    ///     *element += 10;
    /// }
    /// assert_eq!(list, DoubleLinkedList::from([10, 11, 12]));
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(self)
    }
}

impl<T: Debug> Debug for DoubleLinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for DoubleLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DoubleLinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}
