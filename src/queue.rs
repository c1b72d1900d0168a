use std::fmt;

use crate::arena::Arena;
use crate::error::{Error, Result};
use crate::node::{NodeId, OneWayNode};

/// A first-in, first-out queue over a chain of one-way nodes.
///
/// Elements are enqueued at the tail and dequeued from the head, each in
/// constant time. Unlike [`Stack`](crate::Stack), reading or removing from
/// an empty queue is an error.
///
/// # Examples
///
/// ```
/// use linked_collections::{Error, Queue};
///
/// let mut queue = Queue::new();
/// queue.enqueue(1);
/// queue.enqueue(2);
/// assert_eq!(queue.dequeue(), Ok(1));
/// assert_eq!(queue.dequeue(), Ok(2));
/// assert_eq!(queue.dequeue(), Err(Error::Empty));
/// ```
pub struct Queue<T> {
    nodes: Arena<OneWayNode<T>>,
    /// The oldest element, next to be dequeued.
    head: Option<NodeId>,
    /// The newest element.
    tail: Option<NodeId>,
}

impl<T> Queue<T> {
    /// Creates an empty `Queue`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty `Queue` with room for `capacity` nodes before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of elements in the queue.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the queue holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Adds an element at the tail of the queue.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn enqueue(&mut self, element: T) {
        let node = self.nodes.insert(OneWayNode::new(element, None));
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(node),
            None => self.head = Some(node),
        }
        self.tail = Some(node);
    }

    /// Removes the element at the head of the queue and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue is empty.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn dequeue(&mut self) -> Result<T> {
        let head = self.head.ok_or_else(|| Error::empty("dequeue"))?;
        let node = self.nodes.remove(head);
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        Ok(node.into_element())
    }

    /// Returns the element at the head, the next one to be dequeued.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue is empty.
    pub fn head(&self) -> Result<&T> {
        let head = self.head.ok_or_else(|| Error::empty("head"))?;
        Ok(&self.nodes[head].element)
    }

    /// Returns the element at the tail, the most recently enqueued one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Empty`] if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Queue;
    ///
    /// let mut queue = Queue::new();
    /// assert!(queue.tail().is_err());
    /// queue.enqueue('a');
    /// queue.enqueue('b');
    /// assert_eq!(queue.head(), Ok(&'a'));
    /// assert_eq!(queue.tail(), Ok(&'b'));
    /// ```
    pub fn tail(&self) -> Result<&T> {
        let tail = self.tail.ok_or_else(|| Error::empty("tail"))?;
        Ok(&self.nodes[tail].element)
    }

    /// Dequeues every element, head first.
    pub fn clear(&mut self) {
        while let Some(head) = self.head {
            self.head = self.nodes.remove(head).next;
        }
        self.tail = None;
        self.nodes.clear();
    }

    /// Provides an iterator from the head of the queue to the tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            len: self.len(),
        }
    }

    /// Returns a [`Display`](fmt::Display) adapter that renders a
    /// `Size: <n>` line followed by a `Queue:` line listing the elements
    /// from head to tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Queue;
    ///
    /// let queue = Queue::from_iter([1, 2, 3]);
    /// assert_eq!(queue.dump().to_string(), "Size: 3\nQueue: 1 2 3\n");
    /// ```
    pub fn dump(&self) -> Dump<'_, T> {
        Dump { queue: self }
    }

    /// Prints [`dump`](Queue::dump) to the standard output, preceded by a
    /// blank line.
    pub fn print_queue(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self.report());
    }

    fn report(&self) -> String
    where
        T: fmt::Display,
    {
        format!("\n{}", self.dump())
    }
}

/// An iterator over the elements of a [`Queue`], head first.
pub struct Iter<'a, T> {
    nodes: &'a Arena<OneWayNode<T>>,
    current: Option<NodeId>,
    len: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let nodes = self.nodes;
        let node = &nodes[self.current?];
        self.current = node.next;
        self.len -= 1;
        Some(&node.element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> std::iter::FusedIterator for Iter<'_, T> {}

/// Text dump of a [`Queue`], created by [`Queue::dump`].
pub struct Dump<'a, T> {
    queue: &'a Queue<T>,
}

impl<T: fmt::Display> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Size: {}", self.queue.len())?;
        f.write_str("Queue:")?;
        for element in self.queue.iter() {
            write!(f, " {}", element)?;
        }
        writeln!(f)
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.enqueue(item));
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
    }
}
