use std::fmt;

use crate::arena::Arena;
use crate::node::{NodeId, OneWayNode};

/// A last-in, first-out stack over a chain of one-way nodes.
///
/// The top of the stack is the head of the chain: [`push`](Stack::push) and
/// [`pop`](Stack::pop) both work there in constant time. Popping or peeking
/// an empty stack is not an error and yields `None`.
///
/// # Examples
///
/// ```
/// use linked_collections::Stack;
///
/// let mut stack = Stack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
pub struct Stack<T> {
    nodes: Arena<OneWayNode<T>>,
    /// The top of the stack.
    head: Option<NodeId>,
}

impl<T> Stack<T> {
    /// Creates an empty `Stack`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            nodes: Arena::new(),
            head: None,
        }
    }

    /// Creates an empty `Stack` with room for `capacity` nodes before it
    /// reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            head: None,
        }
    }

    /// Returns the number of elements on the stack.
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the stack holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Pushes an element on top of the stack.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push(&mut self, element: T) {
        let node = self.nodes.insert(OneWayNode::new(element, self.head));
        self.head = Some(node);
    }

    /// Removes the top element and returns it, or `None` if the stack is
    /// empty.
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop(&mut self) -> Option<T> {
        let head = self.head?;
        let node = self.nodes.remove(head);
        self.head = node.next;
        Some(node.into_element())
    }

    /// Returns the top element, or `None` if the stack is empty.
    pub fn peek(&self) -> Option<&T> {
        let head = self.head?;
        Some(&self.nodes[head].element)
    }

    /// Returns the top element mutably, or `None` if the stack is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Stack;
    ///
    /// let mut stack = Stack::from_iter([1, 2]);
    /// if let Some(top) = stack.peek_mut() {
    ///     *top *= 10;
    /// }
    /// assert_eq!(stack.pop(), Some(20));
    /// ```
    pub fn peek_mut(&mut self) -> Option<&mut T> {
        let head = self.head?;
        Some(&mut self.nodes[head].element)
    }

    /// Pops every element, top first.
    pub fn clear(&mut self) {
        while self.pop().is_some() {}
        self.nodes.clear();
    }

    /// Provides an iterator from the top of the stack to the bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push('a');
    /// stack.push('b');
    /// assert_eq!(stack.iter().collect::<String>(), "ba");
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            current: self.head,
            len: self.len(),
        }
    }

    /// Returns a [`Display`](fmt::Display) adapter that renders one element
    /// per line, top first.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::Stack;
    ///
    /// let stack = Stack::from_iter([1, 2, 3]);
    /// assert_eq!(stack.dump().to_string(), "3\n2\n1\n");
    /// ```
    pub fn dump(&self) -> Dump<'_, T> {
        Dump { stack: self }
    }

    /// Prints [`dump`](Stack::dump) to the standard output.
    pub fn print_stack(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self.dump());
    }
}

/// An iterator over the elements of a [`Stack`], top first.
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

/// Text dump of a [`Stack`], created by [`Stack::dump`].
pub struct Dump<'a, T> {
    stack: &'a Stack<T>,
}

impl<T: fmt::Display> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.stack
            .iter()
            .try_for_each(|element| writeln!(f, "{}", element))
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(|item| self.push(item));
    }
}

impl<T> FromIterator<T> for Stack<T> {
    /// Pushes the items in order, so the last one ends on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        stack.extend(iter);
        stack
    }
}
