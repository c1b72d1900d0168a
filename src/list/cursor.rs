use crate::error::{Access, Error, Result};
use crate::list::DoubleLinkedList;
use crate::node::NodeId;
use std::fmt;

/// A cursor over a `DoubleLinkedList`.
///
/// A `Cursor` is like an iterator, except that it can freely seek back-and-forth.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor,
/// indexed by 0, 1, ..., *n*, where *n* is past the end of the list (at the
/// head's `next`, which is no element).
///
/// # Examples
///
/// ```
/// use linked_collections::DoubleLinkedList;
///
/// let list = DoubleLinkedList::from(['A', 'B', 'C', 'D']);
///
/// // [|A B C D] (index = 0)
/// let mut cursor = list.cursor_front();
/// assert_eq!(cursor.current(), Some(&'A'));
///
/// // [ A|B C D] (index = 1)
/// assert!(cursor.move_next().is_ok());
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // [ A B C D|] (index = 4), past the end
/// assert!(cursor.seek_to(4).is_ok());
/// assert_eq!(cursor.current(), None);
/// assert!(cursor.move_next().is_err());
///
/// // [ A B C|D] (index = 3)
/// assert!(cursor.move_prev().is_ok());
/// assert_eq!(cursor.current(), Some(&'D'));
/// ```
pub struct Cursor<'a, T: 'a> {
    index: usize,
    current: Option<NodeId>,
    list: &'a DoubleLinkedList<T>,
}

impl<'a, T: 'a> Clone for Cursor<'a, T> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            current: self.current,
            list: self.list,
        }
    }
}

/// A cursor over a `DoubleLinkedList` with editing operations.
///
/// A `CursorMut` can seek like [`Cursor`], and can also insert before and
/// remove at its position. Element references it hands out are tied to the
/// cursor's own borrow, so only one can be alive at a time.
///
/// # Examples
///
/// ```compile_fail
/// use linked_collections::DoubleLinkedList;
///
/// let mut list = DoubleLinkedList::from([1, 2, 3]);
/// let mut cursor = list.cursor_front_mut();
/// println!("{:?}", list.head());
/// println!("{:?}", cursor.current());
/// ```
pub struct CursorMut<'a, T: 'a> {
    index: usize,
    current: Option<NodeId>,
    list: &'a mut DoubleLinkedList<T>,
}

macro_rules! impl_cursor {
    ($CURSOR:ident) => {
        impl<'a, T: 'a> $CURSOR<'a, T> {
            fn past_the_end(&self, target: usize) -> Error {
                Error::out_of_bounds(target, 0..self.list.len() + 1, Access::Cursor)
            }

            /// Return the index of the cursor.
            pub fn index(&self) -> usize {
                self.index
            }

            /// Returns `true` if the cursor is past the end of the list.
            pub fn is_past_the_end(&self) -> bool {
                self.current.is_none()
            }

            /// Move the cursor to the next position.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Errors
            ///
            /// Returns [`Error::OutOfBounds`] if the cursor is already past
            /// the end; the cursor stays put.
            pub fn move_next(&mut self) -> Result<()> {
                match self.current {
                    Some(current) => {
                        self.current = self.list.node(current).next;
                        self.index += 1;
                        Ok(())
                    }
                    None => Err(self.past_the_end(self.index + 1)),
                }
            }

            /// Move the cursor to the previous position.
            ///
            /// This operation should compute in *O*(1) time.
            ///
            /// # Errors
            ///
            /// Returns [`Error::OutOfBounds`] if the cursor is at index 0;
            /// the cursor stays put.
            pub fn move_prev(&mut self) -> Result<()> {
                if self.index == 0 {
                    return Err(Error::out_of_bounds(
                        0,
                        1..self.list.len() + 1,
                        Access::Cursor,
                    ));
                }
                self.current = match self.current {
                    Some(current) => self.list.node(current).previous,
                    None => self.list.head,
                };
                self.index -= 1;
                Ok(())
            }

            /// Move the cursor to the position `target`, walking from the
            /// cursor, the tail or the head, whichever is closest.
            ///
            /// This operation should compute in *O*(min(*d*, *i*, *n* - *i*))
            /// time, where *d* is the distance from the cursor.
            ///
            /// # Errors
            ///
            /// Returns [`Error::OutOfBounds`] if `target > len`; the cursor
            /// stays put.
            ///
            /// # Examples
            ///
            /// ```
            /// use linked_collections::DoubleLinkedList;
            ///
            /// let list = DoubleLinkedList::from([1, 2, 3]);
            /// let mut cursor = list.cursor_front();
            ///
            /// assert!(cursor.seek_to(2).is_ok());
            /// assert_eq!(cursor.current(), Some(&3));
            ///
            /// assert!(cursor.seek_to(5).is_err());
            /// assert_eq!(cursor.current(), Some(&3));
            /// ```
            pub fn seek_to(&mut self, target: usize) -> Result<()> {
                if target > self.list.len() {
                    return Err(self.past_the_end(target));
                }
                let origin = self.current.map(|node| (self.index, node));
                self.current = self.list.seek(origin, target);
                self.index = target;
                Ok(())
            }

            /// Set the cursor to the tail of the list (index 0).
            #[inline]
            pub fn move_to_front(&mut self) {
                self.index = 0;
                self.current = self.list.tail;
            }

            /// Set the cursor past the end of the list (index `len`).
            #[inline]
            pub fn move_to_end(&mut self) {
                self.index = self.list.len();
                self.current = None;
            }

            /// Return a reference to the element before the cursor, or `None`
            /// if the cursor is at index 0.
            pub fn previous(&self) -> Option<&T> {
                let previous = match self.current {
                    Some(current) => self.list.node(current).previous,
                    None => self.list.head,
                }?;
                Some(&self.list.node(previous).element)
            }
        }

        impl<'a, T: fmt::Debug + 'a> fmt::Debug for $CURSOR<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($CURSOR))
                    .field("list", &self.list)
                    .field("index", &self.index)
                    .field("current", &self.current.map(|id| &self.list.node(id).element))
                    .finish()
            }
        }
    };
}

impl_cursor!(CursorMut);
impl_cursor!(Cursor);

impl<'a, T: 'a> Cursor<'a, T> {
    pub(crate) fn new(
        list: &'a DoubleLinkedList<T>,
        current: Option<NodeId>,
        index: usize,
    ) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Return a reference to the element at the cursor, or `None` if the
    /// cursor is past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let list = DoubleLinkedList::from([1, 2, 3]);
    /// assert_eq!(list.cursor(0).unwrap().current(), Some(&1));
    /// assert_eq!(list.cursor(2).unwrap().current(), Some(&3));
    /// assert_eq!(list.cursor(3).unwrap().current(), None);
    /// ```
    pub fn current(&self) -> Option<&'a T> {
        let list = self.list;
        self.current.map(|id| &list.node(id).element)
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(
        list: &'a mut DoubleLinkedList<T>,
        current: Option<NodeId>,
        index: usize,
    ) -> Self {
        Self {
            index,
            current,
            list,
        }
    }

    /// Return a reference to the element at the cursor, or `None` if the
    /// cursor is past the end.
    pub fn current(&self) -> Option<&T> {
        self.current.map(|id| &self.list.node(id).element)
    }

    /// Return a mutable reference to the element at the cursor, or `None` if
    /// the cursor is past the end.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::from([1, 2, 3]);
    ///
    /// let mut cursor = list.cursor_front_mut();
    /// *cursor.current_mut().unwrap() *= 5;
    /// assert_eq!(cursor.current(), Some(&5));
    ///
    /// assert!(list.cursor_mut(3).unwrap().current_mut().is_none());
    /// ```
    pub fn current_mut(&mut self) -> Option<&mut T> {
        let current = self.current?;
        Some(&mut self.list.node_mut(current).element)
    }

    /// Re-borrow the mutable cursor as a short-lived immutable one.
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Convert the mutable cursor to an immutable one.
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor::new(self.list, self.current, self.index)
    }

    /// Temporarily view the list via an immutable reference.
    pub fn view(&self) -> &DoubleLinkedList<T> {
        self.list
    }

    /// Add an element before the cursor position.
    ///
    /// At index 0 this is [`DoubleLinkedList::add_to_beginning`], past the
    /// end it is [`DoubleLinkedList::append`]; otherwise the new node is
    /// spliced between the cursor and its previous node. The cursor stays at
    /// the same element, so its `index` becomes `index + 1`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::from([1, 2, 3]);
    /// let mut cursor = list.cursor_mut(1).unwrap();
    ///
    /// cursor.insert(4); // becomes [1, 4, 2, 3]
    /// assert_eq!(cursor.index(), 2);
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// cursor.move_to_end();
    /// cursor.insert(5); // becomes [1, 4, 2, 3, 5]
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.previous(), Some(&5));
    ///
    /// assert_eq!(list, DoubleLinkedList::from([1, 4, 2, 3, 5]));
    /// ```
    pub fn insert(&mut self, element: T) {
        let previous = match self.current {
            Some(current) => self.list.node(current).previous,
            None => self.list.head,
        };
        match (previous, self.current) {
            (Some(previous), Some(current)) => {
                self.list.splice_between(previous, current, element);
            }
            (None, _) => self.list.add_to_beginning(element),
            (Some(_), None) => self.list.append(element),
        }
        self.index += 1;
    }

    /// Remove the element at the cursor and return it, or return `None`
    /// if the cursor is past the end. After removal, the cursor is at the
    /// following element, which now has the same `index`.
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::from_iter(0..10);
    /// let mut cursor = list.cursor_mut(5).unwrap();
    ///
    /// assert_eq!(cursor.remove(), Some(5));
    /// assert_eq!(cursor.index(), 5);
    /// assert_eq!(cursor.current(), Some(&6));
    ///
    /// cursor.move_to_end();
    /// assert_eq!(cursor.remove(), None);
    /// ```
    pub fn remove(&mut self) -> Option<T> {
        let current = self.current?;
        self.current = self.list.node(current).next;
        Some(self.list.detach(current))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::DoubleLinkedList;

    #[test]
    fn cursor_walks_both_ways() {
        let list = DoubleLinkedList::from_iter(0..4);
        let mut cursor = list.cursor_front();
        for i in 0..4 {
            assert_eq!(cursor.index(), i);
            assert_eq!(cursor.current(), Some(&i));
            assert!(cursor.move_next().is_ok());
        }
        assert!(cursor.is_past_the_end());
        assert!(matches!(cursor.move_next(), Err(Error::OutOfBounds { .. })));
        assert_eq!(cursor.previous(), Some(&3));

        for i in (0..4).rev() {
            assert!(cursor.move_prev().is_ok());
            assert_eq!(cursor.current(), Some(&i));
        }
        assert!(cursor.move_prev().is_err());
        assert_eq!(cursor.previous(), None);
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn cursor_on_empty_list() {
        let mut list = DoubleLinkedList::<i32>::new();
        let cursor = list.cursor_back();
        assert_eq!(cursor.index(), 0);
        assert_eq!(cursor.current(), None);

        let mut cursor = list.cursor_front_mut();
        assert_eq!(cursor.remove(), None);
        cursor.insert(1);
        assert_eq!(cursor.index(), 1);
        assert_eq!(cursor.previous(), Some(&1));
        assert_eq!(list.head(), Ok(&1));
        assert_eq!(list.tail(), Ok(&1));
    }

    #[test]
    fn cursor_seek() {
        let list = DoubleLinkedList::from_iter(0..10);
        let mut cursor = list.cursor_back();
        assert_eq!(cursor.index(), 9);
        for target in [0, 9, 4, 5, 10, 3, 7, 0] {
            assert!(cursor.seek_to(target).is_ok());
            assert_eq!(cursor.index(), target);
            assert_eq!(cursor.current(), list.get(target).ok());
        }
        assert!(cursor.seek_to(11).is_err());
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn cursor_mut_edit() {
        let mut list = DoubleLinkedList::from_iter(0..6);
        let mut cursor = list.cursor_mut(2).unwrap();
        assert_eq!(cursor.remove(), Some(2));
        assert_eq!(cursor.remove(), Some(3));
        cursor.insert(20);
        cursor.insert(30);
        assert_eq!(cursor.current(), Some(&4));
        assert_eq!(cursor.view().len(), 6);

        cursor.move_to_front();
        assert_eq!(cursor.remove(), Some(0));
        cursor.move_to_end();
        assert!(cursor.move_prev().is_ok());
        assert_eq!(cursor.remove(), Some(5));
        assert!(cursor.is_past_the_end());

        let cursor = cursor.into_cursor();
        assert_eq!(cursor.previous(), Some(&4));
        assert_eq!(list, DoubleLinkedList::from([1, 20, 30, 4]));
    }
}
