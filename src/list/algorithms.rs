use crate::error::{Error, Result};
use crate::list::DoubleLinkedList;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

impl<T: PartialEq> PartialEq for DoubleLinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other)
    }
}

impl<T: Eq> Eq for DoubleLinkedList<T> {}

impl<T: PartialOrd> PartialOrd for DoubleLinkedList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.iter().partial_cmp(other)
    }
}

impl<T: Ord> Ord for DoubleLinkedList<T> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.iter().cmp(other)
    }
}

impl<T: Clone> Clone for DoubleLinkedList<T> {
    fn clone(&self) -> Self {
        let mut list = DoubleLinkedList::with_capacity(self.len());
        list.extend(self.iter().cloned());
        list
    }
}

impl<T: Hash> Hash for DoubleLinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for elt in self {
            elt.hash(state);
        }
    }
}

impl<T> DoubleLinkedList<T> {
    /// Returns `true` if the list contains an element equal to the given
    /// value.
    ///
    /// The scan starts at the head (the logical back) and walks towards the
    /// tail, the opposite direction of [`find`](DoubleLinkedList::find).
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let list = DoubleLinkedList::from([0, 1, 2]);
    /// assert!(list.contains(&0));
    /// assert!(!list.contains(&10));
    /// ```
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq<T>,
    {
        self.iter().rev().any(|e| e == x)
    }

    /// Returns the index of the first element equal to `x`, scanning from the
    /// tail, or `None` if there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let list = DoubleLinkedList::from(['a', 'b', 'a']);
    /// assert_eq!(list.find(&'a'), Some(0));
    /// assert_eq!(list.find(&'b'), Some(1));
    /// assert_eq!(list.find(&'z'), None);
    /// ```
    pub fn find(&self, x: &T) -> Option<usize>
    where
        T: PartialEq<T>,
    {
        self.iter().position(|e| e == x)
    }

    /// Calls `visit` on every element, from the tail (index 0) to the head.
    pub fn for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().for_each(visit)
    }

    /// Calls `visit` on every element, from the head (index `len - 1`) to the
    /// tail.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let list = DoubleLinkedList::from([1, 2, 3]);
    /// let mut seen = Vec::new();
    /// list.reverse_for_each(|x| seen.push(*x));
    /// assert_eq!(seen, vec![3, 2, 1]);
    /// ```
    pub fn reverse_for_each<F>(&self, visit: F)
    where
        F: FnMut(&T),
    {
        self.iter().rev().for_each(visit)
    }

    /// Returns a new list holding `transform` applied to every element, in
    /// the same order. The list itself is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let list = DoubleLinkedList::from([1, 2, 3]);
    /// let strings = list.map(|x| x.to_string());
    /// assert_eq!(strings, DoubleLinkedList::from(["1".to_string(), "2".into(), "3".into()]));
    /// ```
    pub fn map<R, F>(&self, transform: F) -> DoubleLinkedList<R>
    where
        F: FnMut(&T) -> R,
    {
        let mut list = DoubleLinkedList::with_capacity(self.len());
        list.extend(self.iter().map(transform));
        list
    }

    /// Returns a new list with clones of the elements for which `predicate`
    /// holds, in their original order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let list = DoubleLinkedList::from_iter(0..10);
    /// let even = list.filter(|x| x % 2 == 0);
    /// assert_eq!(even, DoubleLinkedList::from([0, 2, 4, 6, 8]));
    /// assert_eq!(list.len(), 10);
    /// ```
    pub fn filter<P>(&self, mut predicate: P) -> DoubleLinkedList<T>
    where
        T: Clone,
        P: FnMut(&T) -> bool,
    {
        self.iter().filter(|e| predicate(e)).cloned().collect()
    }

    /// Removes the first element, scanning from the tail, for which
    /// `predicate` holds, and returns it. Returns `None` if nothing matches.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::from([1, 4, 6, 7]);
    /// assert_eq!(list.remove_if(|x| x % 2 == 0), Some(4));
    /// assert_eq!(list.remove_if(|x| *x > 10), None);
    /// assert_eq!(list, DoubleLinkedList::from([1, 6, 7]));
    /// ```
    pub fn remove_if<P>(&mut self, mut predicate: P) -> Option<T>
    where
        P: FnMut(&T) -> bool,
    {
        let mut cursor = self.cursor_front_mut();
        while let Some(element) = cursor.current() {
            if predicate(element) {
                return cursor.remove();
            }
            cursor.move_next().ok()?;
        }
        None
    }

    /// Removes every element for which `predicate` holds, in a single pass
    /// from the tail to the head, and returns how many were removed.
    ///
    /// The survivors keep their relative order.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let mut list = DoubleLinkedList::from([2, 2, 3, 4, 5, 6, 6]);
    /// assert_eq!(list.remove_all(|x| x % 2 == 0), 5);
    /// assert_eq!(list, DoubleLinkedList::from([3, 5]));
    /// ```
    pub fn remove_all<P>(&mut self, mut predicate: P) -> usize
    where
        P: FnMut(&T) -> bool,
    {
        let mut removed = 0;
        let mut cursor = self.cursor_front_mut();
        while let Some(element) = cursor.current() {
            if predicate(element) {
                // The cursor lands on the successor, which is checked next.
                cursor.remove();
                removed += 1;
            } else if cursor.move_next().is_err() {
                break;
            }
        }
        removed
    }

    /// Removes the first element equal to `value`, as located by
    /// [`find`](DoubleLinkedList::find), and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if no element equals `value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::{DoubleLinkedList, Error};
    ///
    /// let mut list = DoubleLinkedList::from(["x", "y", "x"]);
    /// assert_eq!(list.remove_value(&"x"), Ok("x"));
    /// assert_eq!(list, DoubleLinkedList::from(["y", "x"]));
    /// assert_eq!(list.remove_value(&"z"), Err(Error::NotFound));
    /// ```
    pub fn remove_value(&mut self, value: &T) -> Result<T>
    where
        T: PartialEq<T>,
    {
        match self.find(value) {
            Some(index) => self.remove(index),
            None => Err(Error::not_found()),
        }
    }

    /// Returns a [`Display`](fmt::Display) adapter that renders the list
    /// one element per line, from the tail to the head, as
    /// `"<index>: <element>"`.
    ///
    /// This is a diagnostic aid, not a serialization format.
    ///
    /// # Examples
    ///
    /// ```
    /// use linked_collections::DoubleLinkedList;
    ///
    /// let list = DoubleLinkedList::from(["a", "b"]);
    /// assert_eq!(list.dump().to_string(), " 0: a\n 1: b\n");
    /// ```
    pub fn dump(&self) -> Dump<'_, T> {
        Dump { list: self }
    }

    /// Prints [`dump`](DoubleLinkedList::dump) to the standard output.
    pub fn print_list(&self)
    where
        T: fmt::Display,
    {
        print!("{}", self.dump());
    }
}

/// Text dump of a [`DoubleLinkedList`], created by
/// [`DoubleLinkedList::dump`].
pub struct Dump<'a, T> {
    list: &'a DoubleLinkedList<T>,
}

impl<T: fmt::Display> fmt::Display for Dump<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.list
            .iter()
            .enumerate()
            .try_for_each(|(index, element)| writeln!(f, "{:2}: {}", index, element))
    }
}

#[cfg(test)]
mod tests {
    use crate::error::Error;
    use crate::DoubleLinkedList;
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    fn hash_of<T: Hash>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn list_contains_and_find_scan_opposite_ends() {
        #[derive(Debug, Clone, Copy)]
        struct Tagged(u8, char);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }

        let list = DoubleLinkedList::from([Tagged(1, 'a'), Tagged(2, 'b'), Tagged(1, 'c')]);
        assert_eq!(list.find(&Tagged(1, '?')), Some(0));
        assert!(list.contains(&Tagged(1, '?')));
        assert!(!list.contains(&Tagged(3, '?')));

        // Which duplicate each scan meets first.
        let from_head = list.iter().rev().find(|t| **t == Tagged(1, '?'));
        assert_eq!(from_head.map(|t| t.1), Some('c'));
        let at = list.find(&Tagged(1, '?')).unwrap();
        assert_eq!(list.get(at).map(|t| t.1), Ok('a'));
    }

    #[test]
    fn list_for_each_order() {
        let list = DoubleLinkedList::from_iter(0..5);
        let mut forward = Vec::new();
        list.for_each(|x| forward.push(*x));
        let mut backward = Vec::new();
        list.reverse_for_each(|x| backward.push(*x));
        assert_eq!(forward, vec![0, 1, 2, 3, 4]);
        assert_eq!(backward, vec![4, 3, 2, 1, 0]);

        let empty = DoubleLinkedList::<i32>::new();
        empty.for_each(|_| panic!("visited an element of an empty list"));
        empty.reverse_for_each(|_| panic!("visited an element of an empty list"));
    }

    #[test]
    fn list_map_and_filter() {
        let list = DoubleLinkedList::from([3, 1, 4, 1, 5]);
        let doubled = list.map(|x| x * 2);
        assert_eq!(doubled, DoubleLinkedList::from([6, 2, 8, 2, 10]));
        let odd = list.filter(|x| x % 2 == 1);
        assert_eq!(odd, DoubleLinkedList::from([3, 1, 1, 5]));
        assert_eq!(list, DoubleLinkedList::from([3, 1, 4, 1, 5]));

        let none = list.filter(|_| false);
        assert!(none.is_empty());
    }

    #[test]
    fn list_remove_if() {
        let mut list = DoubleLinkedList::from([1, 2, 3, 4]);
        assert_eq!(list.remove_if(|x| *x == 1), Some(1));
        assert_eq!(list.remove_if(|x| *x == 4), Some(4));
        assert_eq!(list.remove_if(|x| *x > 2), Some(3));
        assert_eq!(list.remove_if(|x| *x > 2), None);
        assert_eq!(list, DoubleLinkedList::from([2]));
        assert_eq!(list.remove_if(|_| true), Some(2));
        assert_eq!(list.remove_if(|_| true), None);
        assert_eq!(list.head(), Err(Error::Empty));
    }

    #[test]
    fn list_remove_all() {
        let mut list = DoubleLinkedList::from_iter(0..10);
        assert_eq!(list.remove_all(|x| x % 3 == 0), 4);
        assert_eq!(list, DoubleLinkedList::from([1, 2, 4, 5, 7, 8]));
        assert_eq!(list.tail(), Ok(&1));
        assert_eq!(list.head(), Ok(&8));

        // Consecutive matches, including both ends.
        let mut list = DoubleLinkedList::from([0, 0, 1, 0, 0]);
        assert_eq!(list.remove_all(|x| *x == 0), 4);
        assert_eq!(list, DoubleLinkedList::from([1]));
        assert_eq!(list.remove_all(|_| true), 1);
        assert!(list.is_empty());
        assert_eq!(list.remove_all(|_| true), 0);
    }

    #[test]
    fn list_remove_value() {
        let mut list = DoubleLinkedList::from([5, 6, 5]);
        assert_eq!(list.remove_value(&5), Ok(5));
        assert_eq!(list, DoubleLinkedList::from([6, 5]));
        assert_eq!(list.remove_value(&7), Err(Error::NotFound));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn list_dump() {
        let list = DoubleLinkedList::from_iter(8..12);
        assert_eq!(list.dump().to_string(), " 0: 8\n 1: 9\n 2: 10\n 3: 11\n");
        let empty = DoubleLinkedList::<u8>::new();
        assert_eq!(empty.dump().to_string(), "");
    }

    #[test]
    fn list_eq_ord_hash_clone() {
        let list = DoubleLinkedList::from([1, 2, 3]);
        let cloned = list.clone();
        assert_eq!(list, cloned);
        assert_eq!(hash_of(&list), hash_of(&cloned));
        assert!(list < DoubleLinkedList::from([1, 2, 4]));
        assert!(list > DoubleLinkedList::from([1, 2]));
        assert_ne!(list, DoubleLinkedList::from([1, 2]));
        assert_eq!(format!("{:?}", list), "[1, 2, 3]");
    }
}
