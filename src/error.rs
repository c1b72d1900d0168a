use std::fmt;
use std::ops::Range;

/// Alias for results returned by the collections of this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// The operation that rejected an index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// Reading an element, e.g. [`DoubleLinkedList::get`](crate::DoubleLinkedList::get).
    Get,
    /// Inserting an element at an index.
    Insert,
    /// Removing the element at an index.
    Remove,
    /// Creating a cursor at an index.
    Cursor,
}

/// Errors raised by [`DoubleLinkedList`](crate::DoubleLinkedList) and
/// [`Queue`](crate::Queue).
///
/// Every fallible operation validates its input before touching the
/// linked structure, so a returned error means the collection is
/// unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// An index was outside of the valid range for the operation.
    OutOfBounds {
        /// The offending index.
        index: usize,
        /// The valid (half-open) range of indices at the time of the call.
        bounds: Range<usize>,
        /// The operation that was attempted.
        access: Access,
    },
    /// The value to remove is not in the list.
    NotFound,
    /// An end of an empty collection was accessed.
    Empty,
}

impl Error {
    pub(crate) fn out_of_bounds(index: usize, bounds: Range<usize>, access: Access) -> Self {
        log::debug!("{:?} rejected: index {} outside {:?}", access, index, bounds);
        Error::OutOfBounds {
            index,
            bounds,
            access,
        }
    }

    pub(crate) fn empty(what: &str) -> Self {
        log::debug!("{} on an empty collection", what);
        Error::Empty
    }

    pub(crate) fn not_found() -> Self {
        log::debug!("value to remove is not in the list");
        Error::NotFound
    }
}

impl fmt::Display for Access {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Access::Get => "retrieving an element",
            Access::Insert => "adding an element",
            Access::Remove => "removing an element",
            Access::Cursor => "placing a cursor",
        };
        f.write_str(verb)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::OutOfBounds {
                index,
                bounds,
                access,
            } => write!(
                f,
                "{} outside the list's borders: valid range [{}, {}), attempted at {}",
                access, bounds.start, bounds.end, index
            ),
            Error::NotFound => f.write_str("the list does not contain the value"),
            Error::Empty => f.write_str("the collection is empty"),
        }
    }
}

impl std::error::Error for Error {}
