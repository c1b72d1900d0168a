use std::fmt;

/// A stable handle to a node slot inside an [`Arena`](crate::arena::Arena).
///
/// Handles never leave the collection that created them, so a handle is
/// always either live or about to be recycled by the same collection.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(usize);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub(crate) fn index(self) -> usize {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A node of [`DoubleLinkedList`](crate::DoubleLinkedList).
///
/// Two adjacent nodes name each other through `previous` and `next`.
/// Neither link owns anything: the arena of the list owns every node.
#[derive(Debug)]
pub(crate) struct TwoWayNode<T> {
    pub(crate) element: T,
    pub(crate) previous: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

impl<T> TwoWayNode<T> {
    pub(crate) fn new(element: T, previous: Option<NodeId>, next: Option<NodeId>) -> Self {
        Self {
            element,
            previous,
            next,
        }
    }

    pub(crate) fn into_element(self) -> T {
        self.element
    }
}

/// A node of [`Stack`](crate::Stack) and [`Queue`](crate::Queue).
#[derive(Debug)]
pub(crate) struct OneWayNode<T> {
    pub(crate) element: T,
    pub(crate) next: Option<NodeId>,
}

impl<T> OneWayNode<T> {
    pub(crate) fn new(element: T, next: Option<NodeId>) -> Self {
        Self { element, next }
    }

    pub(crate) fn into_element(self) -> T {
        self.element
    }
}
