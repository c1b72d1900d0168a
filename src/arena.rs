//! Slot storage for linked nodes.
//!
//! Every collection of this crate keeps its nodes in an [`Arena`], and links
//! between nodes are [`NodeId`] handles into it. Reciprocal links of a doubly
//! linked list are therefore plain indices: the arena is the single owner.
//!
//! Removed slots are threaded into a free list and reused by the next
//! insertion, so a collection with a steady number of elements does not grow.

use crate::node::NodeId;
use std::mem;
use std::ops::{Index, IndexMut};

pub(crate) struct Arena<N> {
    slots: Vec<Slot<N>>,
    /// Head of the free list threaded through vacant slots.
    free: Option<NodeId>,
    len: usize,
}

enum Slot<N> {
    Occupied(N),
    Vacant { next_free: Option<NodeId> },
}

impl<N> Arena<N> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free: None,
            len: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of slots ever allocated, occupied or not.
    #[cfg(test)]
    pub(crate) fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Stores `node`, reusing a vacant slot when there is one.
    pub(crate) fn insert(&mut self, node: N) -> NodeId {
        self.len += 1;
        if let Some(id) = self.free {
            let slot = &mut self.slots[id.index()];
            if let Slot::Vacant { next_free } = *slot {
                self.free = next_free;
                *slot = Slot::Occupied(node);
                return id;
            }
            unreachable!("free list points at occupied slot {:?}", id);
        }
        let id = NodeId::new(self.slots.len());
        self.slots.push(Slot::Occupied(node));
        id
    }

    /// Takes the node out of slot `id` and puts the slot on the free list.
    ///
    /// # Panics
    ///
    /// Panics if the slot is already vacant.
    pub(crate) fn remove(&mut self, id: NodeId) -> N {
        let slot = &mut self.slots[id.index()];
        if let Slot::Vacant { .. } = slot {
            panic!("removing vacant slot {:?}", id);
        }
        let vacant = Slot::Vacant {
            next_free: self.free,
        };
        self.free = Some(id);
        self.len -= 1;
        match mem::replace(slot, vacant) {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => unreachable!(),
        }
    }

    /// Drops every node and forgets the free list, keeping the allocation.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free = None;
        self.len = 0;
    }

    /// Mutable access to every slot in slot order, `None` for vacant ones.
    ///
    /// The references are disjoint, which lets callers hand out many
    /// `&mut` at once and reorder them afterwards.
    pub(crate) fn slots_mut(&mut self) -> impl Iterator<Item = Option<&mut N>> {
        self.slots.iter_mut().map(|slot| match slot {
            Slot::Occupied(node) => Some(node),
            Slot::Vacant { .. } => None,
        })
    }
}

impl<N> Default for Arena<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> Index<NodeId> for Arena<N> {
    type Output = N;

    fn index(&self, id: NodeId) -> &N {
        match &self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node handle {:?}", id),
        }
    }
}

impl<N> IndexMut<NodeId> for Arena<N> {
    fn index_mut(&mut self, id: NodeId) -> &mut N {
        match &mut self.slots[id.index()] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("dangling node handle {:?}", id),
        }
    }
}
