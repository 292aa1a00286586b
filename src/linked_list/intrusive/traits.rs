use core::ptr::NonNull;

use super::iter::LinkedListIter;

/// A trait for a singly linked list.
pub trait List: Link {
    /// Get the head of the linked list
    fn head(&self) -> Option<NonNull<Self::Target>>;

    /// Set the head of the linked list
    fn set_head(&mut self, head: Option<NonNull<Self::Target>>);

    /// Push a new node to the front of the linked list
    fn push(&mut self, node: NonNull<Self::Target>);

    /// Pop a node from the front of the linked list
    fn pop(&mut self) -> Option<NonNull<Self::Target>>;

    /// Get the last node of the linked list
    fn tail(&self) -> Option<NonNull<Self::Target>>;

    /// Link the last node of this list to `chain`.
    ///
    /// After joining, every node reachable from `chain` is also part of this
    /// list. If `chain` already belongs to another list, both lists share it
    /// as a common suffix.
    fn join(&mut self, chain: Option<NonNull<Self::Target>>);

    /// Find the first node shared by this list and `other`.
    ///
    /// Nodes are compared by address, never by their data.
    fn intersection<O>(&self, other: &O) -> Option<NonNull<Self::Target>>
    where
        O: List<Target = Self::Target>,
        Self::Target: Node,
    {
        unsafe { crate::intersection::find_intersection(self.head(), other.head()) }
    }

    /// Check if the linked list is empty
    fn is_empty(&self) -> bool {
        self.head().is_none()
    }

    /// Get the number of nodes reachable from the head
    fn count(&self) -> usize
    where
        Self::Target: Node,
    {
        unsafe { self.iter().count() }
    }

    /// Get an iterator over the linked list
    /// # Safety
    /// The caller must ensure that the linked list is not modified while iterating.
    unsafe fn iter<'a>(&'a self) -> LinkedListIter<'a, Self::Target>
    where
        Self::Target: Node,
    {
        unsafe { LinkedListIter::new(self.head()) }
    }
}

/// A trait for a link in a linked list.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the linked list
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the linked list
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);
}

/// A trait for a node in a linked list.
pub trait Node: Link<Target = Self> {
    /// Push the node to the front of a linked list
    fn append_to<L>(&mut self, list: &mut L)
    where
        L: List<Target = Self>;
}

/// A trait for a node that contains data.
pub trait NodeWithData: Node {
    /// The type of data stored in the node.
    type Data;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;

    /// Get a mutable reference to the data associated with the node
    fn data_mut(&mut self) -> &mut Self::Data;
}
