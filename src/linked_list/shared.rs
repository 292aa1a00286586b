//! A persistent singly linked list with structurally shared tails.
//!
//! [`SharedList::cons`] returns a new list whose tail is the receiver, so two
//! lists built on top of the same list intersect at its head without any
//! `unsafe` code.

use alloc::sync::Arc;
use core::fmt;

/// A node of a [`SharedList`].
pub struct SharedNode<T> {
    data: T,
    next: Option<Arc<SharedNode<T>>>,
}

impl<T> SharedNode<T> {
    /// Creates a node holding `data` that links to `next`.
    pub fn new(data: T, next: Option<Arc<SharedNode<T>>>) -> Arc<Self> {
        Arc::new(SharedNode { data, next })
    }

    /// Get the data stored in the node.
    #[inline]
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Get the next node, if any.
    #[inline]
    pub fn next(&self) -> Option<&Arc<SharedNode<T>>> {
        self.next.as_ref()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedNode<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedNode")
            .field("data", &self.data)
            .field("next", &self.next.as_ref().map(Arc::as_ptr))
            .finish()
    }
}

impl<T> Drop for SharedNode<T> {
    fn drop(&mut self) {
        // Unlink uniquely owned successors one by one instead of recursing.
        let mut next = self.next.take();
        while let Some(node) = next {
            match Arc::try_unwrap(node) {
                Ok(mut node) => next = node.next.take(),
                Err(_) => break,
            }
        }
    }
}

/// A persistent singly linked list.
pub struct SharedList<T> {
    head: Option<Arc<SharedNode<T>>>,
}

impl<T> SharedList<T> {
    /// Creates a new, empty list.
    pub const fn new() -> Self {
        SharedList { head: None }
    }

    /// Creates a list starting at an existing node.
    pub fn from_head(head: Option<Arc<SharedNode<T>>>) -> Self {
        SharedList { head }
    }

    /// Builds a list holding `values` in iteration order.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        Self::from_values_with_tail(values, &SharedList::new())
    }

    /// Builds a list holding `values` in iteration order, followed by the
    /// nodes of `tail`, which are shared rather than copied.
    pub fn from_values_with_tail<I>(values: I, tail: &SharedList<T>) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: DoubleEndedIterator,
    {
        values
            .into_iter()
            .rev()
            .fold(tail.clone(), |list, value| list.cons(value))
    }

    /// Returns a new list with `data` in front of this one.
    pub fn cons(&self, data: T) -> Self {
        SharedList {
            head: Some(SharedNode::new(data, self.head.clone())),
        }
    }

    /// Get the head of the list.
    pub fn head(&self) -> Option<&Arc<SharedNode<T>>> {
        self.head.as_ref()
    }

    /// Get the list without its first node, sharing the remaining nodes.
    pub fn tail(&self) -> Option<SharedList<T>> {
        self.head.as_ref().map(|head| SharedList {
            head: head.next.clone(),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Get an iterator over the nodes of the list.
    pub fn iter(&self) -> SharedIter<'_, T> {
        SharedIter {
            current: self.head.as_ref(),
        }
    }

    /// Find the first node shared by this list and `other`.
    pub fn intersection<'a>(&'a self, other: &'a SharedList<T>) -> Option<&'a Arc<SharedNode<T>>> {
        crate::intersection::find_shared_intersection(self.head(), other.head())
    }
}

impl<T> Clone for SharedList<T> {
    fn clone(&self) -> Self {
        SharedList {
            head: self.head.clone(),
        }
    }
}

impl<T> Default for SharedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for SharedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(|node| node.data()))
            .finish()
    }
}

/// An iterator over the nodes of a [`SharedList`].
pub struct SharedIter<'a, T> {
    current: Option<&'a Arc<SharedNode<T>>>,
}

impl<'a, T> Iterator for SharedIter<'a, T> {
    type Item = &'a Arc<SharedNode<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.next.as_ref();
        Some(current)
    }
}
