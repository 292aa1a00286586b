use core::ptr::NonNull;

use super::traits::{Link, List, Node};

/// A generic intrusive singly linked list.
///
/// The list does not own its nodes. Two lists may share a common suffix
/// (see [`List::join`]), so the length is always computed by walking the chain.
#[derive(Debug)]
pub struct LinkedList<T: Node> {
    head: Option<NonNull<T>>,
}

impl<T> LinkedList<T>
where
    T: Node,
{
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList { head: None }
    }

    /// Creates a list over an existing chain of nodes.
    ///
    /// # Safety
    ///
    /// Every node reachable from `head` must outlive the list and the chain
    /// must be acyclic.
    pub const unsafe fn from_head(head: Option<NonNull<T>>) -> Self {
        LinkedList { head }
    }
}

impl<T> Link for LinkedList<T>
where
    T: Node,
{
    type Target = T;

    fn next(&self) -> Option<NonNull<T>> {
        self.head
    }

    fn set_next(&mut self, next: Option<NonNull<T>>) {
        self.head = next;
    }
}

impl<T> List for LinkedList<T>
where
    T: Node,
{
    fn head(&self) -> Option<NonNull<T>> {
        self.next()
    }

    fn set_head(&mut self, head: Option<NonNull<T>>) {
        self.set_next(head);
    }

    fn push(&mut self, node: NonNull<T>) {
        unsafe {
            let node_ref = &mut *node.as_ptr();
            node_ref.append_to(self);
        }
    }

    fn pop(&mut self) -> Option<NonNull<T>> {
        // The popped node keeps its link, another list may still reach it.
        self.head.inspect(|head| {
            self.head = unsafe { head.as_ref().next() };
        })
    }

    fn tail(&self) -> Option<NonNull<T>> {
        unsafe { self.iter().last() }
    }

    fn join(&mut self, chain: Option<NonNull<T>>) {
        match self.tail() {
            Some(tail) => unsafe { (*tail.as_ptr()).set_next(chain) },
            None => self.head = chain,
        }
    }
}

impl<T> Default for LinkedList<T>
where
    T: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

unsafe impl<T: Node + Send> Send for LinkedList<T> {}
unsafe impl<T: Node + Sync> Sync for LinkedList<T> {}
