use core::{marker::PhantomData, ptr::NonNull};

use super::traits::Node;

/// An iterator over the nodes of a linked list, starting at any node.
pub struct LinkedListIter<'a, T: Node> {
    current: Option<NonNull<T>>,
    _marker: PhantomData<&'a ()>,
}

impl<'a, T> LinkedListIter<'a, T>
where
    T: Node,
{
    /// Creates a new iterator walking the chain that starts at `head`.
    ///
    /// # Safety
    ///
    /// Every node reachable from `head` must stay alive and unmodified while
    /// the iterator is alive.
    pub unsafe fn new(head: Option<NonNull<T>>) -> Self {
        Self {
            current: head,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for LinkedListIter<'a, T>
where
    T: Node,
{
    type Item = NonNull<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.inspect(|current| {
            self.current = unsafe { current.as_ref().next() };
        })
    }
}

unsafe impl<'a, T> Send for LinkedListIter<'a, T> where T: Node + Sync {}

unsafe impl<'a, T> Sync for LinkedListIter<'a, T> where T: Node + Sync {}
