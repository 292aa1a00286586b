use core::ptr::NonNull;

use list_intersection_derive::Node;

use super::traits::Link;

/// A node in a singly linked list.
#[derive(Node)]
#[node(crate_path = "crate")]
pub struct SingleNode<T> {
    link: SingleLink,
    data: T,
}

impl<T> SingleNode<T> {
    /// Creates an unlinked node holding `data`.
    pub const fn new(data: T) -> Self {
        Self {
            link: SingleLink { next: None },
            data,
        }
    }
}

impl<T: Default> Default for SingleNode<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

/// A link in a singly linked list.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleLink {
    next: Option<NonNull<Self>>,
}

impl Link for SingleLink {
    type Target = Self;

    #[inline]
    fn next(&self) -> Option<NonNull<Self>> {
        self.next
    }

    #[inline]
    fn set_next(&mut self, next: Option<NonNull<Self>>) {
        self.next = next;
    }
}

unsafe impl Send for SingleLink {}
unsafe impl Sync for SingleLink {}
