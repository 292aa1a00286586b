use alloc::sync::Arc;
use core::ptr::NonNull;

use crate::linked_list::{intrusive::traits::Link, shared::SharedNode};

/// A position in a chain of nodes.
///
/// Two cursors designate the same node iff their identities are equal.
pub(crate) trait Cursor: Copy {
    /// Move to the following node.
    fn advance(self) -> Option<Self>;

    /// The address of the node under the cursor.
    fn identity(self) -> NonNull<()>;

    #[inline]
    fn same_node(self, other: Self) -> bool {
        self.identity() == other.identity()
    }
}

/// Cursor over intrusive nodes.
///
/// Only built by callers that have promised every reachable node is live.
pub(crate) struct RawCursor<T>(pub(crate) NonNull<T>);

impl<T> Clone for RawCursor<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawCursor<T> {}

impl<T> Cursor for RawCursor<T>
where
    T: Link<Target = T>,
{
    #[inline]
    fn advance(self) -> Option<Self> {
        unsafe { self.0.as_ref().next().map(RawCursor) }
    }

    #[inline]
    fn identity(self) -> NonNull<()> {
        self.0.cast()
    }
}

impl<'a, T> Cursor for &'a Arc<SharedNode<T>> {
    #[inline]
    fn advance(self) -> Option<Self> {
        self.next()
    }

    #[inline]
    fn identity(self) -> NonNull<()> {
        NonNull::from(&**self).cast()
    }
}
