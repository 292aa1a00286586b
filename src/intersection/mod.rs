//! Detection of the node where two singly linked lists converge.
//!
//! Two lists intersect when, from some node onward, both reach the very same
//! nodes. Nodes are compared by address: two distinct nodes holding equal
//! data never count as shared.
//!
//! ## Strategies
//!
//! - [`Strategy::IdentitySet`]: records the addresses of the first list in a
//!   hash set, then scans the second list for a known address.
//! - [`Strategy::TwoPointer`]: walks both lists twice, switching heads at the
//!   end, using no extra memory.
//! - [`Strategy::LengthAlign`]: measures both lists and walks them in
//!   lockstep from equal distances to the end.
//!
//! All strategies return the same node for the same pair of lists, and the
//! result does not depend on the order of the arguments.

use alloc::sync::Arc;
use core::ptr::NonNull;

use tracing::{debug, trace};

use crate::linked_list::{intrusive::traits::Link, shared::SharedNode};

use self::cursor::{Cursor, RawCursor};

mod cursor;
mod cycle;
mod error;
mod identity;
mod length;
mod two_pointer;

#[cfg(test)]
mod tests;

pub use error::{IntersectionError, Result, Side};

/// How the intersection node is searched for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Strategy {
    /// Hash set of visited node addresses. O(a + b) time, O(a) memory.
    #[default]
    IdentitySet,
    /// Two cursors swapping lists at the end. O(a + b) time, O(1) memory.
    TwoPointer,
    /// Align both lists by length first. O(a + b) time, O(1) memory.
    LengthAlign,
}

/// A configured intersection search.
///
/// The default finder uses [`Strategy::IdentitySet`] and trusts its input to
/// be acyclic. Enabling [`check_cycles`](Self::check_cycles) rejects cyclic
/// lists with [`IntersectionError::Cyclic`] instead of looping forever.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IntersectionFinder {
    strategy: Strategy,
    check_cycles: bool,
}

impl IntersectionFinder {
    pub const fn new() -> Self {
        Self {
            strategy: Strategy::IdentitySet,
            check_cycles: false,
        }
    }

    pub const fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Verify that both lists are acyclic before searching.
    pub const fn check_cycles(mut self, enabled: bool) -> Self {
        self.check_cycles = enabled;
        self
    }

    pub const fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub const fn checks_cycles(&self) -> bool {
        self.check_cycles
    }

    /// Find the first node reachable from both `head_a` and `head_b`.
    ///
    /// # Safety
    ///
    /// Every node reachable from either head must be live and must not be
    /// modified for the duration of the call.
    pub unsafe fn find<T>(
        &self,
        head_a: Option<NonNull<T>>,
        head_b: Option<NonNull<T>>,
    ) -> Result<Option<NonNull<T>>>
    where
        T: Link<Target = T>,
    {
        self.run(head_a.map(RawCursor), head_b.map(RawCursor))
            .map(|found| found.map(|cursor| cursor.0))
    }

    /// Find the first node shared by two [`SharedList`](crate::linked_list::shared::SharedList) chains.
    pub fn find_shared<'a, T>(
        &self,
        head_a: Option<&'a Arc<SharedNode<T>>>,
        head_b: Option<&'a Arc<SharedNode<T>>>,
    ) -> Result<Option<&'a Arc<SharedNode<T>>>> {
        self.run(head_a, head_b)
    }

    fn run<C: Cursor>(&self, head_a: Option<C>, head_b: Option<C>) -> Result<Option<C>> {
        trace!(strategy = ?self.strategy, check_cycles = self.check_cycles, "searching for intersection");

        if self.check_cycles {
            for (side, head) in [(Side::First, head_a), (Side::Second, head_b)] {
                if cycle::has_cycle(head) {
                    debug!(%side, "rejecting cyclic list");
                    return Err(IntersectionError::Cyclic { side });
                }
            }
        }

        let found = match self.strategy {
            Strategy::IdentitySet => identity::find(head_a, head_b),
            Strategy::TwoPointer => two_pointer::find(head_a, head_b),
            Strategy::LengthAlign => length::find(head_a, head_b),
        };

        if let Some(node) = found {
            debug!(node = ?node.identity(), "lists intersect");
        }
        Ok(found)
    }
}

/// Find the first node reachable from both `head_a` and `head_b`, or `None`
/// if the lists never converge.
///
/// # Safety
///
/// Every node reachable from either head must be live and must not be
/// modified for the duration of the call. Both chains must be acyclic.
pub unsafe fn find_intersection<T>(
    head_a: Option<NonNull<T>>,
    head_b: Option<NonNull<T>>,
) -> Option<NonNull<T>>
where
    T: Link<Target = T>,
{
    identity::find(head_a.map(RawCursor), head_b.map(RawCursor)).map(|cursor| cursor.0)
}

/// Safe counterpart of [`find_intersection`] for shared lists.
pub fn find_shared_intersection<'a, T>(
    head_a: Option<&'a Arc<SharedNode<T>>>,
    head_b: Option<&'a Arc<SharedNode<T>>>,
) -> Option<&'a Arc<SharedNode<T>>> {
    identity::find(head_a, head_b)
}
