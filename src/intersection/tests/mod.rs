extern crate std;

use std::vec::Vec;

use core::{ops::Range, ptr::NonNull};

use crate::linked_list::intrusive::{
    single::SingleNode,
    traits::{Link, NodeWithData},
};

use super::{IntersectionFinder, Strategy};

mod intrusive;

type Head = Option<NonNull<SingleNode<i32>>>;

const STRATEGIES: [Strategy; 3] = [
    Strategy::IdentitySet,
    Strategy::TwoPointer,
    Strategy::LengthAlign,
];

/// Every strategy, with and without the cycle check.
fn finders() -> impl Iterator<Item = IntersectionFinder> {
    STRATEGIES.into_iter().flat_map(|strategy| {
        [false, true]
            .into_iter()
            .map(move |check| IntersectionFinder::new().with_strategy(strategy).check_cycles(check))
    })
}

/// Heap storage for unlinked test nodes. Pointers stay valid while it lives.
struct Nodes {
    storage: Vec<SingleNode<i32>>,
    base: NonNull<SingleNode<i32>>,
}

impl Nodes {
    fn new(values: &[i32]) -> Self {
        let mut storage: Vec<SingleNode<i32>> = values.iter().copied().map(SingleNode::new).collect();
        let base = NonNull::new(storage.as_mut_ptr()).unwrap();
        Self { storage, base }
    }

    fn ptr(&self, index: usize) -> NonNull<SingleNode<i32>> {
        assert!(index < self.storage.len());
        unsafe { self.base.add(index) }
    }

    /// Links the nodes in `range` in order, the last one pointing at `tail`.
    fn chain(&self, range: Range<usize>, tail: Head) -> Head {
        range.rev().fold(tail, |next, index| {
            let node = self.ptr(index);
            unsafe { (*node.as_ptr()).set_next(next) };
            Some(node)
        })
    }
}

/// Address, data and next link of every node reachable from `head`.
fn snapshot(head: Head) -> Vec<(NonNull<SingleNode<i32>>, i32, Head)> {
    let mut out = Vec::new();
    let mut current = head;
    while let Some(node) = current {
        let node_ref = unsafe { node.as_ref() };
        out.push((node, *node_ref.data(), node_ref.next()));
        current = node_ref.next();
    }
    out
}
