use alloc::vec::Vec;

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::linked_list::intrusive::{
    list::LinkedList,
    single::SingleNode,
    traits::{List, NodeWithData},
};

use super::super::{IntersectionError, IntersectionFinder, Side, find_intersection};
use super::{Head, Nodes, finders, snapshot};

fn find_all(a: Head, b: Head) -> [Head; 6] {
    let mut results = [None; 6];
    for (slot, finder) in results.iter_mut().zip(finders()) {
        *slot = unsafe { finder.find(a, b) }.unwrap();
    }
    results
}

fn assert_all(a: Head, b: Head, expected: Head) {
    assert_eq!(unsafe { find_intersection(a, b) }, expected);
    for found in find_all(a, b) {
        assert_eq!(found, expected);
    }
}

#[test]
fn test_disjoint_lists() {
    let nodes = Nodes::new(&[1, 2, 3, 4, 5]);
    let a = nodes.chain(0..3, None);
    let b = nodes.chain(3..5, None);
    assert_all(a, b, None);
    assert_all(b, a, None);
}

#[test]
fn test_empty_lists() {
    let nodes = Nodes::new(&[1, 2]);
    let a = nodes.chain(0..2, None);
    assert_all(None, None, None);
    assert_all(a, None, None);
    assert_all(None, a, None);
}

#[test]
fn test_shared_tail_returns_first_shared_node() {
    // c1(2) -> c2(4), A = 4 -> 1 -> 8 -> c1, B = 5 -> 0 -> 1 -> c1
    let nodes = Nodes::new(&[2, 4, 4, 1, 8, 5, 0, 1]);
    let shared = nodes.chain(0..2, None);
    let a = nodes.chain(2..5, shared);
    let b = nodes.chain(5..8, shared);

    assert_all(a, b, Some(nodes.ptr(0)));
    assert_all(b, a, Some(nodes.ptr(0)));

    let found = unsafe { find_intersection(a, b) }.unwrap();
    assert_eq!(unsafe { *found.as_ref().data() }, 2);
}

#[test]
fn test_equal_values_in_distinct_nodes() {
    let nodes = Nodes::new(&[1, 9, 1, 2, 4, 1, 9, 1, 2, 4]);
    let a = nodes.chain(0..5, None);
    let b = nodes.chain(5..10, None);
    assert_all(a, b, None);
}

#[test]
fn test_same_head() {
    let nodes = Nodes::new(&[3, 1, 4]);
    let a = nodes.chain(0..3, None);
    assert_all(a, a, a);

    let single = Nodes::new(&[7]);
    let only = single.chain(0..1, None);
    assert_all(only, only, only);
}

#[test]
fn test_one_list_is_suffix_of_other() {
    let nodes = Nodes::new(&[1, 2, 3, 4, 5]);
    let a = nodes.chain(0..5, None);
    let b = Some(nodes.ptr(3));
    assert_all(a, b, b);
    assert_all(b, a, b);
}

#[test]
fn test_shared_last_node_only() {
    let nodes = Nodes::new(&[1, 2, 3, 4, 5, 6, 7]);
    let last = nodes.chain(6..7, None);
    let a = nodes.chain(0..4, last);
    let b = nodes.chain(4..6, last);
    assert_all(a, b, last);
}

#[test]
fn test_repeated_calls_are_idempotent() {
    let nodes = Nodes::new(&[2, 4, 4, 1, 8, 5, 0, 1]);
    let shared = nodes.chain(0..2, None);
    let a = nodes.chain(2..5, shared);
    let b = nodes.chain(5..8, shared);

    let first = unsafe { find_intersection(a, b) };
    for _ in 0..3 {
        assert_eq!(unsafe { find_intersection(a, b) }, first);
        assert_eq!(find_all(a, b), find_all(a, b));
    }
}

#[test]
fn test_inputs_are_unchanged() {
    let nodes = Nodes::new(&[2, 4, 4, 1, 8, 5, 0, 1]);
    let shared = nodes.chain(0..2, None);
    let a = nodes.chain(2..5, shared);
    let b = nodes.chain(5..8, shared);

    let before = (snapshot(a), snapshot(b));
    unsafe { find_intersection(a, b) };
    find_all(a, b);
    find_all(b, a);
    assert_eq!((snapshot(a), snapshot(b)), before);
}

#[test]
fn test_linked_list_intersection() {
    let mut c1 = SingleNode::new(2);
    let mut c2 = SingleNode::new(4);
    let mut a1 = SingleNode::new(4);
    let mut a2 = SingleNode::new(1);
    let mut b1 = SingleNode::new(5);

    let mut tail = LinkedList::<SingleNode<i32>>::new();
    tail.push((&mut c2).into());
    tail.push((&mut c1).into());

    let mut a = LinkedList::<SingleNode<i32>>::new();
    a.push((&mut a2).into());
    a.push((&mut a1).into());
    a.join(tail.head());

    let mut b = LinkedList::<SingleNode<i32>>::new();
    b.push((&mut b1).into());
    b.join(tail.head());

    assert_eq!(a.count(), 4);
    assert_eq!(b.count(), 3);
    assert_eq!(a.intersection(&b), tail.head());
    assert_eq!(b.intersection(&a), tail.head());
    assert_eq!(a.intersection(&LinkedList::<SingleNode<i32>>::new()), None);
}

#[test]
fn test_cyclic_list_is_rejected() {
    let nodes = Nodes::new(&[1, 2, 3, 4, 5]);
    let a = nodes.chain(0..3, None);
    let loop_start = nodes.chain(3..5, None);
    // 4 -> 5 -> 4
    nodes.chain(4..5, loop_start);

    let finder = IntersectionFinder::new().check_cycles(true);
    assert_eq!(
        unsafe { finder.find(loop_start, a) },
        Err(IntersectionError::Cyclic { side: Side::First })
    );
    assert_eq!(
        unsafe { finder.find(a, loop_start) },
        Err(IntersectionError::Cyclic { side: Side::Second })
    );
}

#[test]
fn test_self_loop_is_rejected() {
    let nodes = Nodes::new(&[1, 2]);
    let a = nodes.chain(0..1, None);
    nodes.chain(0..1, a);
    let b = nodes.chain(1..2, None);

    let finder = IntersectionFinder::new().check_cycles(true);
    assert_eq!(
        unsafe { finder.find(a, b) },
        Err(IntersectionError::Cyclic { side: Side::First })
    );
}

#[test]
fn test_strategies_agree_on_random_lists() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..200 {
        let len_a = rng.random_range(0..12usize);
        let len_b = rng.random_range(0..12usize);
        let len_shared = rng.random_range(0..12usize);
        let total = len_a + len_b + len_shared;

        let values: Vec<i32> = (0..total).map(|_| rng.random_range(0..4)).collect();
        let nodes = Nodes::new(&values);
        let shared = nodes.chain(0..len_shared, None);
        let a = nodes.chain(len_shared..len_shared + len_a, shared);
        let b = nodes.chain(len_shared + len_a..total, shared);

        let before = (snapshot(a), snapshot(b));
        assert_all(a, b, shared);
        assert_all(b, a, shared);
        assert_eq!((snapshot(a), snapshot(b)), before);
    }
}
