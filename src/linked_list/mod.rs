//! Singly linked lists whose nodes can be shared between lists.
//!
//! Two representations are provided:
//!
//! - [`intrusive`]: nodes embed their link and are owned by the caller. Lists
//!   are chains of raw pointers, so two lists can converge on the same node.
//! - [`shared`]: a safe persistent list where tails are shared through `Arc`.
//!
//! # Examples
//!
//! ```
//! use list_intersection::linked_list::intrusive::{
//!     list::LinkedList,
//!     single::SingleNode,
//!     traits::{List, NodeWithData},
//! };
//! use core::ptr::NonNull;
//!
//! let mut shared = SingleNode::new(2);
//! let mut a1 = SingleNode::new(1);
//! let mut b1 = SingleNode::new(3);
//!
//! let mut tail = LinkedList::<SingleNode<i32>>::new();
//! tail.push(NonNull::from(&mut shared));
//!
//! let mut a = LinkedList::<SingleNode<i32>>::new();
//! a.push(NonNull::from(&mut a1));
//! a.join(tail.head());
//!
//! let mut b = LinkedList::<SingleNode<i32>>::new();
//! b.push(NonNull::from(&mut b1));
//! b.join(tail.head());
//!
//! assert_eq!(a.count(), 2);
//! assert_eq!(b.count(), 2);
//!
//! let meet = a.intersection(&b).unwrap();
//! assert_eq!(Some(meet), tail.head());
//! assert_eq!(unsafe { *meet.as_ref().data() }, 2);
//! ```
pub mod intrusive;
pub mod shared;
