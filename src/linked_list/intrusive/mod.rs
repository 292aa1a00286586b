//! # Intrusive Linked List
//!
//! This module provides an implementation of an intrusive singly linked list.
//!
//! ## Core Components
//!
//! - [`traits`]: Defines the core traits for the linked list, such as `List`, `Link`, and `Node`.
//! - [`list::LinkedList`]: A generic implementation of a linked list.
//! - [`single::SingleLink`]: The link type embedded in every node.
//! - [`single::SingleNode`]: A ready-made node carrying a data field.
//!
//! Custom nodes derive their link traits with `#[derive(Node)]` from a
//! `link: SingleLink` field and an optional `data` field.
//!
//! ## Safety
//!
//! This implementation uses `unsafe` code extensively to manage raw pointers.
//! The user of this module is responsible for upholding several invariants:
//!
//! - Nodes must outlive every list that can reach them.
//! - A chain must be acyclic.
//! - When iterating or searching, no list reaching the same nodes may be modified.
//! - Lists may share a suffix of nodes, but only one of them should relink it.

pub mod traits;
pub mod single;
pub mod list;
pub mod iter;

pub use list_intersection_derive::Node;
