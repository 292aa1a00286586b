#![no_std]

extern crate alloc;

pub mod intersection;
pub mod linked_list;

pub use intersection::{
    IntersectionError, IntersectionFinder, Result, Side, Strategy, find_intersection,
    find_shared_intersection,
};
