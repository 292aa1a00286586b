//! Error types for intersection search

use core::fmt;

use thiserror::Error;

/// Which of the two input lists an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The list passed first.
    First,
    /// The list passed second.
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => f.write_str("first"),
            Side::Second => f.write_str("second"),
        }
    }
}

/// Errors reported by a checking [`IntersectionFinder`](super::IntersectionFinder).
///
/// Finding no intersection is not an error.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntersectionError {
    /// One of the input lists loops back on itself.
    #[error("the {side} list contains a cycle")]
    Cyclic {
        /// The list that was found to be cyclic
        side: Side,
    },
}

/// Result type alias for intersection search
pub type Result<T> = core::result::Result<T, IntersectionError>;
