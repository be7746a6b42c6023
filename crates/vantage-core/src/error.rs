//! Error types for state tree operations.

use thiserror::Error;

/// Errors from writing into the nested state tree.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    /// The path has no segments, so there is no key to assign.
    #[error("path is empty")]
    Empty,
    /// An intermediate segment holds a non-object value, so the write
    /// cannot descend without destroying it.
    #[error("segment '{segment}' at depth {depth} is not an object")]
    Blocked {
        /// The segment whose value is not an object.
        segment: String,
        /// Zero-based depth of the blocking segment.
        depth: usize,
    },
}
