//! Error types for graph operations.
//!
//! The core has a deliberately small error taxonomy: the only failure mode
//! is a vertex index outside `[0, vertex_count)`. Conditions like removing
//! or querying an edge that does not exist are normal outcomes (a no-op or
//! a `None` return), not errors.

use thiserror::Error;

/// Result type for graph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for graph operations.
///
/// Errors are raised synchronously and never caught internally; they
/// surface to the immediate caller and terminate the current operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Error {
    /// A vertex index argument fell outside `[0, vertex_count)`.
    ///
    /// Indices are `usize`, so negative indices are unrepresentable; only
    /// the upper bound is checked at runtime.
    #[error("vertex index {index} out of range for graph with {vertex_count} vertices")]
    OutOfRange {
        /// The offending vertex index.
        index: usize,
        /// The number of vertices in the graph.
        vertex_count: usize,
    },
}

/// Check a vertex index against the graph's vertex count.
pub(crate) fn check_vertex(index: usize, vertex_count: usize) -> Result<()> {
    if index < vertex_count {
        Ok(())
    } else {
        Err(Error::OutOfRange {
            index,
            vertex_count,
        })
    }
}
