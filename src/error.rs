//! Error types shared by graph storage, traversal and path reconstruction.

use thiserror::Error;

use crate::graph::VertexId;

/// Errors produced by graph construction and traversal.
///
/// An aborted traversal is not an error: it is reported as
/// [`Outcome::Aborted`](crate::graph::traversal::Outcome::Aborted) inside `Ok`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    /// The id is outside `[0, node_count)` for the graph it was used with.
    #[error("invalid vertex {id}: graph has {node_count} vertices")]
    InvalidVertex {
        /// The offending id.
        id: VertexId,
        /// Declared capacity of the graph.
        node_count: usize,
    },

    /// No route from `from` to `to` in the parent forest of the last run.
    #[error("no path from vertex {from} to vertex {to}")]
    NoPath {
        /// Start of the requested path.
        from: VertexId,
        /// End of the requested path.
        to: VertexId,
    },

    /// Growing graph storage failed.
    #[error("memory allocation failed")]
    AllocationFailure,
}

impl From<std::collections::TryReserveError> for GraphError {
    fn from(_: std::collections::TryReserveError) -> Self {
        GraphError::AllocationFailure
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GraphError>;
