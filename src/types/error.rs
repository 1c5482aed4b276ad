//! Error types for the graphwalk library.

use std::fmt::Debug;

use thiserror::Error;

/// All errors that can occur in the graphwalk library.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Vertex not found by ID.
    #[error("Vertex {0} not found")]
    NotFound(String),

    /// A depth-first search exhausted its stack without reaching the target.
    #[error("No path from {start} to {target}")]
    PathNotFound { start: String, target: String },

    /// The graph contains a cycle, so it has no topological order.
    #[error("Graph contains a cycle")]
    CycleDetected,

    /// A command-line edge argument could not be parsed.
    #[error("Invalid edge '{0}', expected FROM:TO")]
    InvalidEdgeSpec(String),
}

impl GraphError {
    pub(crate) fn not_found<V: Debug>(id: &V) -> Self {
        GraphError::NotFound(format!("{:?}", id))
    }

    pub(crate) fn path_not_found<V: Debug>(start: &V, target: &V) -> Self {
        GraphError::PathNotFound {
            start: format!("{:?}", start),
            target: format!("{:?}", target),
        }
    }
}

/// Convenience result type for graphwalk operations.
pub type GraphResult<T> = Result<T, GraphError>;
