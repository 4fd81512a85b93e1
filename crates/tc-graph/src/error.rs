//! Graph-subsystem error type.

use thiserror::Error;

use tc_core::VertexId;

/// Errors produced by `tc-graph`.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GraphError {
    #[error("vertex {vertex} out of range for a graph of {vertex_count} vertices")]
    VertexNotFound { vertex: VertexId, vertex_count: usize },

    #[error("edge weight must be finite and non-negative, got {0}")]
    InvalidWeight(f64),

    #[error("edge count exceeds the id space")]
    TooManyEdges,
}

pub type GraphResult<T> = Result<T, GraphError>;
