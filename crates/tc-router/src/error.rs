//! Router error type.

use thiserror::Error;

use tc_core::{CoreError, EdgeId};
use tc_graph::GraphError;

/// Errors produced by `tc-router`.
///
/// "No path" is not an error; see [`CompiledNetwork::build_path`](crate::CompiledNetwork::build_path).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RouterError {
    #[error("route {route:?} has no distance from {from:?} to {to:?}")]
    MissingDistance { route: String, from: String, to: String },

    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("path uses edge {0} which has no compiled metadata")]
    UnknownEdge(EdgeId),

    #[error(transparent)]
    Config(#[from] CoreError),

    #[error("graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type RouterResult<T> = Result<T, RouterError>;
