//! Catalogue error type.

use thiserror::Error;

/// Errors produced by `tc-catalogue`.
///
/// A failed operation never leaves the catalogue partially updated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogueError {
    #[error("stop {0:?} already exists")]
    DuplicateStop(String),

    #[error("route {0:?} already exists")]
    DuplicateRoute(String),

    #[error("unknown stop {0:?}")]
    UnknownStop(String),

    #[error("unknown route {0:?}")]
    UnknownRoute(String),

    #[error("no distance data from {from:?} to {to:?}")]
    NoDistanceData { from: String, to: String },

    #[error("route {0:?} has no stops")]
    EmptyRoute(String),

    #[error("round-trip route {route:?} starts at {first:?} but ends at {last:?}")]
    OpenRoundTrip { route: String, first: String, last: String },

    #[error("too many {0} for the id space")]
    CapacityExceeded(&'static str),
}

pub type CatalogueResult<T> = Result<T, CatalogueError>;
