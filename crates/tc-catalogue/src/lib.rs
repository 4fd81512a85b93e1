//! `tc-catalogue`: the authoritative store of stops, routes, and distances.
//!
//! # Crate layout
//!
//! | Module        | Contents                                             |
//! |---------------|------------------------------------------------------|
//! | [`catalogue`] | `Catalogue`: add/query operations, route statistics  |
//! | [`distance`]  | `DistanceTable`: directional metres with fallback    |
//! | [`model`]     | `Stop`, `Route`, `RouteInfo`                         |
//! | [`error`]     | `CatalogueError`, `CatalogueResult<T>`               |
//!
//! Stops and routes live in arenas addressed by [`StopId`](tc_core::StopId)
//! and [`RouteId`](tc_core::RouteId); names resolve through hash indexes.
//! Every mutation bumps [`Catalogue::revision`], which compiled routing
//! snapshots use to detect that they have gone stale.

pub mod catalogue;
pub mod distance;
pub mod error;
pub mod model;

#[cfg(test)]
mod tests;

pub use catalogue::Catalogue;
pub use distance::DistanceTable;
pub use error::{CatalogueError, CatalogueResult};
pub use model::{Route, RouteInfo, Stop};
