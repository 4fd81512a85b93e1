//! `tc-core`: foundational types shared by every `tc-*` crate.
//!
//! This crate has no `tc-*` dependencies and a single required external one
//! (`thiserror`), plus optional `serde`.
//!
//! # What lives here
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`ids`]   | `StopId`, `RouteId`, `VertexId`, `EdgeId`         |
//! | [`geo`]   | `Coordinates`, great-circle distance              |
//! | [`error`] | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                             |
//! |---------|----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod error;
pub mod geo;
pub mod ids;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{CoreError, CoreResult};
pub use geo::{Coordinates, compute_distance};
pub use ids::{EdgeId, RouteId, StopId, VertexId};
