//! `tc-graph`: directed weighted graph and minimum-weight path search.
//!
//! This is the path-search capability the router compiles into.  It knows
//! nothing about stops or routes: vertices are dense indices, edges carry a
//! non-negative `f64` weight, and parallel edges are allowed.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                   |
//! |------------|------------------------------------------------------------|
//! | [`graph`]  | `DirectedWeightedGraph` (CSR), `GraphBuilder`              |
//! | [`router`] | `PathFinder` trait, `Path`, `DijkstraRouter`               |
//! | [`error`]  | `GraphError`, `GraphResult<T>`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod graph;
pub mod router;


pub use error::{GraphError, GraphResult};
pub use graph::{DirectedWeightedGraph, Edge, GraphBuilder};
pub use router::{DijkstraRouter, Path, PathFinder};
