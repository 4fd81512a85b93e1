//! `tc-router`: from catalogue to itinerary.
//!
//! # Lifecycle
//!
//! 1. Populate a [`Catalogue`](tc_catalogue::Catalogue).
//! 2. [`GraphCompiler::compile`] it once into an immutable
//!    [`CompiledNetwork`].  Compilation is all-or-nothing.
//! 3. Ask the snapshot for any number of itineraries with
//!    [`CompiledNetwork::build_path`], or go through [`RequestHandler`] for
//!    all three query kinds at once.
//!
//! A snapshot never observes later catalogue mutations; recompile after
//! changing the catalogue.  [`CompiledNetwork::is_current_for`] tells the
//! two apart.
//!
//! # Crate layout
//!
//! | Module        | Contents                                              |
//! |---------------|-------------------------------------------------------|
//! | [`settings`]  | `RoutingSettings` (wait time, bus velocity)           |
//! | [`compiler`]  | `GraphCompiler`, `CompiledNetwork`, `EdgeInfo`        |
//! | [`itinerary`] | `Itinerary`, `ItineraryLeg`, path translation         |
//! | [`handler`]   | `RequestHandler` query façade                         |
//! | [`error`]     | `RouterError`, `RouterResult<T>`                      |

pub mod compiler;
pub mod error;
pub mod handler;
pub mod itinerary;
pub mod settings;


pub use compiler::{CompiledNetwork, EdgeInfo, GraphCompiler};
pub use error::{RouterError, RouterResult};
pub use handler::RequestHandler;
pub use itinerary::{Itinerary, ItineraryLeg};
pub use settings::RoutingSettings;
