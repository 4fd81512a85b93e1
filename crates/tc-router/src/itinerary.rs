//! Raw graph path → rider itinerary.

use tracing::trace;

use tc_graph::PathFinder;

use crate::compiler::CompiledNetwork;
use crate::{RouterError, RouterResult};

/// One uninterrupted ride.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItineraryLeg {
    pub route:       String,
    pub board_stop:  String,
    pub alight_stop: String,
    pub span_count:  u32,
    /// Minutes on board, waiting excluded.
    pub ride_time:   f64,
}

/// The fastest way between two stops.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    pub legs: Vec<ItineraryLeg>,
    /// Minutes waited before each leg.
    pub wait_time: u32,
    /// Total minutes as reported by the path search, waits included.
    pub total_time: f64,
}

impl Itinerary {
    /// `true` for the zero-leg itinerary from a stop to itself.
    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }
}

impl<F: PathFinder> CompiledNetwork<F> {
    /// Fastest itinerary from `from` to `to`.
    ///
    /// Returns `Ok(None)` when no sequence of rides connects the stops.
    /// From a stop to itself the answer is an itinerary with no legs and
    /// zero total time.
    ///
    /// # Errors
    /// [`RouterError::UnknownStop`] if either name is not a stop of the
    /// compiled catalogue, [`RouterError::UnknownEdge`] if the path finder
    /// returns an edge this network never compiled.
    pub fn build_path(&self, from: &str, to: &str) -> RouterResult<Option<Itinerary>> {
        let from_vertex = self
            .vertex(from)
            .ok_or_else(|| RouterError::UnknownStop(from.to_owned()))?;
        let to_vertex = self
            .vertex(to)
            .ok_or_else(|| RouterError::UnknownStop(to.to_owned()))?;

        let Some(path) = self.finder.find_min_path(&self.graph, from_vertex, to_vertex) else {
            trace!(from, to, "no path");
            return Ok(None);
        };
        trace!(from, to, legs = path.edges.len(), total = path.total_weight, "path found");

        let legs = path
            .edges
            .iter()
            .map(|&id| {
                let info = self.edge_info(id).ok_or(RouterError::UnknownEdge(id))?;
                Ok(ItineraryLeg {
                    route:       self.route_name(info.route).to_owned(),
                    board_stop:  self.stop_name(info.board_stop).to_owned(),
                    alight_stop: self.stop_name(info.alight_stop).to_owned(),
                    span_count:  info.span_count,
                    ride_time:   info.ride_time,
                })
            })
            .collect::<RouterResult<Vec<_>>>()?;

        Ok(Some(Itinerary {
            legs,
            wait_time: self.settings.bus_wait_time,
            total_time: path.total_weight,
        }))
    }
}
