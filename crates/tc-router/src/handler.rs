//! Query façade over a catalogue and its compiled snapshot.
//!
//! Answers the three query kinds an outer request layer needs: route
//! statistics, routes through a stop, and itineraries.  "Not found" is a
//! value here, never an error.

use std::collections::BTreeSet;

use tc_catalogue::{Catalogue, CatalogueError, CatalogueResult, RouteInfo};
use tc_graph::PathFinder;

use crate::compiler::CompiledNetwork;
use crate::itinerary::Itinerary;
use crate::RouterResult;

/// Read-only view pairing a catalogue with a snapshot compiled from it.
pub struct RequestHandler<'a, F: PathFinder> {
    catalogue: &'a Catalogue,
    network:   &'a CompiledNetwork<F>,
}

impl<'a, F: PathFinder> RequestHandler<'a, F> {
    /// # Panics
    /// Panics if `network` was compiled from an earlier state of
    /// `catalogue`.  Querying a stale snapshot is a caller bug.
    pub fn new(catalogue: &'a Catalogue, network: &'a CompiledNetwork<F>) -> Self {
        assert!(
            network.is_current_for(catalogue),
            "compiled network is stale: recompile after mutating the catalogue"
        );
        Self { catalogue, network }
    }

    /// Statistics for a route; `Ok(None)` if the route does not exist.
    ///
    /// # Errors
    /// [`CatalogueError::NoDistanceData`] if a hop of the route has no
    /// distance.
    pub fn bus_stat(&self, route: &str) -> CatalogueResult<Option<RouteInfo>> {
        match self.catalogue.route_info(route) {
            Ok(info) => Ok(Some(info)),
            Err(CatalogueError::UnknownRoute(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Sorted route names through a stop; `None` if the stop does not exist.
    pub fn buses_by_stop(&self, stop: &str) -> Option<BTreeSet<&'a str>> {
        self.catalogue.routes_through_stop(stop)
    }

    /// Fastest itinerary; `Ok(None)` if unreachable.
    ///
    /// # Errors
    /// [`RouterError::UnknownStop`](crate::RouterError::UnknownStop) for a
    /// missing stop.
    pub fn route(&self, from: &str, to: &str) -> RouterResult<Option<Itinerary>> {
        self.network.build_path(from, to)
    }
}
