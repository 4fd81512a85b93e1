//! The transit catalogue.
//!
//! Lifecycle: populate with `add_*`, then compile a routing snapshot and
//! query.  The catalogue itself stays queryable at every point.

use std::collections::BTreeSet;
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use tc_core::{Coordinates, RouteId, StopId};

use crate::distance::DistanceTable;
use crate::model::{Route, RouteInfo, Stop};
use crate::{CatalogueError, CatalogueResult};

/// Source of [`Catalogue::instance`] values.
static NEXT_INSTANCE: AtomicU64 = AtomicU64::new(0);

fn next_instance() -> u64 {
    NEXT_INSTANCE.fetch_add(1, Ordering::Relaxed)
}

/// Owns stops, routes, and the distance table.
#[derive(Debug)]
pub struct Catalogue {
    /// Unique per catalogue value, clones included.
    instance: u64,

    stops:  Vec<Stop>,
    routes: Vec<Route>,

    stop_index:  FxHashMap<String, StopId>,
    route_index: FxHashMap<String, RouteId>,

    /// Routes touching each stop, indexed by `StopId`.
    routes_through_stop: Vec<BTreeSet<RouteId>>,

    distances: DistanceTable,

    /// Bumped on every successful mutation.
    revision: u64,
}

impl Default for Catalogue {
    fn default() -> Self {
        Self {
            instance: next_instance(),
            stops: Vec::new(),
            routes: Vec::new(),
            stop_index: FxHashMap::default(),
            route_index: FxHashMap::default(),
            routes_through_stop: Vec::new(),
            distances: DistanceTable::default(),
            revision: 0,
        }
    }
}

impl Clone for Catalogue {
    /// The clone gets its own instance, so snapshots of the original never
    /// pass as current for it.
    fn clone(&self) -> Self {
        Self {
            instance: next_instance(),
            stops: self.stops.clone(),
            routes: self.routes.clone(),
            stop_index: self.stop_index.clone(),
            route_index: self.route_index.clone(),
            routes_through_stop: self.routes_through_stop.clone(),
            distances: self.distances.clone(),
            revision: self.revision,
        }
    }
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Add a stop and return its id.
    ///
    /// # Errors
    /// [`CatalogueError::DuplicateStop`] if the name is taken.
    pub fn add_stop(&mut self, name: impl Into<String>, coordinates: Coordinates) -> CatalogueResult<StopId> {
        let name = name.into();
        if self.stop_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateStop(name));
        }
        let id = StopId::try_from(self.stops.len())
            .map_err(|_| CatalogueError::CapacityExceeded("stops"))?;

        debug!(stop = %name, %coordinates, "adding stop");
        self.stop_index.insert(name.clone(), id);
        self.stops.push(Stop { name, coordinates });
        self.routes_through_stop.push(BTreeSet::new());
        self.revision += 1;
        Ok(id)
    }

    /// Record the road distance `from → to` in metres.
    ///
    /// The reverse direction is filled in as well unless it was set
    /// explicitly before; see [`DistanceTable`].
    ///
    /// # Errors
    /// [`CatalogueError::UnknownStop`] if either stop is missing.
    pub fn add_distance(&mut self, from: &str, to: &str, meters: u32) -> CatalogueResult<()> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        debug!(from, to, meters, "adding distance");
        self.distances.set(from_id, to_id, meters);
        self.revision += 1;
        Ok(())
    }

    /// Add a route over existing stops and return its id.
    ///
    /// # Errors
    /// - [`CatalogueError::DuplicateRoute`] if the name is taken.
    /// - [`CatalogueError::UnknownStop`] if any stop is missing.
    /// - [`CatalogueError::EmptyRoute`] for an empty stop list.
    /// - [`CatalogueError::OpenRoundTrip`] for a round trip whose first and
    ///   last stops differ.
    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: impl Into<String>,
        stops: &[S],
        is_roundtrip: bool,
    ) -> CatalogueResult<RouteId> {
        let name = name.into();
        if self.route_index.contains_key(&name) {
            return Err(CatalogueError::DuplicateRoute(name));
        }
        if stops.is_empty() {
            return Err(CatalogueError::EmptyRoute(name));
        }

        // Resolve everything before touching any state.
        let stop_ids = stops
            .iter()
            .map(|s| self.require_stop(s.as_ref()))
            .collect::<CatalogueResult<Vec<_>>>()?;

        if let (true, Some(first), Some(last)) = (is_roundtrip, stop_ids.first(), stop_ids.last()) {
            if first != last {
                return Err(CatalogueError::OpenRoundTrip {
                    route: name,
                    first: self.stops[first.index()].name.clone(),
                    last:  self.stops[last.index()].name.clone(),
                });
            }
        }

        let id = RouteId::try_from(self.routes.len())
            .map_err(|_| CatalogueError::CapacityExceeded("routes"))?;

        debug!(route = %name, stops = stop_ids.len(), is_roundtrip, "adding route");
        for stop in &stop_ids {
            self.routes_through_stop[stop.index()].insert(id);
        }
        self.route_index.insert(name.clone(), id);
        self.routes.push(Route { name, stops: stop_ids, is_roundtrip });
        self.revision += 1;
        Ok(id)
    }

    // ── Lookup ────────────────────────────────────────────────────────────

    pub fn stop_id(&self, name: &str) -> Option<StopId> {
        self.stop_index.get(name).copied()
    }

    pub fn route_id(&self, name: &str) -> Option<RouteId> {
        self.route_index.get(name).copied()
    }

    pub fn stop(&self, name: &str) -> Option<&Stop> {
        self.stop_id(name).map(|id| &self.stops[id.index()])
    }

    pub fn route(&self, name: &str) -> Option<&Route> {
        self.route_id(name).map(|id| &self.routes[id.index()])
    }

    /// # Panics
    /// Panics if `id` was not issued by this catalogue.
    #[inline]
    pub fn stop_by_id(&self, id: StopId) -> &Stop {
        &self.stops[id.index()]
    }

    /// All stops in insertion order.
    pub fn stops(&self) -> impl Iterator<Item = (StopId, &Stop)> + '_ {
        self.stops
            .iter()
            .enumerate()
            .map(|(i, s)| (StopId(i as u32), s))
    }

    /// All routes in insertion order.
    pub fn routes(&self) -> impl Iterator<Item = (RouteId, &Route)> + '_ {
        self.routes
            .iter()
            .enumerate()
            .map(|(i, r)| (RouteId(i as u32), r))
    }

    pub fn stop_count(&self) -> usize { self.stops.len() }
    pub fn route_count(&self) -> usize { self.routes.len() }
    pub fn revision(&self) -> u64 { self.revision }

    /// Process-unique identity of this catalogue.  Together with
    /// [`revision`](Self::revision) it pins down one exact catalogue state.
    pub fn instance(&self) -> u64 { self.instance }

    pub fn distances(&self) -> &DistanceTable {
        &self.distances
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// Road distance `from → to` in metres.
    ///
    /// # Errors
    /// [`CatalogueError::UnknownStop`] for a missing stop,
    /// [`CatalogueError::NoDistanceData`] if neither an explicit nor a
    /// fallback value exists.
    pub fn distance(&self, from: &str, to: &str) -> CatalogueResult<u32> {
        let from_id = self.require_stop(from)?;
        let to_id = self.require_stop(to)?;
        self.distance_between(from_id, to_id)
    }

    /// Id-based variant of [`distance`](Self::distance).
    pub fn distance_between(&self, from: StopId, to: StopId) -> CatalogueResult<u32> {
        self.distances.get(from, to).ok_or_else(|| CatalogueError::NoDistanceData {
            from: self.stops[from.index()].name.clone(),
            to:   self.stops[to.index()].name.clone(),
        })
    }

    /// Statistics over the route's full traversal.
    ///
    /// # Errors
    /// [`CatalogueError::UnknownRoute`] for a missing route,
    /// [`CatalogueError::NoDistanceData`] if a hop has no distance.
    pub fn route_info(&self, name: &str) -> CatalogueResult<RouteInfo> {
        let route = self
            .route(name)
            .ok_or_else(|| CatalogueError::UnknownRoute(name.to_owned()))?;

        let mut traversal: Vec<StopId> = Vec::with_capacity(route.traversal_len());
        traversal.extend(route.traversal());
        let unique: FxHashSet<StopId> = traversal.iter().copied().collect();

        let mut route_length = 0u64;
        let mut geo_length = 0.0f64;
        for hop in traversal.windows(2) {
            route_length += u64::from(self.distance_between(hop[0], hop[1])?);
            geo_length += self
                .stop_by_id(hop[0])
                .coordinates
                .distance_m(self.stop_by_id(hop[1]).coordinates);
        }

        let curvature = if geo_length > 0.0 {
            route_length as f64 / geo_length
        } else {
            0.0
        };

        Ok(RouteInfo {
            stop_count: traversal.len(),
            unique_stop_count: unique.len(),
            route_length,
            curvature,
        })
    }

    /// Names of the routes through a stop, sorted.
    ///
    /// `None` means the stop does not exist; an existing stop with no
    /// routes yields an empty set.
    pub fn routes_through_stop(&self, name: &str) -> Option<BTreeSet<&str>> {
        let id = self.stop_id(name)?;
        Some(
            self.routes_through_stop[id.index()]
                .iter()
                .map(|r| self.routes[r.index()].name.as_str())
                .collect(),
        )
    }

    // ── Helpers ───────────────────────────────────────────────────────────

    fn require_stop(&self, name: &str) -> CatalogueResult<StopId> {
        self.stop_id(name)
            .ok_or_else(|| CatalogueError::UnknownStop(name.to_owned()))
    }
}
