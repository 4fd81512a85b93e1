//! Catalogue → weighted directed graph.
//!
//! # Edge rules
//!
//! One vertex per stop, numbered like the stop arena.  Each edge means
//! "board route R at stop i and ride without getting off until stop j".
//!
//! - **Round trip** `s0 .. s(n-1)` with `s(n-1) == s0`: every `i < j`
//!   except `(0, n-1)`, which would be the whole loop back to the start.
//! - **Out and back** `s0 .. s(n-1)`: every `i != j`.  `i < j` rides the
//!   outward leg and sums forward distances; `i > j` rides the return leg
//!   and sums `s(k+1) → s(k)` distances.
//!
//! Pairs whose endpoints are the same stop are skipped, so no self loops
//! exist.  Edge weight is `wait + ride` minutes.
//!
//! Hop distances are accumulated into per-route prefix sums, so each pair
//! costs O(1) after an O(n) scan.

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use tc_catalogue::{Catalogue, Route};
use tc_core::{EdgeId, RouteId, StopId, VertexId};
use tc_graph::{DijkstraRouter, DirectedWeightedGraph, GraphBuilder, PathFinder};

use crate::settings::RoutingSettings;
use crate::{RouterError, RouterResult};

// ── EdgeInfo ──────────────────────────────────────────────────────────────────

/// What one compiled edge means to a rider.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EdgeInfo {
    pub route:       RouteId,
    pub board_stop:  StopId,
    pub alight_stop: StopId,
    /// Stop-to-stop hops covered without getting off.
    pub span_count:  u32,
    /// Road metres ridden.
    pub distance:    u64,
    /// Ride minutes: edge weight minus the wait time.
    pub ride_time:   f64,
}

// ── CompiledNetwork ───────────────────────────────────────────────────────────

/// Immutable routing snapshot of a catalogue.
///
/// Holds everything a query needs (graph, per-edge metadata, name tables)
/// so it can be shared between readers independently of the catalogue.
/// Only [`GraphCompiler`] creates one.
#[derive(Clone, Debug)]
pub struct CompiledNetwork<F: PathFinder = DijkstraRouter> {
    pub(crate) settings:    RoutingSettings,
    pub(crate) graph:       DirectedWeightedGraph,
    pub(crate) edge_info:   FxHashMap<EdgeId, EdgeInfo>,
    pub(crate) stop_names:  Vec<String>,
    pub(crate) stop_index:  FxHashMap<String, VertexId>,
    pub(crate) route_names: Vec<String>,
    pub(crate) finder:      F,
    catalogue_instance:     u64,
    revision:               u64,
}

impl<F: PathFinder> CompiledNetwork<F> {
    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    pub fn graph(&self) -> &DirectedWeightedGraph {
        &self.graph
    }

    pub fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Metadata recorded for an edge id the graph handed out.
    pub fn edge_info(&self, id: EdgeId) -> Option<&EdgeInfo> {
        self.edge_info.get(&id)
    }

    pub fn vertex(&self, stop_name: &str) -> Option<VertexId> {
        self.stop_index.get(stop_name).copied()
    }

    pub fn stop_name(&self, stop: StopId) -> &str {
        &self.stop_names[stop.index()]
    }

    pub fn route_name(&self, route: RouteId) -> &str {
        &self.route_names[route.index()]
    }

    /// `true` if this snapshot was compiled from `catalogue` itself (not a
    /// clone or another catalogue) and it has not been mutated since.
    pub fn is_current_for(&self, catalogue: &Catalogue) -> bool {
        self.catalogue_instance == catalogue.instance() && self.revision == catalogue.revision()
    }
}

// ── GraphCompiler ─────────────────────────────────────────────────────────────

/// One-shot transformation of a [`Catalogue`] into a [`CompiledNetwork`].
///
/// # Example
///
/// ```
/// use tc_catalogue::Catalogue;
/// use tc_core::Coordinates;
/// use tc_router::{GraphCompiler, RoutingSettings};
///
/// let mut c = Catalogue::new();
/// c.add_stop("A", Coordinates::new(55.0, 37.0)).unwrap();
/// c.add_stop("B", Coordinates::new(55.1, 37.0)).unwrap();
/// c.add_distance("A", "B", 1_200).unwrap();
/// c.add_route("14", &["A", "B"], false).unwrap();
///
/// let settings = RoutingSettings::new(6, 40.0).unwrap();
/// let net = GraphCompiler::new(settings).unwrap().compile(&c).unwrap();
/// assert_eq!(net.edge_count(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GraphCompiler {
    settings: RoutingSettings,
}

impl GraphCompiler {
    /// # Errors
    /// [`RouterError::Config`] if the settings are invalid.
    pub fn new(settings: RoutingSettings) -> RouterResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    /// Compile with the default [`DijkstraRouter`].
    ///
    /// # Errors
    /// [`RouterError::MissingDistance`] if any hop a route needs has no
    /// distance, even via the reverse fallback.
    pub fn compile(&self, catalogue: &Catalogue) -> RouterResult<CompiledNetwork> {
        self.compile_with(catalogue, DijkstraRouter)
    }

    /// Compile with a caller-supplied path finder.
    ///
    /// # Errors
    /// See [`compile`](Self::compile).
    pub fn compile_with<F: PathFinder>(
        &self,
        catalogue: &Catalogue,
        finder: F,
    ) -> RouterResult<CompiledNetwork<F>> {
        let mut builder = GraphBuilder::new(catalogue.stop_count());
        let mut edge_info = FxHashMap::default();

        for (route_id, route) in catalogue.routes() {
            let before = builder.edge_count();
            self.compile_route(catalogue, route_id, route, &mut builder, &mut edge_info)?;
            debug!(
                route = %route.name,
                stops = route.stops.len(),
                is_roundtrip = route.is_roundtrip,
                edges = builder.edge_count() - before,
                "compiled route"
            );
        }

        let graph = builder.build();
        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            routes = catalogue.route_count(),
            "compiled transit graph"
        );

        let stop_names: Vec<String> = catalogue.stops().map(|(_, s)| s.name.clone()).collect();
        let stop_index = catalogue
            .stops()
            .map(|(id, s)| (s.name.clone(), VertexId::from(id)))
            .collect();
        let route_names = catalogue.routes().map(|(_, r)| r.name.clone()).collect();

        Ok(CompiledNetwork {
            settings: self.settings,
            graph,
            edge_info,
            stop_names,
            stop_index,
            route_names,
            finder,
            catalogue_instance: catalogue.instance(),
            revision: catalogue.revision(),
        })
    }

    fn compile_route(
        &self,
        catalogue: &Catalogue,
        route_id: RouteId,
        route: &Route,
        builder: &mut GraphBuilder,
        edge_info: &mut FxHashMap<EdgeId, EdgeInfo>,
    ) -> RouterResult<()> {
        let stops = &route.stops;
        let n = stops.len();
        // A loop of one or two entries has no pair besides the excluded one.
        if n < 2 || (route.is_roundtrip && n < 3) {
            return Ok(());
        }

        let forward = prefix_sums(catalogue, route, (0..n - 1).map(|k| (stops[k], stops[k + 1])))?;
        let backward = if route.is_roundtrip {
            Vec::new()
        } else {
            prefix_sums(catalogue, route, (0..n - 1).map(|k| (stops[k + 1], stops[k])))?
        };

        let wait = self.settings.wait_minutes();
        for i in 0..n {
            for j in 0..n {
                let skip = if route.is_roundtrip {
                    i >= j || (i == 0 && j == n - 1)
                } else {
                    i == j
                };
                if skip || stops[i] == stops[j] {
                    continue;
                }

                let distance = if i < j {
                    forward[j] - forward[i]
                } else {
                    backward[i] - backward[j]
                };
                let weight = wait + self.settings.ride_minutes(distance);
                let id = builder.add_edge(stops[i].into(), stops[j].into(), weight)?;
                edge_info.insert(id, EdgeInfo {
                    route: route_id,
                    board_stop: stops[i],
                    alight_stop: stops[j],
                    span_count: i.abs_diff(j) as u32,
                    distance,
                    ride_time: weight - wait,
                });
            }
        }
        Ok(())
    }
}

/// `sums[k]` = metres over the first `k` hops.
fn prefix_sums(
    catalogue: &Catalogue,
    route: &Route,
    hops: impl Iterator<Item = (StopId, StopId)>,
) -> RouterResult<Vec<u64>> {
    let mut sums = Vec::with_capacity(route.stops.len());
    let mut total = 0u64;
    sums.push(total);
    for (from, to) in hops {
        let meters = catalogue.distances().get(from, to).ok_or_else(|| {
            RouterError::MissingDistance {
                route: route.name.clone(),
                from:  catalogue.stop_by_id(from).name.clone(),
                to:    catalogue.stop_by_id(to).name.clone(),
            }
        })?;
        total += u64::from(meters);
        sums.push(total);
    }
    Ok(sums)
}
