//! Path-search trait and default Dijkstra implementation.
//!
//! # Pluggability
//!
//! The transit router talks to path search only through [`PathFinder`], so
//! a contraction hierarchy or an all-pairs table can replace the default
//! [`DijkstraRouter`] without touching the compiler.
//!
//! # Determinism
//!
//! Heap entries are ordered by `(cost, vertex)` and adjacency is scanned in
//! insertion order, so identical graphs always yield the identical path.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use tc_core::{EdgeId, VertexId};

use crate::graph::DirectedWeightedGraph;

// ── Path ──────────────────────────────────────────────────────────────────────

/// The result of a path query: edges in travel order and their total weight.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub edges: Vec<EdgeId>,
    pub total_weight: f64,
}

impl Path {
    /// `true` if source and destination are the same vertex.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }
}

// ── PathFinder trait ──────────────────────────────────────────────────────────

/// Minimum-weight path search over a [`DirectedWeightedGraph`].
///
/// Implementations must be `Send + Sync` so a compiled network can be shared
/// between reader threads.
pub trait PathFinder: Send + Sync {
    /// Minimum-weight path from `from` to `to`.
    ///
    /// Returns `None` if `to` is unreachable or either vertex is outside the
    /// graph.  `from == to` yields an empty path of weight `0.0`.
    fn find_min_path(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<Path>;
}

// ── DijkstraRouter ────────────────────────────────────────────────────────────

/// Standard Dijkstra over the CSR graph with `f64` weights.
#[derive(Copy, Clone, Debug, Default)]
pub struct DijkstraRouter;

impl PathFinder for DijkstraRouter {
    fn find_min_path(
        &self,
        graph: &DirectedWeightedGraph,
        from: VertexId,
        to: VertexId,
    ) -> Option<Path> {
        dijkstra(graph, from, to)
    }
}

// ── Dijkstra internals ────────────────────────────────────────────────────────

/// Heap key: total order on `f64` cost, vertex id as tie-breaker.
#[derive(Copy, Clone, Debug)]
struct State {
    cost:   f64,
    vertex: VertexId,
}

impl PartialEq for State {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for State {}

impl PartialOrd for State {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for State {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .total_cmp(&other.cost)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

fn dijkstra(graph: &DirectedWeightedGraph, from: VertexId, to: VertexId) -> Option<Path> {
    if !graph.contains_vertex(from) || !graph.contains_vertex(to) {
        return None;
    }
    if from == to {
        return Some(Path { edges: vec![], total_weight: 0.0 });
    }

    let n = graph.vertex_count();
    let mut dist      = vec![f64::INFINITY; n];
    // prev_edge[v] = EdgeId that reached v; EdgeId::INVALID for unreached vertices.
    let mut prev_edge = vec![EdgeId::INVALID; n];

    dist[from.index()] = 0.0;

    let mut heap: BinaryHeap<Reverse<State>> = BinaryHeap::new();
    heap.push(Reverse(State { cost: 0.0, vertex: from }));

    while let Some(Reverse(State { cost, vertex })) = heap.pop() {
        if vertex == to {
            return Some(reconstruct(graph, &prev_edge, from, to, cost));
        }

        // Skip stale heap entries.
        if cost > dist[vertex.index()] {
            continue;
        }

        for &edge_id in graph.out_edges(vertex) {
            let edge = graph.edge(edge_id);
            let new_cost = cost + edge.weight;

            if new_cost < dist[edge.to.index()] {
                dist[edge.to.index()] = new_cost;
                prev_edge[edge.to.index()] = edge_id;
                heap.push(Reverse(State { cost: new_cost, vertex: edge.to }));
            }
        }
    }

    None
}

fn reconstruct(
    graph: &DirectedWeightedGraph,
    prev_edge: &[EdgeId],
    from: VertexId,
    to: VertexId,
    total_weight: f64,
) -> Path {
    let mut edges = Vec::new();
    let mut cur = to;
    while cur != from {
        let e = prev_edge[cur.index()];
        debug_assert_ne!(e, EdgeId::INVALID, "settled vertex without predecessor");
        if e == EdgeId::INVALID {
            break;
        }
        edges.push(e);
        cur = graph.edge(e).from;
    }
    edges.reverse();
    Path { edges, total_weight }
}
