//! Directed weighted graph and its builder.
//!
//! # Data layout
//!
//! Edges keep the `EdgeId` they were given at insertion; the builder hands
//! that id back to the caller so it can key its own per-edge metadata.
//! Outgoing adjacency is stored in **Compressed Sparse Row (CSR)** form as
//! a permutation of edge ids grouped by source vertex:
//!
//! ```text
//! out_edges[ out_start[v] .. out_start[v+1] ]
//! ```
//!
//! Within one vertex the ids stay in insertion order (stable sort), which
//! keeps path search deterministic for identical input.

use tc_core::{EdgeId, VertexId};

use crate::{GraphError, GraphResult};

/// A directed edge.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from:   VertexId,
    pub to:     VertexId,
    pub weight: f64,
}

// ── DirectedWeightedGraph ─────────────────────────────────────────────────────

/// Immutable directed graph with `f64` edge weights.
///
/// Do not construct directly; use [`GraphBuilder`].
#[derive(Clone, Debug)]
pub struct DirectedWeightedGraph {
    /// Edges indexed by `EdgeId`.
    edges: Vec<Edge>,

    /// CSR row pointer.  Length = `vertex_count + 1`.
    out_start: Vec<u32>,

    /// Edge ids grouped by source vertex.
    out_edges: Vec<EdgeId>,
}

impl DirectedWeightedGraph {
    /// A graph with no vertices and no edges.
    pub fn empty() -> Self {
        GraphBuilder::new(0).build()
    }

    pub fn vertex_count(&self) -> usize {
        self.out_start.len() - 1
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// The edge with the given id.
    ///
    /// # Panics
    /// Panics if `id` was not issued by this graph's builder.
    #[inline]
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    /// Iterator over all edges in id order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> + '_ {
        self.edges
            .iter()
            .enumerate()
            .map(|(i, e)| (EdgeId(i as u32), e))
    }

    /// Ids of all outgoing edges of `vertex`, in insertion order.
    #[inline]
    pub fn out_edges(&self, vertex: VertexId) -> &[EdgeId] {
        let start = self.out_start[vertex.index()] as usize;
        let end   = self.out_start[vertex.index() + 1] as usize;
        &self.out_edges[start..end]
    }

    #[inline]
    pub fn out_degree(&self, vertex: VertexId) -> usize {
        self.out_edges(vertex).len()
    }

    pub fn contains_vertex(&self, vertex: VertexId) -> bool {
        vertex.index() < self.vertex_count()
    }
}

// ── GraphBuilder ──────────────────────────────────────────────────────────────

/// Construct a [`DirectedWeightedGraph`] incrementally, then call
/// [`build`](Self::build).
///
/// # Example
///
/// ```
/// use tc_core::VertexId;
/// use tc_graph::GraphBuilder;
///
/// let mut b = GraphBuilder::new(2);
/// let e = b.add_edge(VertexId(0), VertexId(1), 7.5).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.edge(e).weight, 7.5);
/// assert_eq!(graph.out_degree(VertexId(0)), 1);
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    vertex_count: usize,
    edges:        Vec<Edge>,
}

impl GraphBuilder {
    /// A builder for a graph with `vertex_count` vertices `0..vertex_count`.
    pub fn new(vertex_count: usize) -> Self {
        Self { vertex_count, edges: Vec::new() }
    }

    /// Add a **directed** edge and return its id (sequential from 0).
    ///
    /// Parallel edges between the same ordered pair are kept distinct.
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if either endpoint is out of range,
    /// [`GraphError::InvalidWeight`] if `weight` is negative or not finite.
    pub fn add_edge(&mut self, from: VertexId, to: VertexId, weight: f64) -> GraphResult<EdgeId> {
        for vertex in [from, to] {
            if vertex.index() >= self.vertex_count {
                return Err(GraphError::VertexNotFound { vertex, vertex_count: self.vertex_count });
            }
        }
        if !weight.is_finite() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }
        let id = EdgeId::try_from(self.edges.len()).map_err(|_| GraphError::TooManyEdges)?;
        if id == EdgeId::INVALID {
            return Err(GraphError::TooManyEdges);
        }
        self.edges.push(Edge { from, to, weight });
        Ok(id)
    }

    pub fn edge_count(&self) -> usize { self.edges.len() }

    /// Consume the builder and produce the CSR graph.
    ///
    /// Time complexity: O(E log E) for the stable sort by source vertex.
    pub fn build(self) -> DirectedWeightedGraph {
        let vertex_count = self.vertex_count;

        let mut out_edges: Vec<EdgeId> = (0..self.edges.len())
            .map(|i| EdgeId(i as u32))
            .collect();
        out_edges.sort_by_key(|id| self.edges[id.index()].from.0);

        let mut out_start = vec![0u32; vertex_count + 1];
        for e in &self.edges {
            out_start[e.from.index() + 1] += 1;
        }
        for i in 1..=vertex_count {
            out_start[i] += out_start[i - 1];
        }
        debug_assert_eq!(out_start[vertex_count] as usize, self.edges.len());

        DirectedWeightedGraph {
            edges: self.edges,
            out_start,
            out_edges,
        }
    }
}
