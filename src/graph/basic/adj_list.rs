//! Adjacency List Graph
//!
//! A fixed-capacity graph whose vertices are the dense ids `0..node_count`.
//! Vertex records, adjacency lists and degree counters are parallel vectors
//! indexed by id, so every piece of bookkeeping (here and in traversal state)
//! resolves a vertex through the same integer and never through an address.
//!
//! Edges are stored under their source vertex as `(weight, target)` records in
//! insertion order. Undirected graphs store the mirrored record automatically;
//! callers only ever go through [`Graph::insert_edge`].

use core::cmp::Ordering;
use core::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};

/// Stable identity of a vertex: its index in `[0, node_count)`.
pub type VertexId = usize;

/// Weight carried by vertices and edges.
pub type Weight = i64;

/// A graph vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    id: VertexId,
    weight: Option<Weight>,
}

impl Vertex {
    fn new(id: VertexId) -> Self {
        Self { id, weight: None }
    }

    /// The vertex id.
    pub fn id(&self) -> VertexId {
        self.id
    }

    /// The vertex weight, if one was assigned.
    pub fn weight(&self) -> Option<Weight> {
        self.weight
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id)
    }
}

/// A directed edge record stored under its source vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    weight: Weight,
    target: VertexId,
}

impl Edge {
    /// Weight of the edge.
    pub fn weight(&self) -> Weight {
        self.weight
    }

    /// The vertex this edge points at.
    pub fn target(&self) -> VertexId {
        self.target
    }

    /// Orders edges by weight alone, ignoring the target.
    pub fn cmp_weight(&self, other: &Self) -> Ordering {
        self.weight.cmp(&other.weight)
    }
}

/// A fixed-capacity adjacency list graph.
///
/// ### Performance Characteristics
/// | Operation | Complexity | Notes |
/// |-----------|------------|-------|
/// | `insert_edge` | \(O(1)\) amortized | One push (two if undirected) |
/// | `edges_from` | \(O(1)\) | Borrows the adjacency `Vec` |
/// | `vertices` | \(O(1)\) | Range over the dense ids |
/// | `degree` | \(O(1)\) | Cached counter |
///
/// Deserialized graphs are checked before use: every per-vertex vector must
/// hold exactly `node_count` entries, vertex records must sit at their own
/// index and every edge must point inside `[0, node_count)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GraphRepr")]
pub struct Graph {
    node_count: usize,
    directed: bool,
    edge_count: usize,
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    degree: Vec<usize>,
}

/// Unchecked wire form of [`Graph`].
#[derive(Deserialize)]
struct GraphRepr {
    node_count: usize,
    directed: bool,
    edge_count: usize,
    vertices: Vec<Vertex>,
    adjacency: Vec<Vec<Edge>>,
    degree: Vec<usize>,
}

impl TryFrom<GraphRepr> for Graph {
    type Error = GraphError;

    fn try_from(repr: GraphRepr) -> Result<Self> {
        let node_count = repr.node_count;
        let invalid = |id| GraphError::InvalidVertex { id, node_count };

        for len in [repr.vertices.len(), repr.adjacency.len(), repr.degree.len()] {
            if len != node_count {
                // First id that is either missing or surplus.
                return Err(invalid(len.min(node_count)));
            }
        }
        for (index, vertex) in repr.vertices.iter().enumerate() {
            if vertex.id != index {
                return Err(invalid(vertex.id));
            }
        }
        if let Some(edge) = repr
            .adjacency
            .iter()
            .flatten()
            .find(|edge| edge.target >= node_count)
        {
            return Err(invalid(edge.target));
        }

        Ok(Self {
            node_count,
            directed: repr.directed,
            edge_count: repr.edge_count,
            vertices: repr.vertices,
            adjacency: repr.adjacency,
            degree: repr.degree,
        })
    }
}

impl Graph {
    /// Creates a graph with `node_count` vertices and no edges.
    ///
    /// # Errors
    /// Returns [`GraphError::AllocationFailure`] if the per-vertex storage
    /// cannot be reserved.
    pub fn try_new(node_count: usize, directed: bool) -> Result<Self> {
        let mut vertices = Vec::new();
        vertices.try_reserve_exact(node_count)?;
        vertices.extend((0..node_count).map(Vertex::new));

        let mut adjacency = Vec::new();
        adjacency.try_reserve_exact(node_count)?;
        adjacency.resize_with(node_count, Vec::new);

        let mut degree = Vec::new();
        degree.try_reserve_exact(node_count)?;
        degree.resize(node_count, 0);

        Ok(Self {
            node_count,
            directed,
            edge_count: 0,
            vertices,
            adjacency,
            degree,
        })
    }

    /// Creates a graph with `node_count` vertices and no edges.
    ///
    /// # Panics
    /// Panics if the per-vertex storage cannot be allocated. Use
    /// [`Graph::try_new`] to handle that case.
    pub fn new(node_count: usize, directed: bool) -> Self {
        match Self::try_new(node_count, directed) {
            Ok(graph) => graph,
            Err(err) => panic!("graph with {node_count} vertices: {err}"),
        }
    }

    /// Creates an empty directed graph.
    pub fn directed(node_count: usize) -> Self {
        Self::new(node_count, true)
    }

    /// Creates an empty undirected graph.
    pub fn undirected(node_count: usize) -> Self {
        Self::new(node_count, false)
    }

    /// Declared vertex capacity.
    pub fn vertex_count(&self) -> usize {
        self.node_count
    }

    /// Number of `insert_edge` calls that succeeded.
    ///
    /// An undirected edge counts once even though it is stored twice.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether edges are one-way.
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns `true` if `id` names a vertex of this graph.
    #[inline]
    pub fn contains_vertex(&self, id: VertexId) -> bool {
        id < self.node_count
    }

    #[inline]
    pub(crate) fn check_vertex(&self, id: VertexId) -> Result<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(GraphError::InvalidVertex {
                id,
                node_count: self.node_count,
            })
        }
    }

    /// Inserts an edge from `source` to `target`.
    ///
    /// For undirected graphs the mirrored record is stored under `target`.
    /// Inserting the same pair twice yields parallel edges.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if either id is out of range; the graph
    ///   is left untouched.
    /// - [`GraphError::AllocationFailure`] if an adjacency list cannot grow;
    ///   the graph is left untouched.
    pub fn insert_edge(
        &mut self,
        source: VertexId,
        target: VertexId,
        weight: Weight,
    ) -> Result<()> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;

        // Reserve everything up front so a failure cannot leave half an edge.
        if !self.directed && source == target {
            self.adjacency[source].try_reserve(2)?;
        } else {
            self.adjacency[source].try_reserve(1)?;
            if !self.directed {
                self.adjacency[target].try_reserve(1)?;
            }
        }

        self.adjacency[source].push(Edge { weight, target });
        if !self.directed {
            self.adjacency[target].push(Edge {
                weight,
                target: source,
            });
        }
        self.degree[source] += 1;
        self.degree[target] += 1;
        self.edge_count += 1;

        tracing::trace!(source, target, weight, directed = self.directed, "inserted edge");
        Ok(())
    }

    /// Inserts an edge with weight `0`.
    ///
    /// # Errors
    /// Same as [`Graph::insert_edge`].
    pub fn insert_edge_unweighted(&mut self, source: VertexId, target: VertexId) -> Result<()> {
        self.insert_edge(source, target, 0)
    }

    /// All vertex ids, in a fixed order for the lifetime of the graph.
    pub fn vertices(&self) -> Range<VertexId> {
        0..self.node_count
    }

    /// Outgoing edges of `id` in insertion order.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `id` is out of range.
    pub fn edges_from(&self, id: VertexId) -> Result<std::slice::Iter<'_, Edge>> {
        self.check_vertex(id)?;
        Ok(self.adjacency[id].iter())
    }

    /// Outgoing edges of a vertex already known to be valid.
    #[inline]
    pub(crate) fn edges_of(&self, id: VertexId) -> &[Edge] {
        &self.adjacency[id]
    }

    /// The vertex record for `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `id` is out of range.
    pub fn vertex(&self, id: VertexId) -> Result<&Vertex> {
        self.check_vertex(id)?;
        Ok(&self.vertices[id])
    }

    /// Assigns a weight to vertex `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `id` is out of range.
    pub fn set_vertex_weight(&mut self, id: VertexId, weight: Weight) -> Result<()> {
        self.check_vertex(id)?;
        self.vertices[id].weight = Some(weight);
        Ok(())
    }

    /// Number of edge endpoints at `id`. A self-loop counts twice.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `id` is out of range.
    pub fn degree(&self, id: VertexId) -> Result<usize> {
        self.check_vertex(id)?;
        Ok(self.degree[id])
    }

    /// Length of the adjacency list of `id`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] if `id` is out of range.
    pub fn out_degree(&self, id: VertexId) -> Result<usize> {
        self.check_vertex(id)?;
        Ok(self.adjacency[id].len())
    }
}
