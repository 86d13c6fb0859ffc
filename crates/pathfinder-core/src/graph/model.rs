//! In-memory undirected multigraph
//!
//! Edges are stored once, in insertion order; each vertex keeps the ids of
//! its incident edges. The vertex set is the union of edge endpoints and any
//! isolated vertices added explicitly.

use std::collections::HashMap;

use crate::graph::types::{Edge, EdgeId, VertexId, Weight};

/// A vertex and the edges incident to it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Vertex<'g> {
    pub id: &'g VertexId,
    pub edges: &'g [EdgeId],
}

/// Weighted undirected graph. Parallel edges and self-loops are allowed.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    edges: Vec<Edge>,
    vertex_order: Vec<VertexId>,
    adjacency: HashMap<VertexId, Vec<EdgeId>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from `(weight, vertex1, vertex2)` triples
    pub fn from_edges<I, W, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (W, A, B)>,
        W: Into<Weight>,
        A: Into<VertexId>,
        B: Into<VertexId>,
    {
        let mut graph = Graph::new();
        for (weight, v1, v2) in edges {
            graph.add_edge(weight, v1, v2);
        }
        graph
    }

    /// Register an isolated vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, id: impl Into<VertexId>) -> bool {
        let id = id.into();
        if self.adjacency.contains_key(&id) {
            return false;
        }
        self.vertex_order.push(id.clone());
        self.adjacency.insert(id, Vec::new());
        true
    }

    /// Create an edge and register it with both endpoints
    pub fn add_edge(
        &mut self,
        weight: impl Into<Weight>,
        v1: impl Into<VertexId>,
        v2: impl Into<VertexId>,
    ) -> EdgeId {
        let (v1, v2) = (v1.into(), v2.into());
        let id = EdgeId::new(self.edges.len());

        self.add_vertex(v1.clone());
        self.add_vertex(v2.clone());

        if let Some(incident) = self.adjacency.get_mut(&v1) {
            incident.push(id);
        }
        if v1 != v2 {
            if let Some(incident) = self.adjacency.get_mut(&v2) {
                incident.push(id);
            }
        }

        self.edges.push(Edge {
            id,
            weight: weight.into(),
            endpoints: (v1, v2),
        });
        id
    }

    /// Vertex ids in the order they were first seen
    pub fn vertices(&self) -> impl Iterator<Item = &VertexId> {
        self.vertex_order.iter()
    }

    pub fn vertex(&self, id: &str) -> Option<Vertex<'_>> {
        self.adjacency
            .get_key_value(id)
            .map(|(id, edges)| Vertex { id, edges })
    }

    /// Ids of edges incident to `id`; empty for unknown vertices
    pub fn edges_of(&self, id: &str) -> &[EdgeId] {
        self.adjacency.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.edges.get(id.index())
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn contains_vertex(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertex_order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

impl<W, A, B> FromIterator<(W, A, B)> for Graph
where
    W: Into<Weight>,
    A: Into<VertexId>,
    B: Into<VertexId>,
{
    fn from_iter<I: IntoIterator<Item = (W, A, B)>>(iter: I) -> Self {
        Graph::from_edges(iter)
    }
}

/// Build a graph from a sequence of `(weight, vertex1, vertex2)` edges
pub fn build_graph<I, W, A, B>(edges: I) -> Graph
where
    I: IntoIterator<Item = (W, A, B)>,
    W: Into<Weight>,
    A: Into<VertexId>,
    B: Into<VertexId>,
{
    Graph::from_edges(edges)
}
