use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Non-negative edge weight and accumulated path distance.
///
/// Sums are formed with `checked_add`; a path whose weight does not fit in
/// a `u64` has no `Weight`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Weight(u64);

impl Weight {
    pub const ZERO: Weight = Weight(0);
    pub const MAX: Weight = Weight(u64::MAX);

    pub fn new(weight: u64) -> Self {
        Weight(weight)
    }

    pub fn value(&self) -> u64 {
        self.0
    }

    /// `None` when the sum does not fit in a `u64`
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Weight)
    }

    /// Sum of `weights`, or `None` on overflow
    pub fn checked_sum<I: IntoIterator<Item = Weight>>(weights: I) -> Option<Self> {
        weights
            .into_iter()
            .try_fold(Weight::ZERO, |acc, weight| acc.checked_add(weight))
    }
}

impl From<u64> for Weight {
    fn from(weight: u64) -> Self {
        Weight(weight)
    }
}

impl From<u32> for Weight {
    fn from(weight: u32) -> Self {
        Weight(weight as u64)
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Opaque vertex identity. Two vertices are the same vertex iff their ids are equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexId(String);

impl VertexId {
    pub fn new(id: impl Into<String>) -> Self {
        VertexId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VertexId {
    fn from(id: &str) -> Self {
        VertexId(id.to_string())
    }
}

impl From<String> for VertexId {
    fn from(id: String) -> Self {
        VertexId(id)
    }
}

impl From<&VertexId> for VertexId {
    fn from(id: &VertexId) -> Self {
        id.clone()
    }
}

impl Borrow<str> for VertexId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for VertexId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for VertexId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for VertexId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Position of an edge in its graph, assigned in insertion order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct EdgeId(usize);

impl EdgeId {
    pub(crate) fn new(index: usize) -> Self {
        EdgeId(index)
    }

    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Undirected weighted edge. Neither endpoint is privileged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub id: EdgeId,
    pub weight: Weight,
    pub endpoints: (VertexId, VertexId),
}

impl Edge {
    /// The endpoint across the edge from `vertex`, or `None` if `vertex`
    /// is not an endpoint. A self-loop yields `vertex` itself.
    pub fn opposite(&self, vertex: &str) -> Option<&VertexId> {
        let (a, b) = &self.endpoints;
        if a == vertex {
            Some(b)
        } else if b == vertex {
            Some(a)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.endpoints.0 == self.endpoints.1
    }
}

/// One edge of a path, oriented along the direction of travel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathStep<'a> {
    pub from: &'a VertexId,
    pub to: &'a VertexId,
    pub edge: &'a Edge,
}

/// Shortest path result: the edges walked from `source` to `target`
/// and their summed weight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Path {
    pub source: VertexId,
    pub target: VertexId,
    pub edges: Vec<Edge>,
    pub total_weight: Weight,
}

impl Path {
    /// Zero-length path that starts and ends at `vertex`
    pub fn empty(vertex: impl Into<VertexId>) -> Self {
        let vertex = vertex.into();
        Path {
            source: vertex.clone(),
            target: vertex,
            edges: Vec::new(),
            total_weight: Weight::ZERO,
        }
    }

    /// Number of edges in the path
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_ids(&self) -> Vec<EdgeId> {
        self.edges.iter().map(|edge| edge.id).collect()
    }

    /// Edges oriented along the walk from source to target.
    /// Stops early if the edge sequence is not a connected walk.
    pub fn steps(&self) -> Vec<PathStep<'_>> {
        let mut steps = Vec::with_capacity(self.edges.len());
        let mut current = &self.source;
        for edge in &self.edges {
            let Some(next) = edge.opposite(current.as_str()) else {
                break;
            };
            steps.push(PathStep {
                from: current,
                to: next,
                edge,
            });
            current = next;
        }
        steps
    }

    /// Vertices visited by the walk, source first
    pub fn vertices(&self) -> Vec<&VertexId> {
        let mut vertices = Vec::with_capacity(self.edges.len() + 1);
        vertices.push(&self.source);
        vertices.extend(self.steps().into_iter().map(|step| step.to));
        vertices
    }

    /// Whether the edges form a connected walk from source to target whose
    /// weights sum to `total_weight`
    pub fn is_consistent(&self) -> bool {
        let steps = self.steps();
        let ends_at_target = steps
            .last()
            .map_or(self.source == self.target, |step| *step.to == self.target);
        steps.len() == self.edges.len()
            && ends_at_target
            && Weight::checked_sum(self.edges.iter().map(|edge| edge.weight)) == Some(self.total_weight)
    }
}
