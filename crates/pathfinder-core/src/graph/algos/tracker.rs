use std::collections::HashMap;

use crate::graph::algos::trail::Trail;
use crate::graph::types::{VertexId, Weight};

/// Best known distance and path per vertex
///
/// `try_improve` is the only place a better path is accepted; the search
/// pushes onto the frontier only when it reports success.
#[derive(Debug, Default)]
pub struct PathTracker<'g> {
    best: HashMap<VertexId, (Weight, Trail<'g>)>,
}

impl<'g> PathTracker<'g> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Best known distance, or `None` if the vertex is unvisited
    pub fn distance(&self, vertex: &str) -> Option<Weight> {
        self.best.get(vertex).map(|(distance, _)| *distance)
    }

    /// Whether `candidate` is strictly shorter than the best known distance.
    /// Any distance improves on an unvisited vertex.
    pub fn is_improvement(&self, vertex: &str, candidate: Weight) -> bool {
        match self.distance(vertex) {
            Some(current) => candidate < current,
            None => true,
        }
    }

    pub fn trail(&self, vertex: &str) -> Option<&Trail<'g>> {
        self.best.get(vertex).map(|(_, trail)| trail)
    }

    /// Replace the stored entry iff `candidate` is strictly shorter
    pub fn try_improve(&mut self, vertex: &VertexId, candidate: Weight, trail: Trail<'g>) -> bool {
        if !self.is_improvement(vertex.as_str(), candidate) {
            return false;
        }
        self.best.insert(vertex.clone(), (candidate, trail));
        true
    }

    /// Number of vertices with a finite distance
    pub fn len(&self) -> usize {
        self.best.len()
    }

    pub fn is_empty(&self) -> bool {
        self.best.is_empty()
    }
}
