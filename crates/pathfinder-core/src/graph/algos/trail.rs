//! Persistent edge sequence shared between tracked paths
//!
//! Extending a trail allocates one node that points at the predecessor's
//! trail; the predecessor is never modified, so every branch that shares a
//! prefix keeps seeing its own path.

use std::rc::Rc;

use crate::graph::types::{Edge, Weight};

#[derive(Debug)]
struct TrailNode<'g> {
    edge: &'g Edge,
    prev: Option<Rc<TrailNode<'g>>>,
}

/// Immutable, structurally shared sequence of edges from the search source
#[derive(Debug, Clone, Default)]
pub struct Trail<'g> {
    head: Option<Rc<TrailNode<'g>>>,
    len: usize,
}

impl<'g> Trail<'g> {
    /// The empty trail (the source's own path)
    pub fn new() -> Self {
        Self::default()
    }

    /// A new trail with `edge` appended; `self` is left untouched
    pub fn extend(&self, edge: &'g Edge) -> Self {
        Trail {
            head: Some(Rc::new(TrailNode {
                edge,
                prev: self.head.clone(),
            })),
            len: self.len + 1,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn last(&self) -> Option<&'g Edge> {
        self.head.as_ref().map(|node| node.edge)
    }

    /// Edges from the source outwards
    pub fn edges(&self) -> Vec<&'g Edge> {
        let mut edges = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_ref();
        while let Some(node) = cursor {
            edges.push(node.edge);
            cursor = node.prev.as_ref();
        }
        edges.reverse();
        edges
    }

    /// Summed edge weight, or `None` if it does not fit in a `u64`
    pub fn total_weight(&self) -> Option<Weight> {
        Weight::checked_sum(self.edges().into_iter().map(|edge| edge.weight))
    }

    /// Owned copy of the edges, for handing a path out of the search
    pub fn to_owned_edges(&self) -> Vec<Edge> {
        self.edges().into_iter().cloned().collect()
    }
}
