use crate::graph::types::{Edge, VertexId, Weight};

/// Passive hooks called by the search engine.
///
/// Observers see every settle, stale pop and relaxation but cannot change
/// the search. Methods take `&self` so one observer can be shared across
/// searches; implementations needing state use interior mutability.
pub trait SearchObserver {
    fn on_push(&self, _vertex: &VertexId, _distance: Weight) {}
    fn on_settle(&self, _vertex: &VertexId, _distance: Weight) {}
    fn on_stale(&self, _vertex: &VertexId, _distance: Weight) {}
    fn on_relax(&self, _edge: &Edge, _improved: bool) {}
}

/// Observer that ignores every event
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {}
