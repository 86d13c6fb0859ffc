use crate::graph::model::Graph;
use crate::graph::types::Edge;

/// Trait for providing read-only graph adjacency to the search engine
pub trait GraphProvider {
    fn contains_vertex(&self, id: &str) -> bool;
    fn incident_edges(&self, id: &str) -> Vec<&Edge>;
}

impl GraphProvider for Graph {
    fn contains_vertex(&self, id: &str) -> bool {
        Graph::contains_vertex(self, id)
    }

    fn incident_edges(&self, id: &str) -> Vec<&Edge> {
        self.edges_of(id)
            .iter()
            .filter_map(|&edge_id| self.edge(edge_id))
            .collect()
    }
}
