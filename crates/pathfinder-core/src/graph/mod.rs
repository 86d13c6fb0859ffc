//! Graph model and shortest-path search
//!
//! Provides the weighted undirected graph and the search over it:
//! - `model`/`types`: vertices, edges, weights and paths
//! - `traversal`: the read-only provider trait the search runs against
//! - `algos`: frontier, path tracker and the Dijkstra search engine

pub mod algos;
pub mod model;
pub mod traversal;
pub mod types;

pub use algos::{
    find_shortest_path, find_shortest_path_with, NoopObserver, SearchObserver, SearchOptions,
    TieBreak,
};
pub use model::{build_graph, Graph, Vertex};
pub use traversal::GraphProvider;
pub use types::{Edge, EdgeId, Path, PathStep, VertexId, Weight};
