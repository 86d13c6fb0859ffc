//! Shortest-path search
//!
//! - `frontier`: min-priority queue with lazy decrease-key
//! - `tracker`: best known distance and path per vertex
//! - `trail`: persistent edge sequences shared between paths
//! - `observer`: passive search hooks
//! - `dijkstra`: the search engine

pub mod dijkstra;
pub mod frontier;
pub mod observer;
pub mod tracker;
pub mod trail;

pub use dijkstra::{find_shortest_path, find_shortest_path_with, SearchOptions};
pub use frontier::{Frontier, FrontierEntry, TieBreak};
pub use observer::{NoopObserver, SearchObserver};
pub use tracker::PathTracker;
pub use trail::Trail;
