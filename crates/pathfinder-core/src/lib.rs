//! Pathfinder Core Library
//!
//! Weighted undirected graphs and single-source, single-target shortest-path
//! search over them.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod logging;
