//! CLI commands for pathfinder

pub mod dispatch;
pub mod path;
