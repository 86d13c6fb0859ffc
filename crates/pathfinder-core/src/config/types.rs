//! Configuration type definitions

use serde::{Deserialize, Serialize};

use crate::graph::TieBreak;

/// Top-level pathfinder configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathfinderConfig {
    /// Search behaviour
    #[serde(default)]
    pub search: SearchConfig,

    /// Logging defaults (command-line flags take precedence)
    #[serde(default)]
    pub log: LogConfig,
}

/// Search configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Order among frontier entries of equal distance
    #[serde(default)]
    pub tie_break: TieBreak,
}

/// Logging configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Level or filter directive (e.g. `debug`, `pathfinder=trace`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    /// Emit JSON log lines
    #[serde(default)]
    pub json: bool,
}
