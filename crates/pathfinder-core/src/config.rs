//! Configuration for pathfinder
//!
//! Read from TOML. Sources, highest precedence first: command-line flags,
//! an explicit `--config` file, the per-user config file, built-in defaults.

pub mod global;
pub mod types;

use std::fs;
use std::path::Path;

use crate::error::{PathfinderError, Result};
use crate::graph::SearchOptions;

pub use types::{LogConfig, PathfinderConfig, SearchConfig};

impl PathfinderConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a config file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| PathfinderError::io_operation("read config", path.display(), e))?;

        Self::from_toml_str(&content).map_err(|e| {
            PathfinderError::Other(format!(
                "failed to parse config from {}: {}",
                path.display(),
                e
            ))
        })
    }

    /// Load an explicit config file if given, otherwise the per-user one
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load(path),
            None => Self::discover(),
        }
    }

    pub fn search_options(&self) -> SearchOptions {
        SearchOptions::from(&self.search)
    }
}
