//! Per-user configuration (stored in ~/.config/pathfinder/config.toml)

use std::path::PathBuf;

use crate::config::PathfinderConfig;
use crate::error::{PathfinderError, Result};

const CONFIG_DIR: &str = "pathfinder";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "PATHFINDER_CONFIG_DIR";

impl PathfinderConfig {
    /// Location of the per-user config file
    pub fn user_config_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    PathfinderError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load the per-user config, falling back to defaults when it does not exist
    pub fn discover() -> Result<Self> {
        let path = match Self::user_config_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "no user config directory");
                return Ok(Self::default());
            }
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        Self::load(&path)
    }
}
