//! Engine configuration for lodestar
//!
//! Configuration lives in `config.toml`, found via `--config`, the
//! `LODESTAR_CONFIG_DIR` environment variable, or `~/.config/lodestar/`.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LodestarError, Result};

pub use types::{EngineConfig, GraphConfig, LimitsConfig, OutputConfig, DEFAULT_APSP_MAX_NODES};

const CONFIG_DIR: &str = "lodestar";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "LODESTAR_CONFIG_DIR";

impl EngineConfig {
    /// Default location of the config file
    pub fn default_path() -> Result<PathBuf> {
        // Allow environment variable override for testing
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    LodestarError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;

        if config.limits.apsp_max_nodes == 0 {
            crate::bail_invalid!("limits.apsp_max_nodes", 0);
        }

        Ok(config)
    }

    /// Resolve configuration: explicit path, then the default location, then defaults.
    /// An explicit path that does not exist is an error; a missing default file is not.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            if path.is_dir() {
                crate::bail_usage!(format!(
                    "config path {} is a directory, expected a config.toml file",
                    path.display()
                ));
            }
            tracing::debug!(path = %path.display(), "load_config");
            return Self::load(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(_) => return Ok(Self::default()),
        };

        if !path.exists() {
            return Ok(Self::default());
        }

        tracing::debug!(path = %path.display(), "load_config");
        Self::load(&path)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LodestarError::Other(format!("failed to serialize config: {}", e)))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, content)?;
        Ok(())
    }
}
