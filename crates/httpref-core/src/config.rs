//! User configuration
//!
//! Read from `~/.config/httpref/config.json` unless a path is given. A
//! missing file means defaults; a broken one is an error.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::paragraph::Width;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output width when none is given on the command line
    pub width: Option<i64>,
    /// Colour error messages
    pub color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: None,
            color: true,
        }
    }
}

impl Config {
    /// Load from `path`, or from the default location
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;

        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", config_path.display()))?;

        debug!(path = %config_path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Width from the command line, else from this config, else the default
    pub fn resolve_width(&self, flag: Option<i64>) -> Width {
        flag.or(self.width).map(Width::clamped).unwrap_or_default()
    }
}

/// Get the config directory path
pub fn get_config_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("~/.config"))
        .join("httpref")
}

/// Get the config file path
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.json")
}
