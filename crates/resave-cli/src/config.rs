//! CLI configuration (`resave.toml`).
//!
//! Looked up in the working directory first, then under the user config
//! directory. A missing or unreadable file falls back to defaults with a
//! warning, never an abort.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, warn};

pub const CONFIG_FILE: &str = "resave.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory converted files are written to; the input's directory when
    /// unset.
    pub output_dir: Option<PathBuf>,
    /// Prefix for generated output names.
    pub prefix: String,
    /// Include a timestamp in generated output names.
    pub timestamp: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: None,
            prefix: "Converted_".to_string(),
            timestamp: true,
        }
    }
}

impl Config {
    /// Load the config, preferring an explicitly given path.
    pub fn load(explicit: Option<&Path>) -> Self {
        if let Some(path) = explicit {
            return Self::load_from(path).unwrap_or_else(|| {
                warn!("failed to load config from {}, using defaults", path.display());
                Self::default()
            });
        }

        for candidate in Self::candidates() {
            if candidate.exists() {
                if let Some(config) = Self::load_from(&candidate) {
                    return config;
                }
            }
        }
        Self::default()
    }

    fn candidates() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE)];
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("resave").join(CONFIG_FILE));
        }
        paths
    }

    fn load_from(path: &Path) -> Option<Self> {
        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                debug!("config file not readable: {e}");
                return None;
            }
        };
        match toml::from_str(&content) {
            Ok(config) => {
                debug!("loaded config from {}", path.display());
                Some(config)
            }
            Err(e) => {
                warn!("invalid config file {}: {e}", path.display());
                None
            }
        }
    }
}
