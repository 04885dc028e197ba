//! Configuration management for Tasklift.
//!
//! Handles loading configuration from TOML files.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Plan document to read
    pub input: PathBuf,

    /// Checklist document to write
    pub output: PathBuf,

    /// Title of the generated checklist
    pub title: String,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Looks for config in:
    /// 1. `.tasklift.toml` in current directory
    /// 2. `~/.config/tasklift/config.toml`
    /// 3. Falls back to defaults
    pub fn load() -> anyhow::Result<Self> {
        // Try local config first
        let local_config = PathBuf::from(".tasklift.toml");
        if local_config.exists() {
            return Self::load_from_file(&local_config);
        }

        // Try global config
        if let Some(config_dir) = dirs::config_dir() {
            let global_config = config_dir.join("tasklift").join("config.toml");
            if global_config.exists() {
                return Self::load_from_file(&global_config);
            }
        }

        // Return defaults
        Ok(Self::default())
    }

    /// Load configuration from a specific file.
    pub fn load_from_file(path: &PathBuf) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the config directory path.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("tasklift"))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: PathBuf::from("PLAN.md"),
            output: PathBuf::from("TASKS.md"),
            title: "Implementation Tasks".to_string(),
        }
    }
}
