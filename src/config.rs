//! Configuration loading and management.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
}

/// Store-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the JSON store file.
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_store_path() -> PathBuf {
    PathBuf::from("tasks.json")
}

impl Config {
    /// Load configuration from file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations or return defaults.
    pub fn load_or_default() -> Self {
        if let Ok(path) = std::env::var("TASKDESK_CONFIG_PATH") {
            if let Ok(config) = Self::load(&path) {
                return config;
            }
        }

        if let Ok(config) = Self::load("taskdesk.yaml") {
            return config;
        }

        let mut config = Self::default();

        if let Ok(store_path) = std::env::var("TASKDESK_STORE_PATH") {
            config.store.path = PathBuf::from(store_path);
        }

        config
    }

    /// Ensure the store file's directory exists.
    pub fn ensure_store_dir(&self) -> Result<()> {
        if let Some(parent) = self.store.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }
}
