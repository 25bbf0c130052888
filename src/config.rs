use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::shell::{Route, DEFAULT_REPOSITORY_URL};
use crate::store::LAST_ADDED_BOOK_KEY;

/// Application configuration loaded from ~/.config/sonora/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub shell: ShellConfig,
}

/// Where the last added book is kept
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StoreConfig {
    /// Record file (default: <data_dir>/sonora/lastAddedBook.json)
    pub path: Option<PathBuf>,
}

/// Navigation shell settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShellConfig {
    /// Tab shown when the shell mounts
    #[serde(default)]
    pub initial_tab: Route,

    /// Target of the header's repository link
    #[serde(default = "default_repository_url")]
    pub repository_url: String,
}

fn default_repository_url() -> String {
    DEFAULT_REPOSITORY_URL.to_string()
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            initial_tab: Route::default(),
            repository_url: default_repository_url(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;

        toml::from_str(&content).with_context(|| format!("Failed to parse {:?}", path))
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("sonora").join("config.toml"))
    }

    /// Get the default record file path
    pub fn default_store_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir().context("Could not determine data directory")?;
        Ok(data_dir
            .join("sonora")
            .join(format!("{}.json", LAST_ADDED_BOOK_KEY)))
    }

    /// Get the record file path, with CLI override taking precedence
    pub fn store_path(&self, cli_override: Option<&Path>) -> Result<PathBuf> {
        match cli_override.map(Path::to_path_buf).or_else(|| self.store.path.clone()) {
            Some(path) => Ok(path),
            None => Self::default_store_path(),
        }
    }

    /// Get the initial tab, with CLI override taking precedence
    pub fn initial_tab(&self, cli_override: Option<Route>) -> Route {
        cli_override.unwrap_or(self.shell.initial_tab)
    }
}
