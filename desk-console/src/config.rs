//! Console configuration: JSON file, then command-line overrides.

use crate::Cli;
use anyhow::{Context, Result};
use desk_remote::RemoteConfig;
use desk_store::{DEFAULT_ROWS_PER_PAGE, StoreOptions};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub remote: RemoteConfig,
    pub store: StoreOptions,
    /// Directory holding `user.json`.
    pub session_dir: PathBuf,
    pub rows_per_page: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            remote: RemoteConfig::default(),
            store: StoreOptions::default(),
            session_dir: default_session_dir(),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
        }
    }
}

/// `<local data dir>/desk`, or `.desk` when the platform has none.
pub fn default_session_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("desk"))
        .unwrap_or_else(|| PathBuf::from(".desk"))
}

impl ConsoleConfig {
    /// Reads a config file. Missing fields keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse config {}", path.display()))
    }

    /// File (if given) first, then flags.
    pub fn resolve(cli: &Cli) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if let Some(url) = &cli.api_base_url {
            config.remote.api_base_url = url.clone();
        }
        if let Some(dir) = &cli.session_dir {
            config.session_dir = dir.clone();
        }

        Ok(config)
    }
}
