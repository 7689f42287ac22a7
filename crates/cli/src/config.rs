//! Inspector configuration.
//!
//! Settings come from an optional TOML file; command-line flags override
//! them in `main`.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Where the interface table is loaded from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// JSON interface file; the embedded CryptoColors table when unset.
    pub path: Option<PathBuf>,
}

/// Logger configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is not set.
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// Main inspector configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    pub table: TableConfig,
    pub logging: LoggingConfig,
}

impl InspectorConfig {
    /// Loads the configuration file, falling back to defaults when absent.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config {}", path.display()))?;

        // Relative table paths are taken from the config file's directory.
        if let (Some(table_path), Some(base)) = (config.table.path.as_mut(), path.parent()) {
            if table_path.is_relative() {
                *table_path = base.join(&*table_path);
            }
        }

        Ok(config)
    }
}
