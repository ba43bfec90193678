//! Provider configuration loaded from TOML

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::io::DEFAULT_ENCODING;

/// Settings shared by the provider and its hosts.
///
/// Every field has a default, so an empty file is a valid configuration:
///
/// ```toml
/// encoding = "utf8"
/// log_level = "debug"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Text encoding used to read data files
    pub encoding: String,
    /// Default `tracing` filter when `RUST_LOG` is unset
    pub log_level: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl ProviderConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| Error::read(path, e))?;
        Self::from_toml_str(&content)
    }
}
