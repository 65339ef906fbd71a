//! Store configuration, loaded from TOML.
//!
//! ```toml
//! path = "database/starwars.db"
//! read_only = false
//! foreign_keys = true
//! ```
//! Every key is optional, absent keys take the [`StoreConfig::default`] value.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_DB_PATH: &str = "database/starwars.db";

///
/// Where the store lives and how to open it
/// # Fields
/// * `path` - the SQLite database file, it must already exist
/// * `read_only` - open without write access
/// * `foreign_keys` - turn on SQLite's foreign key enforcement for the connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub read_only: bool,
    pub foreign_keys: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DB_PATH),
            read_only: false,
            foreign_keys: true,
        }
    }
}

impl StoreConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn from_toml_str(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse the store configuration")
    }

    ///
    /// read the configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).with_context(|| {
            format!(
                "Failed to read the store configuration at {}",
                path.display()
            )
        })?;
        Self::from_toml_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = StoreConfig::from_toml_str("read_only = true").unwrap();
        assert!(config.read_only);
        assert!(config.foreign_keys);
        assert_eq!(config.path, PathBuf::from(DEFAULT_DB_PATH));
    }

    #[test]
    fn test_bad_toml() {
        let result = StoreConfig::from_toml_str("read_only = \"maybe\"");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse the store configuration"));
    }
}
