//! Configuration management

use crate::error::{Result, SealnoteError};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Fixed config file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "config.yml";

/// Startup configuration, loaded once and never mutated.
///
/// `database` is the connection string (the SQLite database path) and `key`
/// holds the raw symmetric key bytes. The key length is checked when the
/// cipher is constructed, not here.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub database: String,
    pub key: String,
}

impl Config {
    /// Load config from `config.yml` in the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| SealnoteError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(serde_yaml::from_str(&contents)?)
    }
}
