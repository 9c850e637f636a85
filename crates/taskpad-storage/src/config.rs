//! User configuration
//!
//! Taskpad reads an optional TOML file at `~/.taskpad/config.toml`. A
//! missing file means defaults; a file that exists but does not parse is an
//! error surfaced to the user rather than silently ignored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IoOperation, StorageError, StorageResult};
use crate::store::DATA_DIR_NAME;

/// File name of the user configuration
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// User-tunable settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Location of the task file; falls back to the default path when unset
    #[serde(default)]
    pub data_file: Option<PathBuf>,
}

impl Config {
    /// Load the configuration from the default location
    /// (`~/.taskpad/config.toml`).
    pub fn load() -> StorageResult<Config> {
        let home = dirs::home_dir().ok_or_else(|| {
            StorageError::path_resolution_error("could not determine the home directory")
        })?;
        Config::load_from(&home.join(DATA_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Load the configuration from a specific file.
    pub fn load_from(path: &Path) -> StorageResult<Config> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let text = fs::read_to_string(path)
            .map_err(|e| StorageError::io_error(path.to_path_buf(), IoOperation::Read, e))?;
        let config = toml::from_str(&text)
            .map_err(|e| StorageError::parse_error(path.to_path_buf(), "TOML", e.to_string()))?;

        debug!(path = %path.display(), "loaded config file");
        Ok(config)
    }
}
