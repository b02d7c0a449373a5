use crate::error::{AddressBookError, Result};
use crate::store::fs::DEFAULT_FILE_MODE;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Settings shared by all four tools, stored as `config.json` in the user's
/// config directory. Every field is optional in the file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AddressBookConfig {
    /// Default tracing level for the `addressbook` target. `RUST_LOG` wins.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Permission bits for book files created by the tools.
    #[serde(default = "default_file_mode")]
    pub file_mode: u32,
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_file_mode() -> u32 {
    DEFAULT_FILE_MODE
}

impl Default for AddressBookConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            file_mode: default_file_mode(),
        }
    }
}

impl AddressBookConfig {
    /// Platform config directory, if one can be determined.
    pub fn default_dir() -> Option<PathBuf> {
        ProjectDirs::from("com", "addressbook", "addressbook")
            .map(|dirs| dirs.config_dir().to_path_buf())
    }

    /// Loads from [`Self::default_dir`], falling back to defaults when there
    /// is no config directory.
    pub fn load_default() -> Result<Self> {
        match Self::default_dir() {
            Some(dir) => Self::load(dir),
            None => Ok(Self::default()),
        }
    }

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content =
            fs::read_to_string(&config_path).map_err(|source| AddressBookError::FileRead {
                path: config_path.clone(),
                source,
            })?;
        serde_json::from_str(&content).map_err(|source| AddressBookError::Config {
            path: config_path,
            source,
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        let config_path = config_dir.join(CONFIG_FILENAME);
        let write_err = |source| AddressBookError::FileWrite {
            path: config_path.clone(),
            source,
        };

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(write_err)?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|source| AddressBookError::Config {
                path: config_path.clone(),
                source,
            })?;
        fs::write(&config_path, content).map_err(write_err)?;
        Ok(())
    }
}
