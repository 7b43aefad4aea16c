//! Session configuration.
//!
//! ## Learning: Internally Tagged Enums
//!
//! `#[serde(tag = "backend")]` stores the variant name alongside the
//! variant's fields, so a TOML table reads naturally:
//!
//! ```toml
//! [storage]
//! backend = "file"
//! path = "/home/me/notes.txt"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::persistence::{DatabaseStorage, FileStorage, Persistence};

/// Main configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where rendered documents are stored
    pub storage: StorageConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from_default_path().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {}", e);
            Self::default()
        })
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("quill").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(Self::default_path()?)
    }

    /// Saves the config to a file, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Storage backend selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "backend", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Plain file holding the rendered text
    File { path: PathBuf },
    /// Database reached through a connection descriptor
    Database { connection: String },
}

impl StorageConfig {
    /// Default document file path.
    pub fn default_document_path() -> PathBuf {
        match dirs::data_dir() {
            Some(dir) => dir.join("quill").join("document.txt"),
            None => PathBuf::from("document.txt"),
        }
    }

    /// Builds the configured backend.
    pub fn open(&self) -> Box<dyn Persistence> {
        match self {
            Self::File { path } => Box::new(FileStorage::new(path.clone())),
            Self::Database { connection } => Box::new(DatabaseStorage::new(connection.clone())),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::File {
            path: Self::default_document_path(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Config directory not found")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}
