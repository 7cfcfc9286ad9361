//! Configuration-specific error types.

use std::path::PathBuf;

/// Errors raised while locating, reading or writing `config.yml`.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Paths are only known once `Config::load` has run
    #[error("Configuration has not been loaded")]
    NotLoaded,

    #[error("Failed to find home directory")]
    HomeDirectoryNotFound,

    #[error("Failed to read configuration from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to save configuration to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to create configuration directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file exists but is not valid YAML for the expected keys
    #[error("Invalid configuration file {path}: {source}")]
    InvalidFile {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Failed to encode configuration: {0}")]
    EncodeFailed(#[source] serde_yaml::Error),
}
