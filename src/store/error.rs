//! Settings store-specific error types.

use std::path::PathBuf;

/// Errors that can occur while reading or writing persisted settings.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Failed to read the settings file
    #[error("Failed to load settings from {path}: {source}")]
    LoadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write the settings file
    #[error("Failed to save settings to {path}: {source}")]
    SaveFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to create the settings directory
    #[error("Failed to create settings directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to serialize settings
    #[error("Failed to serialize settings: {0}")]
    SerializationFailed(String),

    /// Failed to deserialize settings
    #[error("Failed to deserialize settings: {0}")]
    DeserializationFailed(String),

    /// Stored survey timestamp is not a valid ISO 8601 date
    #[error("Invalid survey timestamp '{value}': {source}")]
    InvalidTimestamp {
        value: String,
        source: chrono::ParseError,
    },
}
