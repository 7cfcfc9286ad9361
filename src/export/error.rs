//! Image export-specific error types.

use std::path::PathBuf;

/// Errors that can occur while saving a captured screen.
#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    /// Captured bitmap has no pixels
    #[error("Captured image is empty")]
    EmptyBitmap,

    /// Failed to create the export directory
    #[error("Failed to create export directory {path}: {source}")]
    CreateDirectoryFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to encode or write the image file
    #[error("Failed to write image {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        source: image::ImageError,
    },
}
