//! State management-specific error types.

use crate::export::SaveError;
use crate::screening::ScreeningError;
use crate::store::StoreError;

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Screening form rejected the transition
    #[error("Screening error: {0}")]
    Screening(#[from] ScreeningError),

    /// Settings could not be loaded or persisted
    #[error("Settings error: {0}")]
    Store(#[from] StoreError),

    /// Captured screen could not be saved
    #[error("Export error: {0}")]
    Export(#[from] SaveError),

    /// Current view has nothing to export or copy
    #[error("Nothing to export from the {0} view")]
    NothingToExport(&'static str),

    /// Clipboard could not be reached
    #[error("Clipboard error: {0}")]
    Clipboard(String),
}
