//! Error types for feature export.

use thiserror::Error;

/// Errors that can occur while exporting features.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("No features to export")]
    NothingToExport,

    #[error("Failed to encode GeoJSON: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
