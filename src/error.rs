//! Error types for ptxdiff

use thiserror::Error;

/// Errors that can occur while building or rendering visualizations
#[derive(Error, Debug)]
pub enum VizError {
    /// Requested kernel not found in the PTX data
    #[error("Kernel not found: {0}")]
    KernelNotFound(String),

    /// External layout engine failed
    #[error("Graph rendering failed: {0}")]
    Render(String),

    /// File I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for ptxdiff operations
pub type Result<T> = std::result::Result<T, VizError>;
