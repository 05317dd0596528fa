//! Error types for LaneCut.

use thiserror::Error;

/// Main error type for LaneCut operations.
///
/// Gesture handling never errors (stale or out-of-range input is a silent
/// no-op); this type covers the app shell and resource loading.
#[derive(Error, Debug)]
pub enum LanecutError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for LaneCut operations.
pub type Result<T> = std::result::Result<T, LanecutError>;
