//! Error types for the catat-core library.
//!
//! The extraction pipelines themselves are total over all string inputs and
//! never return errors; these types cover the surrounding concerns
//! (configuration files, serialization).

use thiserror::Error;

/// Main error type for the catat library.
#[derive(Error, Debug)]
pub enum CatatError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the catat library.
pub type Result<T> = std::result::Result<T, CatatError>;
