//! Error types for the demonstrations

use thiserror::Error;

/// Error type for the demonstrations
#[derive(Error, Debug)]
pub enum Error {
    /// Engine error
    #[error("View error: {0}")]
    View(#[from] views_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON format error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for the demonstrations
pub type Result<T> = std::result::Result<T, Error>;
