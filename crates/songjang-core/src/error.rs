//! Error types for the songjang-core library.
//!
//! Parsing itself never fails; these errors only come from the edges
//! (configuration files and their serialization).

use thiserror::Error;

/// Main error type for the songjang library.
#[derive(Error, Debug)]
pub enum SongjangError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type for the songjang library.
pub type Result<T> = std::result::Result<T, SongjangError>;
