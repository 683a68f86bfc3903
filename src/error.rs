//! Error types for tappable-text
//!
//! The segmentation pipeline itself is total and never fails. These errors
//! only come from the configuration boundary (loading text definitions)
//! and from the terminal host.

use thiserror::Error;

/// Result type alias for tappable-text operations
pub type Result<T> = std::result::Result<T, TappableError>;

/// Configuration and host error types
#[derive(Error, Debug)]
pub enum TappableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid text definition: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Unknown color: {0}")]
    UnknownColor(String),

    #[error("No handler bound for action: {0}")]
    UnknownAction(String),

    #[error("{0}")]
    Message(String),
}
