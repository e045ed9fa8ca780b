//! Error types for technicolor

use thiserror::Error;

/// Main error type for technicolor operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while reading input or writing styled output
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Unknown style path in inline markup
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// Markup replacement error
    #[error("Markup error: {0}")]
    Markup(String),
}

/// Result type alias for technicolor operations
pub type Result<T> = std::result::Result<T, Error>;
