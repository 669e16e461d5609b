//! Error types for pointfield

use thiserror::Error;

/// Main error type for pointfield operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid format: {0}")]
    InvalidFormat(String),

    #[error("Error reading row {row} of {element} block")]
    RowShape { element: String, row: usize },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for pointfield operations
pub type Result<T> = std::result::Result<T, Error>;
