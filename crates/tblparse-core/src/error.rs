//! Error types for tblparse.

use thiserror::Error;

/// Main error type for tblparse operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Cell address could not be parsed as A1 notation
    #[error("Invalid cell address: {0}")]
    InvalidAddress(String),

    /// Sheet data does not have the expected shape (e.g. null or not a map)
    #[error("Malformed sheet: {0}")]
    MalformedSheet(String),

    /// Block bounds or row descriptors violate block invariants
    #[error("Invalid block: rows {start_row}-{end_row}")]
    InvalidBlock {
        /// First row (1-indexed)
        start_row: u32,
        /// Last row (1-indexed, inclusive)
        end_row: u32,
    },

    /// Uploaded file could not be decoded into a sheet
    #[error("Decode error: {0}")]
    Decode(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
