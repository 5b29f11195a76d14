//! Storage error types.

use thiserror::Error;

/// Errors that can occur when using the store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open the store directory.
    #[error("Failed to open store: {0}")]
    OpenError(String),

    /// Failed to serialize a value.
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// Failed to read or write a key.
    #[error("Store operation failed: {0}")]
    IoError(String),

    /// A stored value exists but cannot be decoded.
    #[error("Corrupt value under key {key}: {reason}")]
    CorruptValue { key: String, reason: String },

    /// Key contains characters that cannot map to a file name.
    #[error("Invalid key: {0}")]
    InvalidKey(String),
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        StoreError::IoError(e.to_string())
    }
}
