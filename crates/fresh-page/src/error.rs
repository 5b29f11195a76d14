//! Page-level error types.

use thiserror::Error;

/// Errors that can occur while wiring or running the page.
#[derive(Error, Debug)]
pub enum PageError {
    /// Local storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] fresh_store::StoreError),

    /// Domain error.
    #[error("Commerce error: {0}")]
    Commerce(#[from] fresh_commerce::CommerceError),
}
