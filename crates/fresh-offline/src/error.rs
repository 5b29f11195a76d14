//! Worker error types.

use thiserror::Error;

/// Errors that can occur in the offline worker.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Network fetch failed (offline, DNS, reset).
    #[error("Fetch failed: {0}")]
    FetchFailed(String),

    /// A lifecycle event arrived in the wrong state.
    #[error("Worker is {state}, cannot handle {event}")]
    InvalidLifecycle { state: String, event: String },

    /// Push payload could not be decoded.
    #[error("Invalid push payload: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for WorkerError {
    fn from(e: serde_json::Error) -> Self {
        WorkerError::InvalidPayload(e.to_string())
    }
}
