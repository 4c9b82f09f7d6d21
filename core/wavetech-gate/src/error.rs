//! Gate error types.
//!
//! None of these reach the user: the validator and controller fold every
//! failure into `GateState::UseNative`. They exist for logging and for
//! callers that drive the pieces directly.

use thiserror::Error;
use wavetech_storage::{SecureStoreError, StorageError};

/// Result type for gate operations.
pub type GateResult<T> = Result<T, GateError>;

/// Errors that can occur while running the gate.
#[derive(Debug, Error)]
pub enum GateError {
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("secure store error: {0}")]
    SecureStore(#[from] SecureStoreError),

    #[error("invalid configuration: {0}")]
    Config(String),
}
