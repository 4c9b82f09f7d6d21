//! Error types for the storage layer.

use thiserror::Error;

/// Result type for preference store operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for secure store operations.
pub type SecureStoreResult<T> = Result<T, SecureStoreError>;

/// Errors that can occur in preference store operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing document is not a JSON object.
    #[error("invalid data: {0}")]
    InvalidData(String),

    /// A lock guarding the in-memory copy was poisoned.
    #[error("preference store lock poisoned")]
    LockPoisoned,
}

/// Errors reported by a [`SecureStore`](crate::SecureStore).
#[derive(Debug, Error)]
pub enum SecureStoreError {
    /// No secret is stored under the requested key.
    #[error("secure item not found")]
    NotFound,

    /// The platform store reported any other failure.
    #[error("unexpected secure store status: {0}")]
    UnexpectedStatus(String),
}

impl SecureStoreError {
    /// Returns true if the error only means "nothing stored yet".
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

impl From<keyring::Error> for SecureStoreError {
    fn from(err: keyring::Error) -> Self {
        match err {
            keyring::Error::NoEntry => Self::NotFound,
            other => Self::UnexpectedStatus(other.to_string()),
        }
    }
}
