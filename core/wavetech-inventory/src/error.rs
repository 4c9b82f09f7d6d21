//! Error types for record keeping.

use thiserror::Error;
use wavetech_storage::StorageError;

/// Result type for record operations.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Errors that can occur while editing records.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The record failed one or more field checks.
    #[error("please correct the following errors:\n{}", .0.join("\n"))]
    Validation(Vec<String>),

    /// A delete offset was past the end of the list.
    #[error("index {index} out of range for {len} records")]
    IndexOutOfRange { index: usize, len: usize },

    /// Unknown record kind name.
    #[error("unknown record kind: {0}")]
    UnknownKind(String),

    /// Persisting the list failed.
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
}

impl InventoryError {
    /// Returns the individual validation messages, if this is a validation error.
    #[must_use]
    pub fn violations(&self) -> &[String] {
        match self {
            Self::Validation(messages) => messages,
            _ => &[],
        }
    }
}
