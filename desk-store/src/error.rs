//! Error types for the store layer.

use desk_model::ValidationError;
use desk_remote::RemoteError;
use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The submitted form failed validation; nothing was sent.
    #[error("validation failed: {}", summarize(.0))]
    Invalid(Vec<ValidationError>),

    /// The remote collection call failed.
    #[error(transparent)]
    Remote(#[from] RemoteError),

    /// Key-value storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// IO error (file system).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StoreError {
    /// Field errors, if this is a validation failure.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            StoreError::Invalid(errors) => errors,
            _ => &[],
        }
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
