//! Error types for remote collection calls.

use thiserror::Error;

/// Result type for remote operations.
pub type RemoteResult<T> = Result<T, RemoteError>;

/// Errors that can occur while talking to a remote collection.
#[derive(Debug, Error)]
pub enum RemoteError {
    /// The request never produced a response (DNS, connect, TLS, timeout).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    /// The response body did not match the expected record shape.
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The client could not be built from its configuration.
    #[error("invalid configuration: {0}")]
    Config(String),
}

impl RemoteError {
    /// Returns true if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, RemoteError::Status { status: 404, .. })
    }

    /// Returns the HTTP status, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            RemoteError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
