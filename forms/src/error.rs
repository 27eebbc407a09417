//! Error types surfaced by the form ports.

use serde_json::Value;

/// Failure reported by a [`crate::ports::Transport`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TransportError {
    /// The request never produced a response (offline, CORS, aborted).
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server responded with status {status}")]
    Status { status: u16, body: Option<Value> },

    /// A success response body could not be decoded.
    #[error("response decode failed: {0}")]
    Decode(String),
}

impl TransportError {
    /// Response body attached to the error, if the server sent one.
    #[must_use]
    pub fn body(&self) -> Option<&Value> {
        match self {
            Self::Status { body, .. } => body.as_ref(),
            Self::Network(_) | Self::Decode(_) => None,
        }
    }
}

/// Failure reported by a [`crate::ports::TokenStore`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable in this environment.
    #[error("storage unavailable")]
    Unavailable,

    /// The backend refused the write (quota, privacy mode).
    #[error("storage write failed for key {key}: {reason}")]
    Write { key: String, reason: String },
}
