//! Error types for client operations.
//!
//! The taxonomy distinguishes transport failures, HTTP error statuses,
//! application-level envelope failures, and malformed envelopes. Callers
//! that only need a user-visible string collapse all of them via `Display`.

use reqwest::StatusCode;
use thiserror::Error;

/// Errors that can occur while calling the prediction service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network-level failure, including timeouts.
    #[error("request failed: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The service answered with an HTTP error status.
    #[error("service returned {status}")]
    Status { status: StatusCode },

    /// The envelope reported `success: false`.
    #[error("{message}")]
    Api { message: String },

    /// The envelope violated its own contract (success without payload).
    #[error("malformed response: {reason}")]
    Malformed { reason: String },
}

impl ApiError {
    /// Error kind string for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Transport { .. } => "transport",
            ApiError::Status { .. } => "status",
            ApiError::Api { .. } => "api",
            ApiError::Malformed { .. } => "malformed",
        }
    }
}
