//! CypherGoat Error Types
//!
//! Error taxonomy for estimate and transaction calls.

use thiserror::Error;

use crate::ports::credentials::CredentialError;
use crate::ports::transport::TransportError;

/// Errors returned by CypherGoat API operations
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network or TLS failure; never retried here
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Malformed JSON or a payload that does not match the endpoint's shape
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// The service answered `{"error": "<message>"}`
    #[error("{0}")]
    Remote(String),

    /// Well-formed payload lacking a required field
    #[error("Response missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl ApiError {
    /// Message reported by the service, if this is a remote error
    pub fn remote_message(&self) -> Option<&str> {
        match self {
            ApiError::Remote(msg) => Some(msg),
            _ => None,
        }
    }

    /// Whether the failure happened before any response was read
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_))
    }
}

/// Errors building a client from configuration
#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Failed to load API token: {0}")]
    Credentials(#[from] CredentialError),

    #[error("Failed to create HTTP transport: {0}")]
    Transport(#[from] TransportError),

    #[error("Invalid base URL: {0}")]
    BaseUrl(#[from] url::ParseError),
}
