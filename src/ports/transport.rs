use async_trait::async_trait;
use thiserror::Error;

/// Network-level failure (DNS, connect, TLS, body read).
///
/// The HTTP status line is never inspected, so a 4xx/5xx reply is not a
/// transport error: its body goes to the decoder like any other.
#[derive(Debug, Error)]
#[error("request to {url} failed: {source}")]
pub struct TransportError {
    pub url: String,
    #[source]
    pub source: Box<dyn std::error::Error + Send + Sync>,
}

impl TransportError {
    pub fn new(
        url: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self {
            url: url.into(),
            source: source.into(),
        }
    }
}

/// Authenticated GET returning the raw response body
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError>;
}
