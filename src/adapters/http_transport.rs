//! HTTP Transport
//!
//! reqwest implementation of the Transport port. Attaches the bearer token
//! and returns the body for any HTTP status.

use async_trait::async_trait;
use reqwest::Client;

use crate::ports::credentials::BearerToken;
use crate::ports::transport::{Transport, TransportError};

#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: Client,
    token: BearerToken,
}

impl HttpTransport {
    pub fn new(token: BearerToken) -> Result<Self, TransportError> {
        let http = Client::builder()
            .build()
            .map_err(|e| TransportError::new("<client>", e))?;

        Ok(Self::with_client(http, token))
    }

    /// Reuse an existing reqwest client (connection pool, proxy settings)
    pub fn with_client(http: Client, token: BearerToken) -> Self {
        Self { http, token }
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, url: &str) -> Result<Vec<u8>, TransportError> {
        let mut req = self.http.get(url);

        if let Some(token) = self.token.as_str() {
            req = req.bearer_auth(token);
        }

        let response = req
            .send()
            .await
            .map_err(|e| TransportError::new(url, e))?;

        tracing::debug!(status = %response.status(), "CypherGoat response received");

        let body = response
            .bytes()
            .await
            .map_err(|e| TransportError::new(url, e))?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_creation() {
        let transport = HttpTransport::new(BearerToken::new("key"));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_with_client_keeps_token() {
        let transport = HttpTransport::with_client(Client::new(), BearerToken::new("shared"));
        assert_eq!(transport.token.as_str(), Some("shared"));
    }

    #[test]
    fn test_transport_debug_hides_token() {
        let transport = HttpTransport::new(BearerToken::new("hidden-token")).unwrap();
        assert!(!format!("{:?}", transport).contains("hidden-token"));
    }
}
