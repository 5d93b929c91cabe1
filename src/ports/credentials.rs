//! Credential Port
//!
//! Supplies the bearer token sent with every CypherGoat request. The token
//! is loaded once at startup and is read-only afterwards.

use std::fmt;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading the API token
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("Failed to read env file: {0}")]
    EnvFile(#[from] dotenvy::Error),

    #[error("Credential key not found: {0}")]
    MissingKey(String),

    #[error("Credential key {0} is empty")]
    EmptyToken(String),
}

/// Source of the API token
pub trait CredentialProvider {
    fn load_token(&self) -> Result<String, CredentialError>;
}

/// What to do when the token cannot be loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthPolicy {
    /// Loading failure aborts startup
    #[default]
    Required,
    /// Loading failure is logged and requests go out without Authorization
    FailOpen,
}

/// Immutable bearer token shared by all requests
#[derive(Clone, Default, PartialEq, Eq)]
pub struct BearerToken(Option<Arc<str>>);

impl BearerToken {
    pub fn new(token: impl AsRef<str>) -> Self {
        Self(Some(Arc::from(token.as_ref())))
    }

    /// No token, requests are sent unauthenticated
    pub fn anonymous() -> Self {
        Self(None)
    }

    /// Load the token once according to `policy`
    pub fn load(
        provider: &dyn CredentialProvider,
        policy: AuthPolicy,
    ) -> Result<Self, CredentialError> {
        match (provider.load_token(), policy) {
            (Ok(token), _) => Ok(Self::new(token)),
            (Err(e), AuthPolicy::FailOpen) => {
                tracing::warn!(
                    "API token unavailable ({}), continuing with unauthenticated requests",
                    e
                );
                Ok(Self::anonymous())
            }
            (Err(e), AuthPolicy::Required) => Err(e),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.0.as_deref()
    }

    pub fn is_anonymous(&self) -> bool {
        self.0.is_none()
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(_) => f.write_str("BearerToken(<redacted>)"),
            None => f.write_str("BearerToken(anonymous)"),
        }
    }
}
