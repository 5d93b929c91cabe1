//! Credential Sources
//!
//! Implementations of `CredentialProvider`: a dotenv file, the process
//! environment, or a fixed string.

use std::path::PathBuf;

use crate::ports::credentials::{CredentialError, CredentialProvider};

/// Default key holding the CypherGoat API token
pub const DEFAULT_TOKEN_KEY: &str = "API_KEY";

/// Reads the token from a dotenv file without touching the process environment
#[derive(Debug, Clone)]
pub struct EnvFileCredentials {
    path: PathBuf,
    key: String,
}

impl EnvFileCredentials {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            key: DEFAULT_TOKEN_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }
}

impl CredentialProvider for EnvFileCredentials {
    fn load_token(&self) -> Result<String, CredentialError> {
        for item in dotenvy::from_path_iter(&self.path)? {
            let (key, value) = item?;
            if key == self.key {
                return non_empty(&self.key, value);
            }
        }
        Err(CredentialError::MissingKey(self.key.clone()))
    }
}

/// Reads the token from a process environment variable
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_KEY)
    }
}

impl CredentialProvider for EnvCredentials {
    fn load_token(&self) -> Result<String, CredentialError> {
        let value = std::env::var(&self.var)
            .map_err(|_| CredentialError::MissingKey(self.var.clone()))?;
        non_empty(&self.var, value)
    }
}

/// Fixed token
#[derive(Clone)]
pub struct StaticCredentials(String);

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }
}

impl CredentialProvider for StaticCredentials {
    fn load_token(&self) -> Result<String, CredentialError> {
        non_empty("static", self.0.clone())
    }
}

fn non_empty(key: &str, value: String) -> Result<String, CredentialError> {
    if value.trim().is_empty() {
        return Err(CredentialError::EmptyToken(key.to_string()));
    }
    Ok(value)
}
