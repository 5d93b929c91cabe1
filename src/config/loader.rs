//! Configuration Loader
//!
//! Loads and validates client configuration from a TOML file. Every section
//! is optional; an empty file yields the production defaults.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::adapters::credentials::{EnvCredentials, EnvFileCredentials, DEFAULT_TOKEN_KEY};
use crate::adapters::cyphergoat::DEFAULT_BASE_URL;
use crate::ports::credentials::{AuthPolicy, CredentialProvider};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiSection,
    #[serde(default)]
    pub credentials: CredentialsSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

/// CypherGoat API section
#[derive(Debug, Clone, Deserialize)]
pub struct ApiSection {
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ApiSection {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl ApiSection {
    /// Get base URL with environment variable override
    /// Checks CYPHERGOAT_API_URL env var first, falls back to config value
    pub fn get_base_url(&self) -> String {
        self.base_url_with_override(std::env::var("CYPHERGOAT_API_URL").ok())
    }

    fn base_url_with_override(&self, env_value: Option<String>) -> String {
        env_value
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }
}

/// API token section
#[derive(Debug, Clone, Deserialize)]
pub struct CredentialsSection {
    /// dotenv file holding the token; process env is used when unset
    #[serde(default)]
    pub env_file: Option<PathBuf>,
    /// Key (or env var) holding the token
    #[serde(default = "default_token_key")]
    pub key: String,
    /// "required" aborts on load failure, "fail_open" proceeds unauthenticated
    #[serde(default)]
    pub policy: AuthPolicy,
}

impl Default for CredentialsSection {
    fn default() -> Self {
        Self {
            env_file: None,
            key: default_token_key(),
            policy: AuthPolicy::default(),
        }
    }
}

impl CredentialsSection {
    /// Credential source described by this section
    pub fn provider(&self) -> Box<dyn CredentialProvider> {
        match self.env_file_path() {
            Some(path) => Box::new(EnvFileCredentials::new(path).with_key(self.key.clone())),
            None => Box::new(EnvCredentials::new(self.key.clone())),
        }
    }

    /// `env_file` with a leading `~` expanded to the home directory
    pub fn env_file_path(&self) -> Option<PathBuf> {
        self.env_file.as_ref().map(|path| {
            PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref())
        })
    }
}

/// Logging configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSection {
    /// Log level or filter directive: "trace", "debug", "info", "cyphergoat=debug", ...
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_token_key() -> String {
    DEFAULT_TOKEN_KEY.to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

fn validate_base_url(base_url: &str) -> Result<(), ConfigError> {
    let url = Url::parse(base_url).map_err(|e| {
        ConfigError::ValidationError(format!(
            "base_url '{}' is not a valid URL: {}",
            base_url, e
        ))
    })?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError(format!(
            "base_url must be http or https, got {}",
            url.scheme()
        )));
    }

    Ok(())
}

/// Load configuration from a TOML file
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config, ConfigError> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

impl Config {
    /// Validate all configuration parameters
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Effective URL, after the environment override
        validate_base_url(&self.api.get_base_url())?;

        if self.credentials.key.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "credentials.key cannot be empty".to_string(),
            ));
        }

        if let Err(e) = tracing_subscriber::EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::ValidationError(format!(
                "logging.level '{}' is invalid: {}",
                self.logging.level, e
            )));
        }

        Ok(())
    }
}
