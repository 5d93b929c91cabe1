//! Configuration Module
//!
//! Loads and validates configuration from TOML files.

pub mod loader;

pub use loader::{
    ApiSection, Config, ConfigError, CredentialsSection, LoggingSection, load_config,
};
