//! Environment Override Tests
//!
//! `CYPHERGOAT_API_URL` is process-global, so these run in their own test
//! binary, one test, sequential steps.

use std::io::Write;

use cyphergoat::config::{load_config, ConfigError};
use tempfile::NamedTempFile;

#[test]
fn test_api_url_env_override_applied_and_validated() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"[api]\nbase_url = \"https://api.cyphergoat.com\"\n").unwrap();

    // Valid override replaces the configured URL
    std::env::set_var("CYPHERGOAT_API_URL", "http://127.0.0.1:18080");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api.get_base_url(), "http://127.0.0.1:18080");
    assert_eq!(config.api.base_url, "https://api.cyphergoat.com");

    // Invalid override fails validation even though the file is valid
    std::env::set_var("CYPHERGOAT_API_URL", "ftp://mirror.cyphergoat.com");
    let result = load_config(file.path());
    assert!(matches!(result, Err(ConfigError::ValidationError(_))));

    std::env::remove_var("CYPHERGOAT_API_URL");
    let config = load_config(file.path()).unwrap();
    assert_eq!(config.api.get_base_url(), "https://api.cyphergoat.com");
}
