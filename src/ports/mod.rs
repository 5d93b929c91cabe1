//! Ports Layer - Trait definitions for external dependencies
//!
//! - Transport: authenticated HTTP GET returning raw bytes
//! - Credentials: bearer token source, loaded once at startup

pub mod credentials;
pub mod transport;

pub use credentials::{AuthPolicy, BearerToken, CredentialError, CredentialProvider};
pub use transport::{Transport, TransportError};
