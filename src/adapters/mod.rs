//! Adapters Layer - External System Implementations
//!
//! - CypherGoat: aggregator API client and response decoding
//! - HTTP: reqwest implementation of the Transport port
//! - Credentials: token sources (dotenv file, environment, static)

pub mod credentials;
pub mod cyphergoat;
pub mod http_transport;

pub use credentials::{EnvCredentials, EnvFileCredentials, StaticCredentials};
pub use cyphergoat::{ApiError, CypherGoatClient, SetupError};
pub use http_transport::HttpTransport;
