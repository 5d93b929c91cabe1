//! CypherGoat - exchange aggregator client library
//!
//! Fetches ranked swap quotes from the CypherGoat aggregator, creates trades
//! and tracks their status.
//!
//! # Modules
//!
//! - `domain`: Quote and Transaction types, quote ranking
//! - `ports`: Trait abstractions (Transport, CredentialProvider)
//! - `adapters`: External implementations (CypherGoat client, reqwest transport, token sources)
//! - `config`: Configuration loading and validation
//! - `logging`: tracing subscriber setup

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod config;
pub mod logging;

pub use adapters::cyphergoat::{ApiError, CypherGoatClient, SetupError};
pub use domain::{Quote, QuoteRequest, TradeRequest, Transaction};
