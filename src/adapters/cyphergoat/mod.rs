//! CypherGoat Adapter
//!
//! Client for the CypherGoat exchange aggregator: ranked estimates, trade
//! creation and transaction tracking over one shared response envelope.

mod client;
mod envelope;
mod error;

pub use client::{CypherGoatClient, DEFAULT_BASE_URL};
pub use envelope::{decode, Envelope};
pub use error::{ApiError, SetupError};
