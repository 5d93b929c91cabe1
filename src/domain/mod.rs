//! Domain Layer - Quotes and swap transactions
//!
//! Pure data types and ranking logic with no I/O. The adapters layer turns
//! CypherGoat responses into these types.

pub mod quote;
pub mod transaction;

pub use quote::{rank_quotes, Quote, QuoteRequest};
pub use transaction::{TradeRequest, Transaction};
