//! CypherGoat API Client
//!
//! Quote aggregation and swap transaction calls. Every operation issues
//! exactly one GET, with no retry and no timeout of its own.

use std::collections::HashMap;

use serde_json::Value;
use url::Url;

use super::envelope::{decode, RatesPayload, TransactionPayload};
use super::error::{ApiError, SetupError};
use crate::adapters::http_transport::HttpTransport;
use crate::config::Config;
use crate::domain::{rank_quotes, Quote, QuoteRequest, TradeRequest, Transaction};
use crate::ports::credentials::BearerToken;
use crate::ports::transport::Transport;

/// Production API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.cyphergoat.com";

/// CypherGoat exchange aggregator client
#[derive(Debug, Clone)]
pub struct CypherGoatClient<T = HttpTransport> {
    base_url: Url,
    transport: T,
}

impl CypherGoatClient<HttpTransport> {
    /// Build a client with the default endpoint and the given token
    pub fn new(token: BearerToken) -> Result<Self, SetupError> {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    pub fn with_base_url(base_url: &str, token: BearerToken) -> Result<Self, SetupError> {
        let transport = HttpTransport::new(token)?;
        Ok(Self::with_transport(Url::parse(base_url)?, transport))
    }

    /// Load the token once per the configured policy and build the client
    pub fn from_config(config: &Config) -> Result<Self, SetupError> {
        let provider = config.credentials.provider();
        let token = BearerToken::load(provider.as_ref(), config.credentials.policy)?;
        Self::with_base_url(&config.api.get_base_url(), token)
    }
}

impl<T: Transport> CypherGoatClient<T> {
    pub fn with_transport(base_url: Url, transport: T) -> Self {
        Self { base_url, transport }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Fetch quotes for a conversion, best deal first.
    ///
    /// Coin pair, network pair and send amount on every quote come from
    /// `request`, not from the payload. An empty list is a valid answer.
    pub async fn fetch_quotes(&self, request: &QuoteRequest) -> Result<Vec<Quote>, ApiError> {
        tracing::debug!(
            "Fetching quotes {} {} ({}) -> {} ({}), best={}",
            request.amount, request.coin1, request.network1,
            request.coin2, request.network2, request.best
        );

        let url = self.endpoint("estimate", &request.query_pairs())?;
        let payload: RatesPayload = self.call(&url).await?;

        let mut quotes = payload.rates.unwrap_or_default();
        rank_quotes(&mut quotes);
        for quote in &mut quotes {
            quote.annotate(request);
        }

        tracing::info!(
            "Received {} quotes for {} -> {}",
            quotes.len(), request.coin1, request.coin2
        );
        Ok(quotes)
    }

    /// Create a trade
    pub async fn create_trade(&self, request: &TradeRequest) -> Result<Transaction, ApiError> {
        let url = self.endpoint("swap", &request.query_pairs())?;
        let payload: TransactionPayload = self.call(&url).await?;

        let transaction = payload
            .transaction
            .ok_or(ApiError::MissingField("transaction"))?;

        tracing::info!(
            "Trade created: provider={} id={}",
            transaction.provider.as_deref().unwrap_or("-"),
            transaction.id.as_deref().unwrap_or("-")
        );
        Ok(transaction)
    }

    /// Refresh the status of a trade with its provider.
    ///
    /// Returns a copy of `transaction` with only `status` replaced.
    pub async fn track_transaction(&self, transaction: &Transaction) -> Result<Transaction, ApiError> {
        let id = transaction
            .id
            .as_deref()
            .filter(|id| !id.is_empty())
            .ok_or(ApiError::MissingField("Id"))?;

        let mut query = vec![("id", id.to_string())];
        if let Some(provider) = transaction.routing_provider() {
            query.push(("provider", provider));
        }

        let url = self.endpoint("transaction", &query)?;
        let body: HashMap<String, Value> = self.call(&url).await?;

        let status = body
            .get("status")
            .and_then(Value::as_str)
            .ok_or(ApiError::MissingField("status"))?;

        tracing::debug!("Transaction {} status: {}", id, status);
        Ok(transaction.with_status(status))
    }

    /// Fetch a transaction by id.
    ///
    /// A payload without `transaction` yields the zero-valued record.
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, ApiError> {
        let url = self.endpoint("transaction", &[("id", id.to_string())])?;
        let payload: TransactionPayload = self.call(&url).await?;

        Ok(payload.transaction.unwrap_or_default())
    }

    fn endpoint(&self, path: &str, query: &[(&str, String)]) -> Result<Url, ApiError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse_with_params(&format!("{}/{}", base, path), query)?)
    }

    async fn call<P: serde::de::DeserializeOwned>(&self, url: &Url) -> Result<P, ApiError> {
        tracing::debug!("GET {}", url);
        let body = self.transport.get(url.as_str()).await?;
        decode(&body)
    }
}
