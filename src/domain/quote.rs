//! Swap Quotes
//!
//! One exchange's offer for a requested conversion, plus the request that
//! produced it. Quotes are ranked by receivable amount, best first.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Parameters for an estimate request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Coin being sent (e.g. "btc")
    pub coin1: String,
    /// Coin being received (e.g. "xmr")
    pub coin2: String,
    /// Amount of `coin1` to send
    pub amount: Decimal,
    /// Network of `coin1`
    pub network1: String,
    /// Network of `coin2`
    pub network2: String,
    /// Passed through as `best=true|false`; ranking on the remote side is opaque
    #[serde(default)]
    pub best: bool,
}

impl QuoteRequest {
    /// Create a new quote request with required parameters
    pub fn new(
        coin1: impl Into<String>,
        coin2: impl Into<String>,
        amount: Decimal,
        network1: impl Into<String>,
        network2: impl Into<String>,
    ) -> Self {
        Self {
            coin1: coin1.into(),
            coin2: coin2.into(),
            amount,
            network1: network1.into(),
            network2: network2.into(),
            best: false,
        }
    }

    /// Set the best-rate hint
    pub fn with_best(mut self, best: bool) -> Self {
        self.best = best;
        self
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("coin1", self.coin1.clone()),
            ("coin2", self.coin2.clone()),
            ("amount", self.amount.to_string()),
            ("network1", self.network1.clone()),
            ("network2", self.network2.clone()),
            ("best", self.best.to_string()),
        ]
    }
}

/// A single exchange's offer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Quote {
    #[serde(rename = "Exchange", default)]
    pub exchange_name: String,
    /// Amount of `coin2` the user receives
    #[serde(rename = "Amount", default)]
    pub receive_amount: Decimal,
    #[serde(default)]
    pub min_amount: Decimal,
    #[serde(default)]
    pub coin1: String,
    #[serde(default)]
    pub coin2: String,
    #[serde(default)]
    pub network1: String,
    #[serde(default)]
    pub network2: String,
    #[serde(default)]
    pub send_amount: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "ImageURL", default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

impl Quote {
    /// Overwrite the request-scoped fields with the caller's request.
    ///
    /// The remote may omit or mis-echo these, so they are never trusted.
    pub fn annotate(&mut self, request: &QuoteRequest) {
        self.coin1.clone_from(&request.coin1);
        self.coin2.clone_from(&request.coin2);
        self.network1.clone_from(&request.network1);
        self.network2.clone_from(&request.network2);
        self.send_amount = request.amount;
    }
}

/// Sort quotes best-first (descending receivable amount).
///
/// The sort is stable, equal amounts keep the order the remote sent.
pub fn rank_quotes(quotes: &mut [Quote]) {
    quotes.sort_by(|a, b| b.receive_amount.cmp(&a.receive_amount));
}
