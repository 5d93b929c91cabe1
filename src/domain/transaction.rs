//! Swap Transactions
//!
//! Lifecycle record of one swap and the parameters used to create it.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle record of one swap.
///
/// Every field may be absent: a record is filled in progressively by
/// create, track and fetch calls. `status` is provider-defined free text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coin2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network1: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network2: Option<String>,
    /// Destination address for `coin2`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate_amount: Option<Decimal>,
    /// Exchange executing the trade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,
    /// Provider-side transaction id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_amount: Option<Decimal>,
    /// Tracking reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub track: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(rename = "KYC", default, skip_serializing_if = "Option::is_none")]
    pub kyc: Option<String>,
    /// Access token for the provider's status page
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub done: bool,
    /// Client-correlation id
    #[serde(rename = "CGID", default, skip_serializing_if = "Option::is_none")]
    pub cgid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Transaction {
    /// Copy of this record with only `status` replaced
    pub fn with_status(&self, status: impl Into<String>) -> Self {
        Self {
            status: Some(status.into()),
            ..self.clone()
        }
    }

    /// True for the zero-valued record (nothing observed yet)
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    /// Provider name as used for routing tracking requests
    pub fn routing_provider(&self) -> Option<String> {
        self.provider
            .as_deref()
            .filter(|p| !p.is_empty())
            .map(str::to_lowercase)
    }
}

/// Parameters for creating a trade
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub coin1: String,
    pub coin2: String,
    pub amount: Decimal,
    /// Destination address for `coin2`
    pub address: String,
    /// Affiliate/referral tag
    pub partner: String,
    pub network1: String,
    pub network2: String,
}

impl TradeRequest {
    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("coin1", self.coin1.clone()),
            ("coin2", self.coin2.clone()),
            ("amount", self.amount.to_string()),
            ("partner", self.partner.clone()),
            ("address", self.address.clone()),
            ("network1", self.network1.clone()),
            ("network2", self.network2.clone()),
        ]
    }
}
