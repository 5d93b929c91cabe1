//! Response Envelope
//!
//! CypherGoat uses one wire shape for success and failure: either
//! `{"error": "<message>"}` or the endpoint's payload. The error key is
//! checked before typed decoding, otherwise an error body would decode into
//! an empty payload.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{Map, Value};

use super::error::ApiError;
use crate::domain::{Quote, Transaction};

/// Decoded response: remote error or typed payload
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope<T> {
    Remote(String),
    Payload(T),
}

impl<T: DeserializeOwned> Envelope<T> {
    /// Parse raw bytes once into a JSON object, then branch on the
    /// `error` discriminant.
    ///
    /// Any non-object body (array, scalar) is a decode error. Only a
    /// string-valued `error` counts as a remote error.
    pub fn decode(bytes: &[u8]) -> Result<Self, ApiError> {
        let map: Map<String, Value> = serde_json::from_slice(bytes)?;

        if let Some(message) = map.get("error").and_then(Value::as_str) {
            return Ok(Envelope::Remote(message.to_string()));
        }

        Ok(Envelope::Payload(T::deserialize(Value::Object(map))?))
    }
}

impl<T> Envelope<T> {
    pub fn into_result(self) -> Result<T, ApiError> {
        match self {
            Envelope::Payload(payload) => Ok(payload),
            Envelope::Remote(message) => {
                tracing::warn!("CypherGoat returned error: {}", message);
                Err(ApiError::Remote(message))
            }
        }
    }
}

/// Decode `bytes` into `T`, surfacing remote errors first
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    Envelope::decode(bytes)?.into_result()
}

/// `/estimate` payload
#[derive(Debug, Deserialize)]
pub(crate) struct RatesPayload {
    #[serde(default)]
    pub rates: Option<Vec<Quote>>,
}

/// `/swap` and `/transaction` payload
#[derive(Debug, Deserialize)]
pub(crate) struct TransactionPayload {
    #[serde(default)]
    pub transaction: Option<Transaction>,
}
