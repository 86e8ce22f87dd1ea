//! NEAR JSON-RPC request and response types.

use serde::{Deserialize, Serialize};

use crate::domain::id::MarketId;
use crate::domain::market::Market;

/// Base64 of `{}`: view methods called without arguments.
pub const EMPTY_ARGS_BASE64: &str = "e30=";

#[derive(Debug, Serialize)]
pub struct RpcRequest<'a> {
    pub jsonrpc: &'static str,
    pub id: &'static str,
    pub method: &'static str,
    pub params: CallFunctionParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct CallFunctionParams<'a> {
    pub request_type: &'static str,
    pub finality: &'static str,
    pub account_id: &'a str,
    pub method_name: &'a str,
    pub args_base64: &'a str,
}

impl<'a> RpcRequest<'a> {
    /// A `query` / `call_function` request against final state.
    #[must_use]
    pub const fn view(account_id: &'a str, method_name: &'a str) -> Self {
        Self {
            jsonrpc: "2.0",
            id: "verity",
            method: "query",
            params: CallFunctionParams {
                request_type: "call_function",
                finality: "final",
                account_id,
                method_name,
                args_base64: EMPTY_ARGS_BASE64,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RpcResponse<T> {
    #[serde(default = "Option::default")]
    pub result: Option<T>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

/// Result of a view call: the method's JSON return value as raw bytes.
#[derive(Debug, Deserialize)]
pub struct CallFunctionResult {
    #[serde(default)]
    pub result: Vec<u8>,
    #[serde(default)]
    pub logs: Vec<String>,
    /// Contract execution error, reported inside an otherwise successful response.
    #[serde(default)]
    pub error: Option<String>,
}

/// The contract stores `u64`/`bigint` fields either as numbers or strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumberOrString {
    Number(u64),
    Text(String),
}

impl NumberOrString {
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
        }
    }
}

/// A market as returned by `getAllMarkets`. Pools and bets are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct ContractMarket {
    pub id: NumberOrString,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub resolved: bool,
    #[serde(rename = "endTime", default)]
    pub end_time: Option<NumberOrString>,
}

impl ContractMarket {
    /// Convert to a domain market; `None` when `endTime` is unreadable.
    #[must_use]
    pub fn into_market(self) -> Option<Market> {
        let end_time_ns = match &self.end_time {
            Some(value) => value.as_u64()?,
            None => 0,
        };
        Some(
            Market::new(
                MarketId::new(self.id.as_text()),
                self.description,
                end_time_ns,
            )
            .with_resolved(self.resolved),
        )
    }
}
