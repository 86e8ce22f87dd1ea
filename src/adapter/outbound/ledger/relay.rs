//! Ledger writer that submits through a signing relay.
//!
//! The relay receives a function-call description and signs it with the
//! oracle account key it holds.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::settings::LedgerConfig;
use crate::domain::id::MarketId;
use crate::domain::outcome::Outcome;
use crate::error::{ConfigError, Error, Result};
use crate::port::outbound::ledger::LedgerWriter;

const RESOLVE_METHOD: &str = "resolveMarketWithOutcome";
/// 30 TGas.
const RESOLVE_GAS: &str = "30000000000000";

#[derive(Debug, Serialize)]
struct FunctionCall<'a> {
    contract_id: &'a str,
    signer_id: &'a str,
    method_name: &'static str,
    args: ResolveArgs<'a>,
    gas: &'static str,
    deposit: &'static str,
}

#[derive(Debug, Serialize)]
struct ResolveArgs<'a> {
    #[serde(rename = "marketId")]
    market_id: Value,
    #[serde(rename = "outcomeStr")]
    outcome: &'a str,
}

/// Numeric ids go over the wire as numbers, anything else as a string.
fn market_id_value(market_id: &MarketId) -> Value {
    market_id
        .as_str()
        .parse::<u64>()
        .map_or_else(|_| Value::String(market_id.to_string()), Value::from)
}

pub struct RelayLedger {
    http: HttpClient,
    relay_url: String,
    token: Option<String>,
    contract_id: String,
    account_id: String,
}

impl RelayLedger {
    pub fn new(
        http: HttpClient,
        relay_url: impl Into<String>,
        contract_id: impl Into<String>,
        account_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            relay_url: relay_url.into(),
            token: None,
            contract_id: contract_id.into(),
            account_id: account_id.into(),
        }
    }

    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build from config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when no relay URL is configured.
    #[allow(clippy::result_large_err)]
    pub fn from_config(config: &LedgerConfig, http: HttpClient) -> Result<Self> {
        let relay_url = config
            .relay_url
            .clone()
            .ok_or(ConfigError::MissingField { field: "relay_url" })?;
        let ledger = Self::new(
            http,
            relay_url,
            config.contract_id.clone(),
            config.account_id.clone(),
        );
        Ok(match &config.relay_token {
            Some(token) => ledger.with_token(token.clone()),
            None => ledger,
        })
    }

    fn call_for<'a>(&'a self, market_id: &MarketId, outcome: &'a str) -> FunctionCall<'a> {
        FunctionCall {
            contract_id: &self.contract_id,
            signer_id: &self.account_id,
            method_name: RESOLVE_METHOD,
            args: ResolveArgs {
                market_id: market_id_value(market_id),
                outcome,
            },
            gas: RESOLVE_GAS,
            deposit: "0",
        }
    }
}

#[async_trait]
impl LedgerWriter for RelayLedger {
    async fn resolve(&self, market_id: &MarketId, outcome: Outcome) -> Result<()> {
        let call = self.call_for(market_id, outcome.as_str());
        debug!(market_id = %market_id, relay = %self.relay_url, "Submitting resolution");

        let mut request = self.http.post(&self.relay_url).json(&call);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Ledger(format!("relay returned {status}: {body}")));
        }

        info!(market_id = %market_id, outcome = %outcome, "Resolution submitted");
        Ok(())
    }

    fn writer_name(&self) -> &'static str {
        "relay"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger() -> RelayLedger {
        RelayLedger::new(
            HttpClient::new(),
            "https://relay.example/call",
            "market.testnet",
            "oracle.testnet",
        )
    }

    #[test]
    fn call_body_matches_contract_method() {
        let ledger = ledger();
        let call = ledger.call_for(&MarketId::from("12"), Outcome::Yes.as_str());
        let json = serde_json::to_value(&call).unwrap();

        assert_eq!(json["method_name"], "resolveMarketWithOutcome");
        assert_eq!(json["contract_id"], "market.testnet");
        assert_eq!(json["signer_id"], "oracle.testnet");
        assert_eq!(json["args"]["marketId"], 12);
        assert_eq!(json["args"]["outcomeStr"], "yes");
        assert_eq!(json["gas"], "30000000000000");
        assert_eq!(json["deposit"], "0");
    }

    #[test]
    fn non_numeric_ids_stay_strings() {
        assert_eq!(market_id_value(&MarketId::from("m-1")), Value::from("m-1"));
    }

    #[test]
    fn from_config_requires_relay_url() {
        let config = LedgerConfig::default();
        assert!(RelayLedger::from_config(&config, HttpClient::new()).is_err());
    }
}
