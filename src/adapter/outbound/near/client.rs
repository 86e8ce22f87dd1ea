//! Market source backed by the prediction-market contract's view method.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::{debug, warn};

use super::dto::{CallFunctionResult, ContractMarket, RpcRequest, RpcResponse};
use crate::domain::market::Market;
use crate::error::{Error, Result};
use crate::port::outbound::market::MarketSource;

const LIST_MARKETS_METHOD: &str = "getAllMarkets";

/// Lists markets via NEAR JSON-RPC.
pub struct NearMarketSource {
    http: HttpClient,
    rpc_url: String,
    contract_id: String,
}

impl NearMarketSource {
    pub fn new(
        http: HttpClient,
        rpc_url: impl Into<String>,
        contract_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            rpc_url: rpc_url.into(),
            contract_id: contract_id.into(),
        }
    }

    async fn view(&self, method_name: &str) -> Result<Vec<u8>> {
        let request = RpcRequest::view(&self.contract_id, method_name);
        let response = self
            .http
            .post(&self.rpc_url)
            .json(&request)
            .send()
            .await?
            .error_for_status()?
            .json::<RpcResponse<CallFunctionResult>>()
            .await?;

        if let Some(error) = response.error {
            return Err(Error::Rpc(error.to_string()));
        }
        let result = response
            .result
            .ok_or_else(|| Error::Rpc("response has neither result nor error".into()))?;
        if let Some(error) = result.error {
            return Err(Error::Rpc(error));
        }
        for log in &result.logs {
            debug!(contract = %self.contract_id, log = %log, "Contract log");
        }
        Ok(result.result)
    }
}

/// Decode the contract's market list, dropping entries with unreadable fields.
pub(crate) fn decode_markets(bytes: &[u8]) -> Result<Vec<Market>> {
    let raw: Vec<ContractMarket> = serde_json::from_slice(bytes)?;
    Ok(raw
        .into_iter()
        .filter_map(|market| {
            let id = market.id.as_text();
            let converted = market.into_market();
            if converted.is_none() {
                warn!(market_id = %id, "Skipping market with unreadable endTime");
            }
            converted
        })
        .collect())
}

#[async_trait]
impl MarketSource for NearMarketSource {
    async fn list_markets(&self) -> Result<Vec<Market>> {
        let bytes = self.view(LIST_MARKETS_METHOD).await?;
        let markets = decode_markets(&bytes)?;
        debug!(count = markets.len(), contract = %self.contract_id, "Fetched markets");
        Ok(markets)
    }

    fn source_name(&self) -> &'static str {
        "near-rpc"
    }
}
