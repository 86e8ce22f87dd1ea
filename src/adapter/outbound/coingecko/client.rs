//! CoinGecko REST client.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;
use url::Url;

use super::dto::{price_of, SimplePriceResponse};
use super::settings::CoinGeckoConfig;
use crate::adapter::outbound::http::{join, read_provider_json};
use crate::error::Result;
use crate::port::outbound::price::PriceDataProvider;

const API_KEY_HEADER: &str = "x-cg-demo-api-key";

/// HTTP client for the CoinGecko simple-price endpoint.
pub struct CoinGeckoClient {
    http: HttpClient,
    base_url: String,
    api_key: Option<String>,
    vs_currency: String,
    aliases: BTreeMap<String, String>,
}

impl CoinGeckoClient {
    #[must_use]
    pub fn from_config(config: &CoinGeckoConfig, http: HttpClient) -> Self {
        Self {
            http,
            base_url: config.api_url.clone(),
            api_key: config.api_key.clone(),
            vs_currency: config.vs_currency.to_lowercase(),
            aliases: config.alias_table(),
        }
    }

    /// CoinGecko coin id for a lower-cased symbol. Unknown symbols pass through.
    #[must_use]
    pub fn coin_id<'a>(&'a self, asset: &'a str) -> &'a str {
        self.aliases.get(asset).map_or(asset, String::as_str)
    }

    fn price_url(&self, coin_id: &str) -> Result<Url> {
        let mut url = Url::parse(&join(&self.base_url, "simple/price"))?;
        url.query_pairs_mut()
            .append_pair("ids", coin_id)
            .append_pair("vs_currencies", &self.vs_currency);
        Ok(url)
    }
}

#[async_trait]
impl PriceDataProvider for CoinGeckoClient {
    async fn fetch_price(&self, asset: &str) -> Result<Option<f64>> {
        let coin_id = self.coin_id(asset);
        let url = self.price_url(coin_id)?;
        debug!(asset, coin_id, "Fetching price");

        let mut request = self.http.get(url);
        if let Some(key) = &self.api_key {
            request = request.header(API_KEY_HEADER, key);
        }

        let response = request.send().await?;
        let response: SimplePriceResponse =
            read_provider_json(self.provider_name(), response).await?;

        Ok(price_of(&response, coin_id, &self.vs_currency))
    }

    fn provider_name(&self) -> &'static str {
        "coingecko"
    }
}
