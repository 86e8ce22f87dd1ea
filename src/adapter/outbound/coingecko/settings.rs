//! CoinGecko configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::application::resolution::price::DEFAULT_EQUALITY_TOLERANCE;

/// Price provider settings (`[price]` in the config file).
#[derive(Debug, Clone, Deserialize)]
pub struct CoinGeckoConfig {
    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Loaded from `COINGECKO_API_KEY` at runtime; optional on the public tier.
    #[serde(skip)]
    pub api_key: Option<String>,
    /// Quote currency.
    #[serde(default = "default_vs_currency")]
    pub vs_currency: String,
    /// Relative half-width of the `=` band.
    #[serde(default = "default_equality_tolerance")]
    pub equality_tolerance: f64,
    /// Symbol to CoinGecko coin id, merged over the built-ins.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

fn default_api_url() -> String {
    "https://api.coingecko.com/api/v3".into()
}

fn default_vs_currency() -> String {
    "usd".into()
}

const fn default_equality_tolerance() -> f64 {
    DEFAULT_EQUALITY_TOLERANCE
}

impl Default for CoinGeckoConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            vs_currency: default_vs_currency(),
            equality_tolerance: default_equality_tolerance(),
            aliases: BTreeMap::new(),
        }
    }
}

impl CoinGeckoConfig {
    /// Built-in aliases overlaid with configured ones, all keys lower-cased.
    #[must_use]
    pub fn alias_table(&self) -> BTreeMap<String, String> {
        let mut table: BTreeMap<String, String> = [
            ("btc", "bitcoin"),
            ("eth", "ethereum"),
            ("sol", "solana"),
            ("near", "near"),
        ]
        .into_iter()
        .map(|(symbol, id)| (symbol.to_string(), id.to_string()))
        .collect();

        for (symbol, id) in &self.aliases {
            table.insert(symbol.to_lowercase(), id.clone());
        }
        table
    }
}
