//! The Odds API configuration.

use std::collections::BTreeMap;

use serde::Deserialize;

/// Sports provider settings (`[sports]` in the config file).
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiConfig {
    /// REST API base URL.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Loaded from `ODDS_API_KEY` at runtime (never from config file).
    #[serde(skip)]
    pub api_key: Option<String>,
    /// How many days of completed fixtures to request.
    #[serde(default = "default_lookback_days")]
    pub lookback_days: u32,
    /// Extra league code to sport id mappings, merged over the built-ins.
    #[serde(default)]
    pub leagues: BTreeMap<String, String>,
}

fn default_api_url() -> String {
    "https://api.the-odds-api.com/v4".into()
}

const fn default_lookback_days() -> u32 {
    1
}

impl Default for OddsApiConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            api_key: None,
            lookback_days: default_lookback_days(),
            leagues: BTreeMap::new(),
        }
    }
}
