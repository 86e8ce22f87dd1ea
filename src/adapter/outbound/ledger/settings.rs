//! Ledger configuration.

use serde::Deserialize;

/// How resolutions reach the ledger.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LedgerMode {
    /// Log resolutions without submitting them.
    #[default]
    DryRun,
    /// Submit resolutions through a signing relay.
    Relay,
}

/// Ledger settings (`[ledger]` in the config file).
#[derive(Debug, Clone, Deserialize)]
pub struct LedgerConfig {
    #[serde(default)]
    pub mode: LedgerMode,
    /// NEAR JSON-RPC endpoint used to list markets.
    #[serde(default = "default_rpc_url")]
    pub rpc_url: String,
    /// Prediction-market contract account. Overridden by `CONTRACT_ID`.
    #[serde(default)]
    pub contract_id: String,
    /// Oracle account that signs resolutions. Overridden by `ORACLE_ACCOUNT_ID`.
    #[serde(default)]
    pub account_id: String,
    /// Signing relay endpoint, required in relay mode.
    #[serde(default)]
    pub relay_url: Option<String>,
    /// Loaded from `ORACLE_RELAY_TOKEN` at runtime (never from config file).
    #[serde(skip)]
    pub relay_token: Option<String>,
}

fn default_rpc_url() -> String {
    "https://rpc.testnet.near.org".into()
}

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            mode: LedgerMode::default(),
            rpc_url: default_rpc_url(),
            contract_id: String::new(),
            account_id: String::new(),
            relay_url: None,
            relay_token: None,
        }
    }
}
