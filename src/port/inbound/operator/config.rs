//! Configuration projections for operator-facing adapters.

use serde::Serialize;

use crate::error::Result;

/// Full configuration projection for operator-facing output.
///
/// Secrets are reported only as loaded or missing.
#[derive(Debug, Clone, Serialize)]
pub struct ConfigView {
    pub ledger_mode: String,
    pub contract_id: String,
    pub account_id: String,
    pub rpc_url: String,
    pub interval_secs: u64,
    pub max_concurrency: usize,
    pub on_indeterminate: String,
    pub leagues: Vec<String>,
    pub lookback_days: u32,
    pub vs_currency: String,
    pub equality_tolerance: f64,
    pub odds_api_key_loaded: bool,
    pub relay_token_loaded: bool,
}

/// Validation output for `config validate`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfigValidationReport {
    pub warnings: Vec<String>,
}

/// Configuration use-cases for operator-facing adapters.
pub trait ConfigurationOperator: Send + Sync {
    /// Build a projection for `config show`.
    fn show_config(&self, config_toml: &str) -> Result<ConfigView>;

    /// Validate config and return non-fatal warnings.
    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport>;
}
