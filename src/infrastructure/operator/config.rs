//! Configuration operator implementation.

use crate::adapter::outbound::ledger::settings::LedgerMode;
use crate::application::polling::config::IndeterminatePolicy;
use crate::error::Result;
use crate::infrastructure::bootstrap::league_table;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::config::{
    ConfigValidationReport, ConfigView, ConfigurationOperator,
};

use super::entry::Operator;

fn mode_label(mode: LedgerMode) -> &'static str {
    match mode {
        LedgerMode::DryRun => "dry_run",
        LedgerMode::Relay => "relay",
    }
}

impl ConfigurationOperator for Operator {
    fn show_config(&self, config_toml: &str) -> Result<ConfigView> {
        let config = Config::parse_toml(config_toml)?;

        Ok(ConfigView {
            ledger_mode: mode_label(config.ledger.mode).to_string(),
            contract_id: config.ledger.contract_id.clone(),
            account_id: config.ledger.account_id.clone(),
            rpc_url: config.ledger.rpc_url.clone(),
            interval_secs: config.scheduler.interval_secs,
            max_concurrency: config.scheduler.max_concurrency,
            on_indeterminate: match config.scheduler.on_indeterminate {
                IndeterminatePolicy::ResolveNo => "resolve_no".to_string(),
                IndeterminatePolicy::Skip => "skip".to_string(),
            },
            leagues: league_table(&config.sports).into_keys().collect(),
            lookback_days: config.sports.lookback_days,
            vs_currency: config.price.vs_currency.clone(),
            equality_tolerance: config.price.equality_tolerance,
            odds_api_key_loaded: config.sports.api_key.is_some(),
            relay_token_loaded: config.ledger.relay_token.is_some(),
        })
    }

    fn validate_config(&self, config_toml: &str) -> Result<ConfigValidationReport> {
        let config = Config::parse_toml(config_toml)?;
        let mut warnings = Vec::new();

        if config.sports.api_key.is_none() {
            warnings.push("ODDS_API_KEY not set (required to resolve sports markets)".to_string());
        }

        if config.ledger.mode == LedgerMode::DryRun {
            warnings.push("Ledger mode is dry_run; resolutions will not be written".to_string());
        }

        if config.ledger.mode == LedgerMode::Relay && config.ledger.relay_token.is_none() {
            warnings.push(
                "ORACLE_RELAY_TOKEN not set; relay calls are unauthenticated".to_string(),
            );
        }

        Ok(ConfigValidationReport { warnings })
    }
}
