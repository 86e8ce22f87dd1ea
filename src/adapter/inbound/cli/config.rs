//! Handler for the `config` command group.

use std::path::Path;

use crate::adapter::inbound::cli::{operator, output};
use crate::error::Result;

/// Execute `config show`.
pub fn execute_show(path: &Path) -> Result<()> {
    let config_toml = operator::read_config_toml(path)?;
    let config = operator::operator().show_config(&config_toml)?;

    if output::is_json() {
        output::record("config", &config);
        return Ok(());
    }

    output::section("Ledger");
    output::field("Mode", &config.ledger_mode);
    output::field("Contract", &config.contract_id);
    output::field(
        "Account",
        if config.account_id.is_empty() {
            "(not set)"
        } else {
            config.account_id.as_str()
        },
    );
    output::field("RPC", &config.rpc_url);

    output::section("Scheduler");
    output::field("Interval", format!("{}s", config.interval_secs));
    output::field("Concurrency", config.max_concurrency);
    output::field("Indeterminate", &config.on_indeterminate);

    output::section("Sports");
    output::field("Leagues", config.leagues.join(", "));
    output::field("Lookback", format!("{}d", config.lookback_days));

    output::section("Price");
    output::field("Currency", &config.vs_currency);
    output::field(
        "Tolerance",
        format!("{:.2}%", config.equality_tolerance * 100.0),
    );

    output::section("Secrets");
    if config.odds_api_key_loaded {
        output::success("ODDS_API_KEY loaded");
    } else {
        output::warning("ODDS_API_KEY not set");
    }
    if config.relay_token_loaded {
        output::success("ORACLE_RELAY_TOKEN loaded");
    }

    Ok(())
}

/// Execute `config validate`.
pub fn execute_validate(path: &Path) -> Result<()> {
    output::section("Config Validation");
    output::field("Path", path.display());
    let config_toml = operator::read_config_toml(path)?;
    let validation = operator::operator().validate_config(&config_toml)?;
    output::success("Config file is valid");

    if !validation.warnings.is_empty() {
        output::section("Warnings");
        for warning in &validation.warnings {
            output::warning(warning);
        }
    }

    Ok(())
}
