//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with environment variable overrides
//! for secrets and deployment identity (`ODDS_API_KEY`, `CONTRACT_ID`, ...).
//!
//! # Example
//!
//! ```no_run
//! use verity::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use std::path::Path;

use serde::Deserialize;

use super::logging::{LoggingConfig, LOG_FORMATS};
use crate::adapter::outbound::coingecko::settings::CoinGeckoConfig;
use crate::adapter::outbound::http::HttpConfig;
use crate::adapter::outbound::ledger::settings::{LedgerConfig, LedgerMode};
use crate::adapter::outbound::odds_api::settings::OddsApiConfig;
use crate::application::polling::config::SchedulerConfig;
use crate::error::{ConfigError, Result};

/// Environment variables read on top of the file.
pub const ENV_ODDS_API_KEY: &str = "ODDS_API_KEY";
pub const ENV_COINGECKO_API_KEY: &str = "COINGECKO_API_KEY";
pub const ENV_CONTRACT_ID: &str = "CONTRACT_ID";
pub const ENV_ORACLE_ACCOUNT_ID: &str = "ORACLE_ACCOUNT_ID";
pub const ENV_ORACLE_RELAY_TOKEN: &str = "ORACLE_RELAY_TOKEN";

/// Largest `daysFrom` the scores endpoint accepts.
const MAX_LOOKBACK_DAYS: u32 = 3;

/// Main application configuration.
///
/// Load from a TOML file using [`Config::load`] or parse directly with
/// [`Config::parse_toml`].
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Logging and tracing configuration.
    pub logging: LoggingConfig,

    /// Outbound HTTP timeouts shared by every adapter.
    #[serde(default)]
    pub http: HttpConfig,

    /// Polling cadence, concurrency and indeterminate handling.
    #[serde(default)]
    pub scheduler: SchedulerConfig,

    /// Sports results provider.
    ///
    /// API key is loaded from `ODDS_API_KEY`.
    #[serde(default)]
    pub sports: OddsApiConfig,

    /// Price provider.
    #[serde(default)]
    pub price: CoinGeckoConfig,

    /// Market source and resolution writer.
    #[serde(default)]
    pub ledger: LedgerConfig,
}

impl Config {
    /// Parse configuration from TOML content, applying process environment
    /// overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_env(content, |key| std::env::var(key).ok())
    }

    /// Parse configuration from TOML content with an explicit environment
    /// lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML content is malformed or validation fails.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_env<F>(content: &str, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.apply_env(env);
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    fn apply_env<F>(&mut self, env: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        let set = |key: &str| env(key).filter(|value| !value.trim().is_empty());

        // Secrets never come from the file.
        self.sports.api_key = set(ENV_ODDS_API_KEY);
        self.price.api_key = set(ENV_COINGECKO_API_KEY);
        self.ledger.relay_token = set(ENV_ORACLE_RELAY_TOKEN);

        if let Some(contract_id) = set(ENV_CONTRACT_ID) {
            self.ledger.contract_id = contract_id;
        }
        if let Some(account_id) = set(ENV_ORACLE_ACCOUNT_ID) {
            self.ledger.account_id = account_id;
        }
    }

    /// Validate configuration values.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if !self.logging.is_known_format() {
            return Err(ConfigError::InvalidValue {
                field: "format",
                reason: format!("must be one of {}", LOG_FORMATS.join(", ")),
            }
            .into());
        }

        if self.http.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.scheduler.interval_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "interval_secs",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.scheduler.max_concurrency == 0 {
            return Err(ConfigError::InvalidValue {
                field: "max_concurrency",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }

        if self.sports.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "sports.api_url" }.into());
        }
        if !(1..=MAX_LOOKBACK_DAYS).contains(&self.sports.lookback_days) {
            return Err(ConfigError::InvalidValue {
                field: "lookback_days",
                reason: format!("must be between 1 and {MAX_LOOKBACK_DAYS}"),
            }
            .into());
        }

        if self.price.api_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "price.api_url" }.into());
        }
        let tolerance = self.price.equality_tolerance;
        if !(tolerance > 0.0 && tolerance < 1.0) {
            return Err(ConfigError::InvalidValue {
                field: "equality_tolerance",
                reason: "must be between 0 and 1 (exclusive)".to_string(),
            }
            .into());
        }

        if self.ledger.rpc_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "ledger.rpc_url" }.into());
        }
        if self.ledger.contract_id.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "contract_id" }.into());
        }
        if self.ledger.mode == LedgerMode::Relay {
            let has_relay = self
                .ledger
                .relay_url
                .as_deref()
                .is_some_and(|url| !url.trim().is_empty());
            if !has_relay {
                return Err(ConfigError::MissingField { field: "relay_url" }.into());
            }
            if self.ledger.account_id.trim().is_empty() {
                return Err(ConfigError::MissingField { field: "account_id" }.into());
            }
        }

        Ok(())
    }

    /// Force dry-run ledger mode regardless of the file.
    pub fn set_dry_run(&mut self) {
        self.ledger.mode = LedgerMode::DryRun;
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::application::polling::config::IndeterminatePolicy;
    use crate::error::Error;

    const MINIMAL: &str = r#"
        [logging]
        level = "info"
        format = "pretty"

        [ledger]
        contract_id = "market.testnet"
    "#;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn minimal_config_uses_defaults() {
        let config = Config::parse_toml_with_env(MINIMAL, no_env).unwrap();

        assert_eq!(config.scheduler.interval_secs, 60);
        assert_eq!(config.scheduler.max_concurrency, 4);
        assert_eq!(config.scheduler.on_indeterminate, IndeterminatePolicy::ResolveNo);
        assert_eq!(config.sports.lookback_days, 1);
        assert_eq!(config.price.vs_currency, "usd");
        assert_eq!(config.ledger.mode, LedgerMode::DryRun);
        assert_eq!(config.http.timeout_ms, 10_000);
    }

    #[test]
    fn env_overrides_secrets_and_contract() {
        let env: HashMap<&str, &str> = [
            ("ODDS_API_KEY", "odds-key"),
            ("CONTRACT_ID", "prod.near"),
            ("ORACLE_ACCOUNT_ID", "oracle.near"),
            ("ORACLE_RELAY_TOKEN", "  "),
        ]
        .into_iter()
        .collect();

        let config = Config::parse_toml_with_env(MINIMAL, |key| {
            env.get(key).map(|value| (*value).to_string())
        })
        .unwrap();

        assert_eq!(config.sports.api_key.as_deref(), Some("odds-key"));
        assert_eq!(config.ledger.contract_id, "prod.near");
        assert_eq!(config.ledger.account_id, "oracle.near");
        assert!(config.ledger.relay_token.is_none());
    }

    #[test]
    fn api_key_in_file_is_ignored() {
        let toml = format!("{MINIMAL}\n[sports]\napi_key = \"leaked\"\n");
        let config = Config::parse_toml_with_env(&toml, no_env).unwrap();
        assert!(config.sports.api_key.is_none());
    }

    #[test]
    fn missing_contract_is_rejected() {
        let toml = r#"
            [logging]
            level = "info"
            format = "json"
        "#;
        let result = Config::parse_toml_with_env(toml, no_env);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField {
                field: "contract_id"
            }))
        ));
    }

    #[test]
    fn relay_mode_requires_relay_url() {
        let toml = r#"
            [logging]
            level = "info"
            format = "pretty"

            [ledger]
            mode = "relay"
            contract_id = "market.testnet"
            account_id = "oracle.testnet"
        "#;
        let result = Config::parse_toml_with_env(toml, no_env);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::MissingField { field: "relay_url" }))
        ));
    }

    #[test]
    fn set_dry_run_overrides_relay() {
        let toml = r#"
            [logging]
            level = "info"
            format = "pretty"

            [ledger]
            mode = "relay"
            contract_id = "market.testnet"
            account_id = "oracle.testnet"
            relay_url = "https://relay.example"
        "#;
        let mut config = Config::parse_toml_with_env(toml, no_env).unwrap();
        config.set_dry_run();
        assert_eq!(config.ledger.mode, LedgerMode::DryRun);
    }
}
