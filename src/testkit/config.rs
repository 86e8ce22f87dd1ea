//! Canonical test configurations.
//!
//! Single source of truth for the TOML used across config, bootstrap and CLI
//! tests.

use crate::application::polling::config::{IndeterminatePolicy, SchedulerConfig};

/// Smallest config that validates: logging plus a contract id.
pub const MINIMAL_TOML: &str = r#"
[logging]
level = "info"
format = "pretty"

[ledger]
contract_id = "market.testnet"
"#;

/// Every section spelled out with non-default values.
pub const FULL_TOML: &str = r#"
[logging]
level = "debug"
format = "json"

[http]
timeout_ms = 2500
connect_timeout_ms = 1000

[scheduler]
interval_secs = 30
max_concurrency = 2
on_indeterminate = "skip"

[sports]
api_url = "https://odds.example/v4"
lookback_days = 3
leagues = { NHL = "icehockey_nhl" }

[price]
api_url = "https://prices.example/api/v3"
vs_currency = "eur"
equality_tolerance = 0.005
aliases = { doge = "dogecoin" }

[ledger]
mode = "relay"
rpc_url = "https://rpc.mainnet.near.org"
contract_id = "market.near"
account_id = "oracle.near"
relay_url = "https://relay.example/call"
"#;

/// [`MINIMAL_TOML`] with extra lines appended, for single-field variations.
#[must_use]
pub fn minimal_with(extra: &str) -> String {
    format!("{MINIMAL_TOML}\n{extra}\n")
}

/// Scheduler settings with the given indeterminate policy and serial writes.
#[must_use]
pub fn scheduler(policy: IndeterminatePolicy) -> SchedulerConfig {
    SchedulerConfig {
        on_indeterminate: policy,
        ..SchedulerConfig::default()
    }
}
