//! Runtime control projection types for operator-facing adapters.

use async_trait::async_trait;

use crate::domain::report::RunReport;
use crate::error::Result;

/// Runtime configuration overrides from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RunRequest {
    /// Raw TOML configuration content.
    pub config_toml: String,

    /// Run a single polling pass and exit.
    pub once: bool,

    /// Force dry-run ledger mode.
    pub dry_run: bool,

    /// Override for log level (e.g., "debug", "info", "warn").
    pub log_level: Option<String>,

    /// Whether to output logs as JSON.
    pub json_logs: bool,
}

/// Startup information snapshot for display.
#[derive(Debug, Clone)]
pub struct RunStartupSnapshot {
    pub contract_id: String,
    pub rpc_url: String,
    /// `dry_run` or `relay`.
    pub ledger_mode: String,
    pub interval_secs: u64,
    pub once: bool,
}

/// Runtime control use-cases for operator-facing adapters.
///
/// # Thread Safety
///
/// Implementations must be thread-safe (`Send + Sync`).
#[async_trait]
pub trait RuntimeOperator: Send + Sync {
    /// Prepare a startup snapshot from runtime overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot>;

    /// Run the polling scheduler.
    ///
    /// Returns the pass report in `once` mode, `None` after a continuous run
    /// is stopped.
    ///
    /// # Errors
    ///
    /// Returns an error if runtime initialization fails.
    async fn execute_run(&self, request: RunRequest) -> Result<Option<RunReport>>;
}
