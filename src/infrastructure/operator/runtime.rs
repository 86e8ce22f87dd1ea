//! Runtime operator implementation.

use async_trait::async_trait;
use tokio::signal;
use tracing::{info, warn};

use crate::adapter::outbound::ledger::settings::LedgerMode;
use crate::domain::report::RunReport;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_scheduler;
use crate::infrastructure::config::settings::Config;
use crate::port::inbound::operator::runtime::{RunRequest, RunStartupSnapshot, RuntimeOperator};

use super::entry::Operator;

#[async_trait]
impl RuntimeOperator for Operator {
    fn prepare_run(&self, request: &RunRequest) -> Result<RunStartupSnapshot> {
        let config = Self::load_run_config(request)?;

        Ok(RunStartupSnapshot {
            contract_id: config.ledger.contract_id,
            rpc_url: config.ledger.rpc_url,
            ledger_mode: match config.ledger.mode {
                LedgerMode::DryRun => "dry_run".to_string(),
                LedgerMode::Relay => "relay".to_string(),
            },
            interval_secs: config.scheduler.interval_secs,
            once: request.once,
        })
    }

    async fn execute_run(&self, request: RunRequest) -> Result<Option<RunReport>> {
        let config = Self::load_run_config(&request)?;
        config.init_logging();

        info!(
            contract = %config.ledger.contract_id,
            interval_secs = config.scheduler.interval_secs,
            once = request.once,
            "verity starting"
        );

        let scheduler = build_scheduler(&config)?;

        if request.once {
            let report = scheduler.run_once().await;
            info!(
                examined = report.examined,
                eligible = report.eligible,
                resolved = report.resolved,
                "Single pass complete"
            );
            return Ok(Some(report));
        }

        scheduler
            .run_forever(async {
                if let Err(err) = signal::ctrl_c().await {
                    warn!(error = %err, "Failed to listen for Ctrl+C");
                    std::future::pending::<()>().await;
                }
            })
            .await;

        info!("verity stopped");
        Ok(None)
    }
}

impl Operator {
    #[allow(clippy::result_large_err)]
    fn load_run_config(request: &RunRequest) -> Result<Config> {
        let mut config = Config::parse_toml(&request.config_toml)?;
        Self::apply_run_overrides(&mut config, request);
        Ok(config)
    }

    fn apply_run_overrides(config: &mut Config, request: &RunRequest) {
        if let Some(ref log_level) = request.log_level {
            config.logging.level = log_level.clone();
        }

        if request.json_logs {
            config.logging.format = "json".to_string();
        }

        if request.dry_run {
            config.set_dry_run();
        }
    }
}
