//! Ledger writer that only logs.

use async_trait::async_trait;
use tracing::info;

use crate::domain::id::MarketId;
use crate::domain::outcome::Outcome;
use crate::error::Result;
use crate::port::outbound::ledger::LedgerWriter;

/// Logs resolutions instead of submitting them. Keeps no state, so the same
/// market is accepted again on every pass.
#[derive(Debug, Default)]
pub struct DryRunLedger {
    contract_id: String,
}

impl DryRunLedger {
    pub fn new(contract_id: impl Into<String>) -> Self {
        Self {
            contract_id: contract_id.into(),
        }
    }
}

#[async_trait]
impl LedgerWriter for DryRunLedger {
    async fn resolve(&self, market_id: &MarketId, outcome: Outcome) -> Result<()> {
        info!(
            contract = %self.contract_id,
            market_id = %market_id,
            outcome = %outcome,
            "Dry run: skipping resolution write"
        );
        Ok(())
    }

    fn writer_name(&self) -> &'static str {
        "dry-run"
    }
}
