//! Ledger writer port.

use async_trait::async_trait;

use crate::domain::id::MarketId;
use crate::domain::outcome::Outcome;
use crate::error::Result;

/// Submits resolutions to the ledger.
///
/// Writing the same market twice before the ledger reflects the first write
/// must be tolerated by the implementation; the scheduler never retries
/// within a run.
#[async_trait]
pub trait LedgerWriter: Send + Sync {
    /// Resolve `market_id` with `outcome` (sent as `"yes"` / `"no"`).
    async fn resolve(&self, market_id: &MarketId, outcome: Outcome) -> Result<()>;

    /// Writer name for logging.
    fn writer_name(&self) -> &'static str;
}
