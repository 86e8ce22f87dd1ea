//! Market source port.

use async_trait::async_trait;

use crate::domain::market::Market;
use crate::error::Result;

/// Read-only access to the ledger's market list.
#[async_trait]
pub trait MarketSource: Send + Sync {
    /// Fetch a snapshot of every market the ledger knows about.
    async fn list_markets(&self) -> Result<Vec<Market>>;

    /// Source name for logging.
    fn source_name(&self) -> &'static str;
}
