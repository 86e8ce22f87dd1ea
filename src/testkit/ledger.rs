//! Recording ledger writer.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::id::MarketId;
use crate::domain::outcome::Outcome;
use crate::error::{Error, Result};
use crate::port::outbound::ledger::LedgerWriter;

/// Thread-safe write collector for ledger assertions in tests.
#[derive(Clone, Default)]
pub struct RecordingLedger {
    writes: Arc<Mutex<Vec<(MarketId, Outcome)>>>,
    rejected: Arc<HashSet<MarketId>>,
}

impl RecordingLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject writes for the given market ids. Rejected writes are not recorded.
    pub fn rejecting<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<MarketId>,
    {
        Self {
            writes: Arc::default(),
            rejected: Arc::new(ids.into_iter().map(Into::into).collect()),
        }
    }

    /// Accepted writes in submission order.
    pub fn writes(&self) -> Vec<(MarketId, Outcome)> {
        self.writes.lock().clone()
    }
}

#[async_trait]
impl LedgerWriter for RecordingLedger {
    async fn resolve(&self, market_id: &MarketId, outcome: Outcome) -> Result<()> {
        if self.rejected.contains(market_id) {
            return Err(Error::Ledger(format!("market {market_id} rejected")));
        }
        self.writes.lock().push((market_id.clone(), outcome));
        Ok(())
    }

    fn writer_name(&self) -> &'static str {
        "recording"
    }
}
