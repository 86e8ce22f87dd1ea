//! In-memory market sources.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::market::Market;
use crate::error::{Error, Result};
use crate::port::outbound::market::MarketSource;

/// Serves a fixed market list, or fails every call.
#[derive(Clone, Default)]
pub struct StaticMarketSource {
    markets: Arc<Mutex<Vec<Market>>>,
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl StaticMarketSource {
    pub fn new(markets: Vec<Market>) -> Self {
        Self {
            markets: Arc::new(Mutex::new(markets)),
            ..Self::default()
        }
    }

    /// A source whose every call fails with an RPC error.
    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    /// Replace the served markets, e.g. to simulate the ledger catching up.
    pub fn set_markets(&self, markets: Vec<Market>) {
        *self.markets.lock() = markets;
    }

    /// Number of `list_markets` calls so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl MarketSource for StaticMarketSource {
    async fn list_markets(&self) -> Result<Vec<Market>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.failure {
            Some(reason) => Err(Error::Rpc(reason.clone())),
            None => Ok(self.markets.lock().clone()),
        }
    }

    fn source_name(&self) -> &'static str {
        "static"
    }
}
