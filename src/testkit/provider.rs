//! Scripted data providers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::fixture::Fixture;
use crate::error::{Error, Result};
use crate::port::outbound::price::PriceDataProvider;
use crate::port::outbound::sports::SportsDataProvider;

/// Sports provider returning a fixed response and recording each request.
#[derive(Clone)]
pub struct ScriptedSportsProvider {
    response: std::result::Result<Vec<Fixture>, String>,
    delay: Option<Duration>,
    requests: Arc<Mutex<Vec<(String, u32)>>>,
}

impl ScriptedSportsProvider {
    pub fn with_fixtures(fixtures: Vec<Fixture>) -> Self {
        Self {
            response: Ok(fixtures),
            delay: None,
            requests: Arc::default(),
        }
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            response: Err(reason.to_string()),
            delay: None,
            requests: Arc::default(),
        }
    }

    /// Sleep before answering, to exercise timeouts.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// `(sport_id, lookback_days)` for every call so far.
    pub fn requests(&self) -> Vec<(String, u32)> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl SportsDataProvider for ScriptedSportsProvider {
    async fn fetch_completed_fixtures(
        &self,
        sport_id: &str,
        lookback_days: u32,
    ) -> Result<Vec<Fixture>> {
        self.requests
            .lock()
            .push((sport_id.to_string(), lookback_days));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.response.clone().map_err(Error::Provider)
    }

    fn provider_name(&self) -> &'static str {
        "scripted-sports"
    }
}

/// Price provider backed by a symbol → price map.
///
/// Tracks how many lookups are in flight at once, shared across clones.
#[derive(Clone, Default)]
pub struct FixedPriceProvider {
    prices: Arc<Mutex<HashMap<String, f64>>>,
    failure: Option<String>,
    delay: Option<Duration>,
    in_flight: Arc<AtomicUsize>,
    peak_in_flight: Arc<AtomicUsize>,
}

impl FixedPriceProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(reason: &str) -> Self {
        Self {
            failure: Some(reason.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_price(self, asset: &str, price: f64) -> Self {
        self.set_price(asset, price);
        self
    }

    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Change a price in place, shared with every clone.
    pub fn set_price(&self, asset: &str, price: f64) {
        self.prices.lock().insert(asset.to_lowercase(), price);
    }

    /// Highest number of concurrent `fetch_price` calls seen so far.
    pub fn peak_in_flight(&self) -> usize {
        self.peak_in_flight.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceDataProvider for FixedPriceProvider {
    async fn fetch_price(&self, asset: &str) -> Result<Option<f64>> {
        let current = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak_in_flight.fetch_max(current, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);
        if let Some(reason) = &self.failure {
            return Err(Error::Provider(reason.clone()));
        }
        Ok(self.prices.lock().get(asset).copied())
    }

    fn provider_name(&self) -> &'static str {
        "fixed-price"
    }
}
