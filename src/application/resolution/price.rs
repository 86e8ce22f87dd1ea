//! Price market resolution.

use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use super::deadline::{bounded, DEFAULT_PROVIDER_TIMEOUT};
use crate::domain::error::ResolutionError;
use crate::domain::outcome::Outcome;
use crate::domain::request::PriceRequest;
use crate::port::outbound::price::PriceDataProvider;

/// Relative half-width of the `=` band: prices within 1% of the threshold.
pub const DEFAULT_EQUALITY_TOLERANCE: f64 = 0.01;

/// Resolves `crypto ...` markets from the current asset price.
pub struct PriceOutcomeResolver {
    provider: Arc<dyn PriceDataProvider>,
    equality_tolerance: f64,
    timeout: Duration,
}

impl PriceOutcomeResolver {
    pub fn new(provider: Arc<dyn PriceDataProvider>) -> Self {
        Self {
            provider,
            equality_tolerance: DEFAULT_EQUALITY_TOLERANCE,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_equality_tolerance(mut self, tolerance: f64) -> Self {
        self.equality_tolerance = tolerance;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve a price request with one provider call.
    ///
    /// # Errors
    ///
    /// Returns [`ResolutionError::Provider`] on provider failure or timeout
    /// and [`ResolutionError::NoPrice`] when the provider has no price.
    pub async fn resolve(&self, request: &PriceRequest) -> Result<Outcome, ResolutionError> {
        let price = bounded(
            self.provider.provider_name(),
            self.timeout,
            self.provider.fetch_price(&request.asset),
        )
        .await?
        .ok_or_else(|| ResolutionError::NoPrice {
            asset: request.asset.clone(),
        })?;

        info!(
            asset = %request.asset,
            price,
            operator = %request.operator,
            threshold = request.threshold,
            "Fetched asset price"
        );

        Ok(Outcome::from_bool(request.operator.holds(
            price,
            request.threshold,
            self.equality_tolerance,
        )))
    }
}
