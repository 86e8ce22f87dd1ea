//! Price data provider port.

use async_trait::async_trait;

use crate::error::Result;

/// Source of current asset prices.
#[async_trait]
pub trait PriceDataProvider: Send + Sync {
    /// Current price for a lower-cased asset symbol.
    ///
    /// `Ok(None)` means the provider answered but had no price for the asset.
    async fn fetch_price(&self, asset: &str) -> Result<Option<f64>>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
