//! Sports data provider port.

use async_trait::async_trait;

use crate::domain::fixture::Fixture;
use crate::error::Result;

/// Source of recent fixture results.
#[async_trait]
pub trait SportsDataProvider: Send + Sync {
    /// Fetch fixtures for `sport_id` from the last `lookback_days` days.
    ///
    /// Implementations return in-progress fixtures too; filtering on
    /// completion is the caller's job.
    async fn fetch_completed_fixtures(
        &self,
        sport_id: &str,
        lookback_days: u32,
    ) -> Result<Vec<Fixture>>;

    /// Provider name for logging.
    fn provider_name(&self) -> &'static str;
}
