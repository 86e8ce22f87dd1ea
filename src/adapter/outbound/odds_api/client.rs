//! The Odds API REST client.

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;
use url::Url;

use super::dto::OddsScoreEvent;
use super::settings::OddsApiConfig;
use crate::adapter::outbound::http::{join, read_provider_json};
use crate::domain::fixture::Fixture;
use crate::error::{ConfigError, Result};
use crate::port::outbound::sports::SportsDataProvider;

/// HTTP client for The Odds API scores endpoint.
pub struct OddsApiClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
}

impl OddsApiClient {
    pub fn new(http: HttpClient, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build from config.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingField`] when `ODDS_API_KEY` was not set.
    #[allow(clippy::result_large_err)]
    pub fn from_config(config: &OddsApiConfig, http: HttpClient) -> Result<Self> {
        let api_key = config
            .api_key
            .clone()
            .ok_or(ConfigError::MissingField {
                field: "ODDS_API_KEY",
            })?;
        Ok(Self::new(http, config.api_url.clone(), api_key))
    }

    fn scores_url(&self, sport_id: &str, lookback_days: u32) -> Result<Url> {
        let path = format!("sports/{sport_id}/scores/");
        let mut url = Url::parse(&join(&self.base_url, &path))?;
        url.query_pairs_mut()
            .append_pair("daysFrom", &lookback_days.to_string())
            .append_pair("apiKey", &self.api_key);
        Ok(url)
    }

    /// Fetch raw score events for a sport.
    pub async fn get_scores(
        &self,
        sport_id: &str,
        lookback_days: u32,
    ) -> Result<Vec<OddsScoreEvent>> {
        let url = self.scores_url(sport_id, lookback_days)?;
        debug!(sport_id, lookback_days, "Fetching scores");

        let response = self.http.get(url).send().await?;
        let events: Vec<OddsScoreEvent> =
            read_provider_json(self.provider_name(), response).await?;

        debug!(sport_id, count = events.len(), "Fetched scores");
        Ok(events)
    }
}

#[async_trait]
impl SportsDataProvider for OddsApiClient {
    async fn fetch_completed_fixtures(
        &self,
        sport_id: &str,
        lookback_days: u32,
    ) -> Result<Vec<Fixture>> {
        let events = self.get_scores(sport_id, lookback_days).await?;
        Ok(events.into_iter().map(Fixture::from).collect())
    }

    fn provider_name(&self) -> &'static str {
        "the-odds-api"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_url_carries_lookback_and_key() {
        let client = OddsApiClient::new(
            HttpClient::new(),
            "https://api.the-odds-api.com/v4/",
            "secret key",
        );

        let url = client.scores_url("basketball_nba", 1).unwrap();

        assert_eq!(
            url.as_str(),
            "https://api.the-odds-api.com/v4/sports/basketball_nba/scores/?daysFrom=1&apiKey=secret+key"
        );
    }

    #[test]
    fn missing_key_is_a_config_error() {
        let result = OddsApiClient::from_config(&OddsApiConfig::default(), HttpClient::new());
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::MissingField {
                field: "ODDS_API_KEY"
            }))
        ));
    }
}
