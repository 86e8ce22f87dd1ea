//! Offline parsing and live resolution previews.

use async_trait::async_trait;

use crate::domain::outcome::Verdict;
use crate::domain::request::ParsedRequest;
use crate::error::Result;

/// A resolution computed without writing to the ledger.
#[derive(Debug, Clone)]
pub struct ResolutionPreview {
    pub request: ParsedRequest,
    pub verdict: Verdict,
}

/// Resolution use-cases for operator-facing adapters.
#[async_trait]
pub trait ResolutionOperator: Send + Sync {
    /// Parse a description without touching any provider.
    fn parse_description(&self, description: &str) -> ParsedRequest;

    /// Evaluate a description against the configured providers.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a provider
    /// credential is missing. Provider failures during evaluation are
    /// reported through the verdict instead.
    async fn preview_resolution(
        &self,
        config_toml: &str,
        description: &str,
    ) -> Result<ResolutionPreview>;
}
