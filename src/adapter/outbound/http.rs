//! Shared HTTP client settings for provider and RPC adapters.

use std::time::Duration;

use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::warn;

use crate::error::{Error, Result};

/// Longest slice of an error body carried into a provider error.
const ERROR_BODY_LIMIT: usize = 200;

/// Timeouts applied to every outbound HTTP request.
#[derive(Debug, Clone, Deserialize)]
pub struct HttpConfig {
    /// Total request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connection establishment timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
}

const fn default_timeout_ms() -> u64 {
    10_000
}

const fn default_connect_timeout_ms() -> u64 {
    5_000
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
        }
    }
}

impl HttpConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Build a client with these timeouts, falling back to defaults if the
    /// TLS backend cannot be initialised.
    #[must_use]
    pub fn build_client(&self) -> HttpClient {
        HttpClient::builder()
            .timeout(self.timeout())
            .connect_timeout(Duration::from_millis(self.connect_timeout_ms))
            .user_agent(concat!("verity/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            })
    }
}

/// Join a base URL and a path without doubling or dropping slashes.
pub(crate) fn join(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Read a data-provider response as JSON.
///
/// # Errors
///
/// Transport failures stay [`Error::Http`]. A non-success status or a body
/// that does not match `T` becomes [`Error::Provider`].
pub(crate) async fn read_provider_json<T: DeserializeOwned>(
    provider: &str,
    response: Response,
) -> Result<T> {
    let status = response.status();
    let body = response.text().await?;
    decode_provider_body(provider, status, &body)
}

pub(crate) fn decode_provider_body<T: DeserializeOwned>(
    provider: &str,
    status: StatusCode,
    body: &str,
) -> Result<T> {
    if !status.is_success() {
        let excerpt: String = body.trim().chars().take(ERROR_BODY_LIMIT).collect();
        return Err(Error::Provider(format!("{provider} returned {status}: {excerpt}")));
    }
    serde_json::from_str(body)
        .map_err(|err| Error::Provider(format!("{provider} sent a malformed payload: {err}")))
}
