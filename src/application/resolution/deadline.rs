//! Bounded provider calls.

use std::future::Future;
use std::time::Duration;

use crate::domain::error::ResolutionError;
use crate::error::Result;

/// Default upper bound on a single provider call.
pub const DEFAULT_PROVIDER_TIMEOUT: Duration = Duration::from_secs(10);

/// Await a provider call, turning both failures and timeouts into
/// [`ResolutionError::Provider`].
pub(crate) async fn bounded<T>(
    provider: &'static str,
    timeout: Duration,
    call: impl Future<Output = Result<T>>,
) -> std::result::Result<T, ResolutionError> {
    match tokio::time::timeout(timeout, call).await {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(err)) => Err(ResolutionError::provider(provider, err)),
        Err(_) => Err(ResolutionError::provider(
            provider,
            format!("timed out after {}ms", timeout.as_millis()),
        )),
    }
}
