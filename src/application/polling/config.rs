//! Scheduler configuration.

use serde::Deserialize;

/// What to commit when the engine could not gather enough evidence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndeterminatePolicy {
    /// Write `"no"`, matching markets resolved by earlier oracle versions.
    #[default]
    ResolveNo,
    /// Leave the market open and try again on the next run.
    Skip,
}

/// Polling scheduler settings.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerConfig {
    /// Seconds between polling passes in continuous mode.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,
    /// Maximum markets evaluated concurrently. Bounds outbound provider calls.
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    #[serde(default)]
    pub on_indeterminate: IndeterminatePolicy,
}

const fn default_interval_secs() -> u64 {
    60
}

const fn default_max_concurrency() -> usize {
    4
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            max_concurrency: default_max_concurrency(),
            on_indeterminate: IndeterminatePolicy::default(),
        }
    }
}
