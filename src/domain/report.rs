//! Per-run summary of a polling pass.

use serde::Serialize;

/// Counters for a single polling pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Markets returned by the source.
    pub examined: usize,
    /// Markets that were expired and unresolved.
    pub eligible: usize,
    /// Successful ledger writes.
    pub resolved: usize,
    /// Verdicts that lacked evidence, whether written as `no` or skipped.
    pub indeterminate: usize,
    /// Markets left open because of the skip policy.
    pub skipped: usize,
    /// Ledger writes that failed.
    pub write_failures: usize,
}
