//! Ledger writers.
//!
//! Transaction signing is delegated: [`RelayLedger`](relay::RelayLedger) hands the resolution call
//! to a relay that holds the oracle account key, while [`DryRunLedger`](dry_run::DryRunLedger) only
//! logs what would have been written.

pub mod dry_run;
pub mod relay;
pub mod settings;
