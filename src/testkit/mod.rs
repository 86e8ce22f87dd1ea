//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`domain`]: Builders for markets and fixtures.
//! - [`market`]: In-memory [`MarketSource`](crate::port::outbound::market::MarketSource) fakes.
//! - [`ledger`]: A [`LedgerWriter`](crate::port::outbound::ledger::LedgerWriter) that records writes.
//! - [`provider`]: Scripted sports and price providers.
//! - [`config`]: Canonical TOML snippets for config tests.

pub mod config;
pub mod domain;
pub mod ledger;
pub mod market;
pub mod provider;
