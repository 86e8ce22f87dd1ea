//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the oracle's only external dependencies: where
//! markets come from, where resolutions go, and the two data providers.

pub mod ledger;
pub mod market;
pub mod price;
pub mod sports;
