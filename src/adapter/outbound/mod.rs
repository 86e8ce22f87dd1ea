//! Outbound adapters (driven side).

pub mod coingecko;
pub mod http;
pub mod ledger;
pub mod near;
pub mod odds_api;
