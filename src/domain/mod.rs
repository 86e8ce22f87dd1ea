//! Ledger- and provider-agnostic domain types.
//!
//! Nothing in here performs I/O. Markets come in from a [`MarketSource`],
//! descriptions are turned into a [`ParsedRequest`], and every resolution
//! attempt ends in a [`Verdict`].
//!
//! [`MarketSource`]: crate::port::outbound::market::MarketSource
//! [`ParsedRequest`]: request::ParsedRequest
//! [`Verdict`]: outcome::Verdict

pub mod error;
pub mod fixture;
pub mod id;
pub mod market;
pub mod outcome;
pub mod report;
pub mod request;
