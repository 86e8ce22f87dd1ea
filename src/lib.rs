//! Verity - an autonomous oracle for prediction markets.
//!
//! Verity polls a ledger contract for markets whose end time has passed,
//! interprets each market's free-text description, looks the answer up in a
//! sports results or asset price feed, and writes a `"yes"` / `"no"` outcome
//! back to the ledger.
//!
//! # Architecture
//!
//! The crate is split along hexagonal lines:
//!
//! - [`domain`] - Markets, parsed requests, outcomes and verdicts. No I/O.
//! - [`port`] - Traits the application drives (`MarketSource`,
//!   `LedgerWriter`, `SportsDataProvider`, `PriceDataProvider`) and the
//!   operator surface the CLI drives.
//! - [`application`] - `DescriptionParser`, the sports and price resolvers,
//!   `ResolutionEngine` and `PollingScheduler`.
//! - [`adapter`] - The Odds API, CoinGecko, NEAR RPC, ledger writers, CLI.
//! - [`infrastructure`] - Configuration, logging and wiring.
//!
//! # Features
//!
//! - `testkit` - Export in-memory port fakes for integration tests
//!
//! # Example
//!
//! ```
//! use verity::application::resolution::parser::DescriptionParser;
//! use verity::domain::request::ParsedRequest;
//!
//! let request = DescriptionParser::parse("crypto BTC > 50000");
//! assert!(matches!(request, ParsedRequest::Price(_)));
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
