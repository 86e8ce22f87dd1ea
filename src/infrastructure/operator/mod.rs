//! Operator implementations for inbound adapters.

pub mod config;
pub mod entry;
pub mod resolve;
pub mod runtime;
