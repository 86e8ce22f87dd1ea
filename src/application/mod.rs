//! Application services (use cases).
//!
//! These services orchestrate domain logic and coordinate adapters
//! to implement the oracle's use cases.

pub mod polling;
pub mod resolution;
