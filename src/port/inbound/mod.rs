//! Inbound (driving) ports consumed by inbound adapters.
//!
//! # Modules
//!
//! - [`operator`]: Operator-facing use cases for configuration, resolution
//!   previews, and the polling runtime
pub mod operator;
