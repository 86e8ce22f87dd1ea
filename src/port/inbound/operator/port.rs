//! Unified operator capability surface for inbound adapters.

use super::config::ConfigurationOperator;
use super::resolve::ResolutionOperator;
use super::runtime::RuntimeOperator;

/// Unified operator capability surface consumed by inbound adapters.
pub trait OperatorPort: ConfigurationOperator + ResolutionOperator + RuntimeOperator {}

impl<T> OperatorPort for T where T: ConfigurationOperator + ResolutionOperator + RuntimeOperator {}
