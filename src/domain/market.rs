//! Market-related domain types.
//!
//! - [`Market`] - A binary prediction market as read from the ledger

use super::id::MarketId;

/// A binary prediction market owned by the ledger contract.
///
/// The oracle only reads markets. The `resolved` flag flips exactly once,
/// on the ledger side, after a resolution has been written.
///
/// # Example
///
/// ```
/// use verity::domain::{id::MarketId, market::Market};
///
/// let market = Market::new(MarketId::from("1"), "crypto ETH > 3000", 1_000);
///
/// assert!(market.is_eligible(2_000));
/// assert!(!market.is_eligible(1_000));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Market {
    id: MarketId,
    description: String,
    end_time_ns: u64,
    resolved: bool,
}

impl Market {
    /// Create a new, unresolved market.
    pub fn new(id: MarketId, description: impl Into<String>, end_time_ns: u64) -> Self {
        Self {
            id,
            description: description.into(),
            end_time_ns,
            resolved: false,
        }
    }

    /// Set the resolved flag.
    #[must_use]
    pub const fn with_resolved(mut self, resolved: bool) -> Self {
        self.resolved = resolved;
        self
    }

    /// Get the market ID.
    #[must_use]
    pub const fn id(&self) -> &MarketId {
        &self.id
    }

    /// Get the free-text resolution description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// End time in nanoseconds since the Unix epoch.
    #[must_use]
    pub const fn end_time_ns(&self) -> u64 {
        self.end_time_ns
    }

    /// Whether the ledger already reports this market as resolved.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved
    }

    /// A market may be resolved only once it has ended and is still open.
    #[must_use]
    pub const fn is_eligible(&self, now_ns: u64) -> bool {
        !self.resolved && self.end_time_ns < now_ns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn market(end_time_ns: u64) -> Market {
        Market::new(MarketId::from("m-1"), "sport NBA Lakers win", end_time_ns)
    }

    #[test]
    fn expired_open_market_is_eligible() {
        assert!(market(100).is_eligible(101));
    }

    #[test]
    fn market_ending_now_is_not_eligible() {
        assert!(!market(100).is_eligible(100));
        assert!(!market(100).is_eligible(99));
    }

    #[test]
    fn resolved_market_is_never_eligible() {
        let resolved = market(100).with_resolved(true);
        assert!(resolved.is_resolved());
        assert!(!resolved.is_eligible(u64::MAX));
    }
}
