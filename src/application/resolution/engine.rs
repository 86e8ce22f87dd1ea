//! Resolution engine: dispatches a market to the right resolver.
//!
//! Every call ends in a [`Verdict`]; nothing propagates to the caller as an
//! error because the ledger needs a concrete value.

use tracing::{debug, warn};

use super::parser::{DescriptionParser, PRICE_KEYWORD, SPORT_KEYWORD};
use super::price::PriceOutcomeResolver;
use super::sports::SportsOutcomeResolver;
use crate::domain::market::Market;
use crate::domain::outcome::{Outcome, Verdict};
use crate::domain::request::ParsedRequest;

/// Market family selected by description prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketKind {
    Sports,
    Price,
    Unknown,
}

impl MarketKind {
    /// Classify by case-insensitive prefix of the raw description.
    #[must_use]
    pub fn of(description: &str) -> Self {
        let lowered = description.to_lowercase();
        if lowered.starts_with(PRICE_KEYWORD) {
            Self::Price
        } else if lowered.starts_with(SPORT_KEYWORD) {
            Self::Sports
        } else {
            Self::Unknown
        }
    }
}

/// Stateless dispatcher over the sports and price resolvers.
///
/// Holds no per-market state, so evaluating the same market twice with
/// unchanged provider data yields the same verdict.
pub struct ResolutionEngine {
    sports: SportsOutcomeResolver,
    price: PriceOutcomeResolver,
}

impl ResolutionEngine {
    pub const fn new(sports: SportsOutcomeResolver, price: PriceOutcomeResolver) -> Self {
        Self { sports, price }
    }

    /// Evaluate a market, keeping indeterminate results distinguishable.
    pub async fn evaluate(&self, market: &Market) -> Verdict {
        let verdict = self.evaluate_description(market.description()).await;
        match &verdict {
            Verdict::Decided(outcome) => {
                debug!(market_id = %market.id(), outcome = %outcome, "Market decided");
            }
            Verdict::Indeterminate(err) => {
                warn!(
                    market_id = %market.id(),
                    description = %market.description(),
                    kind = %err.kind(),
                    error = %err,
                    "Market indeterminate"
                );
            }
        }
        verdict
    }

    /// Evaluate a bare description.
    pub async fn evaluate_description(&self, description: &str) -> Verdict {
        let kind = MarketKind::of(description);
        if kind == MarketKind::Unknown {
            warn!(description, "Unknown market type in description");
        }

        match DescriptionParser::parse(description) {
            ParsedRequest::Sports(request) => self.sports.resolve(&request).await.into(),
            ParsedRequest::Price(request) => self.price.resolve(&request).await.into(),
            ParsedRequest::Unsupported { reason } => Verdict::Indeterminate(reason.into()),
        }
    }

    /// Evaluate a market and collapse indeterminate results to `No`.
    pub async fn resolve(&self, market: &Market) -> Outcome {
        self.evaluate(market).await.fail_closed()
    }
}
