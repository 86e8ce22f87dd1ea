use std::sync::Arc;
use std::time::Duration;

use verity::application::resolution::engine::ResolutionEngine;
use verity::application::resolution::price::PriceOutcomeResolver;
use verity::application::resolution::sports::SportsOutcomeResolver;
use verity::testkit::provider::{FixedPriceProvider, ScriptedSportsProvider};

/// Engine over scripted providers with a short provider deadline.
pub fn engine(sports: ScriptedSportsProvider, price: FixedPriceProvider) -> ResolutionEngine {
    ResolutionEngine::new(
        SportsOutcomeResolver::new(Arc::new(sports)).with_timeout(Duration::from_secs(5)),
        PriceOutcomeResolver::new(Arc::new(price)).with_timeout(Duration::from_secs(5)),
    )
}

/// Engine whose providers have no data at all.
pub fn empty_engine() -> ResolutionEngine {
    engine(
        ScriptedSportsProvider::with_fixtures(Vec::new()),
        FixedPriceProvider::new(),
    )
}
