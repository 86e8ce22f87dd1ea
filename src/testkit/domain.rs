//! Builders for domain primitives used across tests.
//!
//! Keeps tests focused on assertions rather than construction boilerplate.

use crate::domain::fixture::{Fixture, ScoreEntry};
use crate::domain::id::MarketId;
use crate::domain::market::Market;

/// Create a [`MarketId`] from a string.
pub fn market_id(id: &str) -> MarketId {
    MarketId::from(id)
}

/// An unresolved market that ended at the epoch, so it is always eligible.
pub fn market(id: &str, description: &str) -> Market {
    market_ending_at(id, description, 0)
}

/// An unresolved market ending at `end_time_ns`.
pub fn market_ending_at(id: &str, description: &str, end_time_ns: u64) -> Market {
    Market::new(market_id(id), description, end_time_ns)
}

/// A market the ledger already reports as resolved.
pub fn resolved_market(id: &str, description: &str) -> Market {
    market(id, description).with_resolved(true)
}

/// A fixture with explicit fields.
pub fn fixture(home: &str, away: &str, completed: bool, scores: Vec<ScoreEntry>) -> Fixture {
    Fixture {
        home_team: home.to_string(),
        away_team: away.to_string(),
        completed,
        scores,
    }
}

/// A completed fixture from `(name, score)` pairs for home and away.
pub fn completed_fixture(home: (&str, &str), away: (&str, &str)) -> Fixture {
    fixture(
        home.0,
        away.0,
        true,
        vec![
            ScoreEntry::new(home.0, home.1),
            ScoreEntry::new(away.0, away.1),
        ],
    )
}
