//! Sports market resolution against recent fixture results.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use super::deadline::{bounded, DEFAULT_PROVIDER_TIMEOUT};
use crate::domain::error::ResolutionError;
use crate::domain::fixture::{Fixture, ScoreEntry};
use crate::domain::outcome::Outcome;
use crate::domain::request::SportsRequest;
use crate::port::outbound::sports::SportsDataProvider;

/// Upper-cased league code to provider sport identifier.
pub type LeagueTable = BTreeMap<String, String>;

/// Leagues every deployment understands.
#[must_use]
pub fn default_league_table() -> LeagueTable {
    [
        ("NBA", "basketball_nba"),
        ("MLS", "soccer_usa_mls"),
        ("MLB", "baseball_mlb"),
        ("EFL", "soccer_england_efl_cup"),
        ("EPL", "soccer_epl"),
    ]
    .into_iter()
    .map(|(league, sport)| (league.to_string(), sport.to_string()))
    .collect()
}

/// Resolves `sport ...` markets from the team's latest completed fixture.
pub struct SportsOutcomeResolver {
    provider: Arc<dyn SportsDataProvider>,
    leagues: LeagueTable,
    lookback_days: u32,
    timeout: Duration,
}

impl SportsOutcomeResolver {
    /// Create a resolver with the built-in league table and a one-day lookback.
    pub fn new(provider: Arc<dyn SportsDataProvider>) -> Self {
        Self {
            provider,
            leagues: default_league_table(),
            lookback_days: 1,
            timeout: DEFAULT_PROVIDER_TIMEOUT,
        }
    }

    /// Replace the league table.
    #[must_use]
    pub fn with_leagues(mut self, leagues: LeagueTable) -> Self {
        self.leagues = leagues;
        self
    }

    #[must_use]
    pub const fn with_lookback_days(mut self, lookback_days: u32) -> Self {
        self.lookback_days = lookback_days;
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Provider sport identifier for a league code, if supported.
    #[must_use]
    pub fn sport_id(&self, league: &str) -> Option<&str> {
        self.leagues.get(league).map(String::as_str)
    }

    /// Resolve a sports request with at most one provider call.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolutionError`] when the league is unmapped, the provider
    /// fails or times out, no completed fixture involves the team, or the
    /// fixture's scores cannot be attributed.
    pub async fn resolve(&self, request: &SportsRequest) -> Result<Outcome, ResolutionError> {
        let sport_id =
            self.sport_id(&request.league)
                .ok_or_else(|| ResolutionError::UnsupportedLeague {
                    league: request.league.clone(),
                })?;

        let fixtures = bounded(
            self.provider.provider_name(),
            self.timeout,
            self.provider
                .fetch_completed_fixtures(sport_id, self.lookback_days),
        )
        .await?;
        debug!(sport_id, count = fixtures.len(), "Fetched fixtures");

        let needle = request.team.to_lowercase();
        let fixture = find_completed_fixture(&fixtures, &needle).ok_or_else(|| {
            ResolutionError::NoCompletedFixture {
                team: request.team.clone(),
            }
        })?;

        let (team_score, opponent_score) =
            final_scores(&fixture.scores, &needle).ok_or_else(|| {
                ResolutionError::ScoresUnavailable {
                    team: request.team.clone(),
                }
            })?;

        info!(
            home = %fixture.home_team,
            away = %fixture.away_team,
            team = %request.team,
            team_score,
            opponent_score,
            condition = %request.condition,
            "Matched completed fixture"
        );

        Ok(Outcome::from_bool(
            request.condition.holds(team_score, opponent_score),
        ))
    }
}

/// First completed fixture whose home or away name contains `needle`.
fn find_completed_fixture<'a>(fixtures: &'a [Fixture], needle: &str) -> Option<&'a Fixture> {
    fixtures
        .iter()
        .filter(|fixture| fixture.completed)
        .find(|fixture| fixture.involves(needle))
}

/// Split a score list into `(team, opponent)`.
///
/// Entries naming the team set the team score; every other entry overwrites
/// the opponent score, so with more than two entries the last one wins.
fn final_scores(scores: &[ScoreEntry], needle: &str) -> Option<(i64, i64)> {
    if scores.len() < 2 {
        return None;
    }

    let mut team_score = None;
    let mut opponent_score = None;
    for entry in scores {
        if entry.name.to_lowercase().contains(needle) {
            team_score = Some(entry.points());
        } else {
            opponent_score = Some(entry.points());
        }
    }

    Some((team_score?, opponent_score?))
}
