//! The Odds API response types.
//!
//! Example `/scores` element:
//! ```json
//! {"id":"e912...","sport_key":"basketball_nba","commence_time":"2024-03-01T00:10:00Z",
//!  "completed":true,"home_team":"Miami Heat","away_team":"Orlando Magic",
//!  "scores":[{"name":"Miami Heat","score":"112"},{"name":"Orlando Magic","score":"101"}],
//!  "last_update":"2024-03-01T03:01:11Z"}
//! ```

use serde::Deserialize;

use crate::domain::fixture::{Fixture, ScoreEntry};

/// One fixture from the scores endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsScoreEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sport_key: Option<String>,
    #[serde(default)]
    pub commence_time: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub home_team: String,
    #[serde(default)]
    pub away_team: String,
    /// `null` until the fixture has started.
    #[serde(default)]
    pub scores: Option<Vec<OddsScore>>,
    #[serde(default)]
    pub last_update: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsScore {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub score: Option<RawScore>,
}

/// Scores are documented as strings but numbers are accepted too.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScore {
    Text(String),
    Number(serde_json::Number),
}

impl RawScore {
    fn into_text(self) -> String {
        match self {
            Self::Text(text) => text,
            Self::Number(number) => number.to_string(),
        }
    }
}

impl From<OddsScoreEvent> for Fixture {
    fn from(event: OddsScoreEvent) -> Self {
        let scores = event
            .scores
            .unwrap_or_default()
            .into_iter()
            .map(|entry| {
                ScoreEntry::new(
                    entry.name,
                    entry.score.map(RawScore::into_text).unwrap_or_default(),
                )
            })
            .collect();

        Self {
            home_team: event.home_team,
            away_team: event.away_team,
            completed: event.completed,
            scores,
        }
    }
}
