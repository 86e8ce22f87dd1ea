//! Sports fixtures as reported by a sports-data provider.

/// One team's entry in a fixture's score list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    pub name: String,
    /// Raw score as sent by the provider.
    pub score: String,
}

impl ScoreEntry {
    pub fn new(name: impl Into<String>, score: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: score.into(),
        }
    }

    /// Numeric score; anything that is not an integer counts as zero.
    #[must_use]
    pub fn points(&self) -> i64 {
        self.score.trim().parse().unwrap_or(0)
    }
}

/// A single match record, possibly still in progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub home_team: String,
    pub away_team: String,
    pub completed: bool,
    pub scores: Vec<ScoreEntry>,
}

impl Fixture {
    /// Whether `needle` (already lower-cased) appears in either team name.
    #[must_use]
    pub fn involves(&self, needle: &str) -> bool {
        self.home_team.to_lowercase().contains(needle)
            || self.away_team.to_lowercase().contains(needle)
    }
}
