//! Errors raised while turning a market into an outcome.
//!
//! None of these escape the resolution engine as an `Err`: the engine folds
//! them into [`Verdict::Indeterminate`](super::outcome::Verdict) and the
//! scheduler decides what to commit.

use std::fmt;

use thiserror::Error;

/// Why a description could not be turned into a typed request.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The description has no tokens at all.
    #[error("description is empty")]
    Empty,

    /// The first token names neither a sports nor a price market.
    #[error("unknown market kind '{token}'")]
    UnknownKind {
        /// The offending first token.
        token: String,
    },

    /// Too few tokens for the grammar of this market kind.
    #[error("expected at least {expected} tokens, found {found}")]
    TooFewTokens {
        /// Minimum token count.
        expected: usize,
        /// Token count actually present.
        found: usize,
    },

    /// No `win`, `>` or `<` token follows the league.
    #[error("no condition token (win, >, <) found")]
    MissingCondition,

    /// The condition token directly follows the league.
    #[error("no team name before the condition")]
    MissingTeam,

    /// A margin condition is the last token.
    #[error("condition '{condition}' requires a numeric threshold")]
    MissingThreshold {
        /// The margin condition lacking a threshold.
        condition: String,
    },

    /// The threshold token is not a number.
    #[error("invalid threshold '{token}'")]
    InvalidThreshold {
        /// The token that failed to parse.
        token: String,
    },

    /// The price comparison operator is not one of `>`, `<`, `=`.
    #[error("unknown operator '{token}'")]
    UnknownOperator {
        /// The offending operator token.
        token: String,
    },
}

/// Coarse classification used for logging and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed description.
    Parse,
    /// Unsupported league or asset.
    Lookup,
    /// Network, timeout or malformed provider payload.
    Provider,
    /// No completed fixture, no usable scores, or no price.
    NoMatch,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse => write!(f, "parse"),
            Self::Lookup => write!(f, "lookup"),
            Self::Provider => write!(f, "provider"),
            Self::NoMatch => write!(f, "no_match"),
        }
    }
}

/// Every way a single resolution attempt can fail to gather evidence.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ResolutionError {
    #[error("unsupported description: {0}")]
    Parse(#[from] ParseError),

    #[error("league '{league}' is not supported")]
    UnsupportedLeague { league: String },

    #[error("{provider} request failed: {reason}")]
    Provider {
        provider: &'static str,
        reason: String,
    },

    #[error("no completed fixture found for '{team}'")]
    NoCompletedFixture { team: String },

    #[error("could not determine scores for '{team}'")]
    ScoresUnavailable { team: String },

    #[error("no price available for '{asset}'")]
    NoPrice { asset: String },
}

impl ResolutionError {
    /// Build a provider error from any displayable failure.
    pub fn provider(provider: &'static str, reason: impl fmt::Display) -> Self {
        Self::Provider {
            provider,
            reason: reason.to_string(),
        }
    }

    /// The taxonomy bucket this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Parse(_) => ErrorKind::Parse,
            Self::UnsupportedLeague { .. } => ErrorKind::Lookup,
            Self::Provider { .. } => ErrorKind::Provider,
            Self::NoCompletedFixture { .. }
            | Self::ScoresUnavailable { .. }
            | Self::NoPrice { .. } => ErrorKind::NoMatch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_follow_the_taxonomy() {
        assert_eq!(
            ResolutionError::from(ParseError::MissingCondition).kind(),
            ErrorKind::Parse
        );
        assert_eq!(
            ResolutionError::UnsupportedLeague {
                league: "NHL".into()
            }
            .kind(),
            ErrorKind::Lookup
        );
        assert_eq!(
            ResolutionError::provider("coingecko", "timeout").kind(),
            ErrorKind::Provider
        );
        assert_eq!(
            ResolutionError::NoPrice { asset: "eth".into() }.kind(),
            ErrorKind::NoMatch
        );
    }

    #[test]
    fn parse_errors_render_their_reason() {
        let err = ResolutionError::from(ParseError::InvalidThreshold {
            token: "ten".into(),
        });
        assert_eq!(err.to_string(), "unsupported description: invalid threshold 'ten'");
    }
}
