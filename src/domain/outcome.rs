//! Resolution outcomes.
//!
//! The ledger only accepts a definite [`Outcome`]. Internally the engine
//! reports a [`Verdict`] so callers can tell "the data says no" apart from
//! "there was not enough data to say anything".

use std::fmt;

use serde::{Deserialize, Serialize};

use super::error::ResolutionError;

/// A binary market outcome as written to the ledger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Yes,
    No,
}

impl Outcome {
    /// The ledger wire form: `"yes"` or `"no"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }

    /// `Yes` when the condition holds, `No` otherwise.
    #[must_use]
    pub const fn from_bool(holds: bool) -> Self {
        if holds {
            Self::Yes
        } else {
            Self::No
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of a single resolution attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum Verdict {
    /// Evidence was gathered and the outcome follows from it.
    Decided(Outcome),
    /// Evidence could not be gathered.
    Indeterminate(ResolutionError),
}

impl Verdict {
    /// Collapse to a ledger outcome, treating missing evidence as `No`.
    #[must_use]
    pub const fn fail_closed(&self) -> Outcome {
        match self {
            Self::Decided(outcome) => *outcome,
            Self::Indeterminate(_) => Outcome::No,
        }
    }

    #[must_use]
    pub const fn is_decided(&self) -> bool {
        matches!(self, Self::Decided(_))
    }
}

impl From<Result<Outcome, ResolutionError>> for Verdict {
    fn from(result: Result<Outcome, ResolutionError>) -> Self {
        match result {
            Ok(outcome) => Self::Decided(outcome),
            Err(err) => Self::Indeterminate(err),
        }
    }
}
