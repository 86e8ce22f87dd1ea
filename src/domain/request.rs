//! Typed resolution requests derived from market descriptions.

use std::fmt;

use serde::Serialize;

use super::error::ParseError;

/// What a sports market asks about the team's latest completed fixture.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "margin")]
pub enum SportCondition {
    /// The team won.
    Win,
    /// The team won by strictly more than the margin.
    GreaterThan(f64),
    /// The team won by strictly less than the margin.
    LessThan(f64),
}

impl SportCondition {
    /// Evaluate the condition against a final score.
    ///
    /// A team that did not win never satisfies any condition, margins included.
    #[must_use]
    pub fn holds(self, team_score: i64, opponent_score: i64) -> bool {
        if team_score <= opponent_score {
            return false;
        }
        // Widened so extreme provider scores cannot overflow.
        let margin = (i128::from(team_score) - i128::from(opponent_score)) as f64;
        match self {
            Self::Win => true,
            Self::GreaterThan(threshold) => margin > threshold,
            Self::LessThan(threshold) => margin < threshold,
        }
    }
}

impl fmt::Display for SportCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Win => write!(f, "win"),
            Self::GreaterThan(margin) => write!(f, "> {margin}"),
            Self::LessThan(margin) => write!(f, "< {margin}"),
        }
    }
}

/// Price comparison operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceOperator {
    Gt,
    Lt,
    /// Equal within a relative tolerance band around the threshold.
    Eq,
}

impl PriceOperator {
    /// Parse the operator token used in descriptions.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::UnknownOperator`] for anything but `>`, `<`, `=`.
    pub fn from_token(token: &str) -> Result<Self, ParseError> {
        match token {
            ">" => Ok(Self::Gt),
            "<" => Ok(Self::Lt),
            "=" => Ok(Self::Eq),
            other => Err(ParseError::UnknownOperator {
                token: other.to_string(),
            }),
        }
    }

    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Eq => "=",
        }
    }

    /// Compare a fetched price against the threshold.
    ///
    /// `tolerance` is the relative half-width of the `Eq` band, so `0.01`
    /// accepts prices strictly within 1% of the threshold.
    #[must_use]
    pub fn holds(self, price: f64, threshold: f64, tolerance: f64) -> bool {
        match self {
            Self::Gt => price > threshold,
            Self::Lt => price < threshold,
            Self::Eq => (price - threshold).abs() < tolerance * threshold,
        }
    }
}

impl fmt::Display for PriceOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// `sport <LEAGUE> <team words...> <condition>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SportsRequest {
    /// Upper-cased league code, e.g. `NBA`.
    pub league: String,
    /// Team name as written in the description.
    pub team: String,
    pub condition: SportCondition,
}

/// `crypto <ASSET> <operator> <threshold>`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriceRequest {
    /// Lower-cased asset symbol, e.g. `eth`.
    pub asset: String,
    pub operator: PriceOperator,
    pub threshold: f64,
}

/// Exactly one of these is produced per description.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "type")]
pub enum ParsedRequest {
    Sports(SportsRequest),
    Price(PriceRequest),
    Unsupported {
        #[serde(serialize_with = "serialize_reason")]
        reason: ParseError,
    },
}

impl ParsedRequest {
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported { .. })
    }
}

impl From<ParseError> for ParsedRequest {
    fn from(reason: ParseError) -> Self {
        Self::Unsupported { reason }
    }
}

fn serialize_reason<S>(reason: &ParseError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(reason)
}
