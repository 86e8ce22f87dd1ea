//! Tokenizer and grammar for market descriptions.
//!
//! ```text
//! sport <LEAGUE> <team words...> win
//! sport <LEAGUE> <team words...> > <number>
//! sport <LEAGUE> <team words...> < <number>
//! crypto <ASSET> > <number>
//! crypto <ASSET> < <number>
//! crypto <ASSET> = <number>
//! ```
//!
//! Keywords are case-insensitive. Tokens are whitespace-delimited.

use crate::domain::error::ParseError;
use crate::domain::request::{
    ParsedRequest, PriceOperator, PriceRequest, SportCondition, SportsRequest,
};

/// First token of a sports market.
pub(crate) const SPORT_KEYWORD: &str = "sport";
/// First token of a price market.
pub(crate) const PRICE_KEYWORD: &str = "crypto";

const WIN: &str = "win";
const GREATER: &str = ">";
const LESS: &str = "<";
const CONDITION_KEYWORDS: [&str; 3] = [WIN, GREATER, LESS];

/// `sport LEAGUE TEAM CONDITION` is the shortest sports form.
const MIN_SPORT_TOKENS: usize = 4;
/// `crypto ASSET OPERATOR THRESHOLD`
const PRICE_TOKENS: usize = 4;
/// Team words start after the kind keyword and the league.
const TEAM_START: usize = 2;

/// Turns free-text descriptions into typed requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescriptionParser;

impl DescriptionParser {
    /// Parse a description. Never fails: malformed input yields
    /// [`ParsedRequest::Unsupported`] carrying the reason.
    #[must_use]
    pub fn parse(description: &str) -> ParsedRequest {
        let tokens: Vec<&str> = description.split_whitespace().collect();
        let Some(first) = tokens.first() else {
            return ParseError::Empty.into();
        };

        let result = match first.to_lowercase().as_str() {
            SPORT_KEYWORD => parse_sports(&tokens).map(ParsedRequest::Sports),
            PRICE_KEYWORD => parse_price(&tokens).map(ParsedRequest::Price),
            _ => Err(ParseError::UnknownKind {
                token: (*first).to_string(),
            }),
        };

        result.unwrap_or_else(ParsedRequest::from)
    }
}

fn parse_sports(tokens: &[&str]) -> Result<SportsRequest, ParseError> {
    if tokens.len() < MIN_SPORT_TOKENS {
        return Err(ParseError::TooFewTokens {
            expected: MIN_SPORT_TOKENS,
            found: tokens.len(),
        });
    }

    let league = tokens[1].to_uppercase();

    let condition_index = tokens
        .iter()
        .enumerate()
        .skip(TEAM_START)
        .find(|(_, token)| CONDITION_KEYWORDS.contains(&token.to_lowercase().as_str()))
        .map(|(index, _)| index)
        .ok_or(ParseError::MissingCondition)?;

    let team_tokens = &tokens[TEAM_START..condition_index];
    if team_tokens.is_empty() {
        return Err(ParseError::MissingTeam);
    }
    let team = team_tokens.join(" ");

    let keyword = tokens[condition_index].to_lowercase();
    let condition = match keyword.as_str() {
        WIN => SportCondition::Win,
        GREATER => SportCondition::GreaterThan(threshold_after(tokens, condition_index)?),
        _ => SportCondition::LessThan(threshold_after(tokens, condition_index)?),
    };

    Ok(SportsRequest {
        league,
        team,
        condition,
    })
}

fn threshold_after(tokens: &[&str], condition_index: usize) -> Result<f64, ParseError> {
    let token = tokens
        .get(condition_index + 1)
        .ok_or_else(|| ParseError::MissingThreshold {
            condition: tokens[condition_index].to_string(),
        })?;
    parse_number(token)
}

fn parse_price(tokens: &[&str]) -> Result<PriceRequest, ParseError> {
    if tokens.len() < PRICE_TOKENS {
        return Err(ParseError::TooFewTokens {
            expected: PRICE_TOKENS,
            found: tokens.len(),
        });
    }

    Ok(PriceRequest {
        asset: tokens[1].to_lowercase(),
        operator: PriceOperator::from_token(tokens[2])?,
        threshold: parse_number(tokens[3])?,
    })
}

fn parse_number(token: &str) -> Result<f64, ParseError> {
    token
        .parse::<f64>()
        .ok()
        .filter(|value| !value.is_nan())
        .ok_or_else(|| ParseError::InvalidThreshold {
            token: token.to_string(),
        })
}
