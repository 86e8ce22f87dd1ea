//! The Odds API sports-data adapter.
//!
//! Uses the `/sports/{sport}/scores` endpoint, which lists recent fixtures
//! with their completion flag and per-team scores.

pub mod client;
pub mod dto;
pub mod settings;
