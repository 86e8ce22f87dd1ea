//! Polling scheduler: finds expired markets and commits their outcomes.

pub mod config;
pub mod scheduler;
