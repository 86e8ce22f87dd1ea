//! CLI module graph.

pub mod command;
pub mod config;
pub mod operator;
pub mod output;
pub mod parse;
pub mod resolve;
pub mod run;
