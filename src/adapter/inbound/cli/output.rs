//! CLI output formatting.
//!
//! Human-readable output uses colored symbols and aligned fields. With
//! `--json`, every call instead prints one object per line shaped as
//! `{"type": ..., "payload": ...}` so scripts can consume it line by line.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::OwoColorize;
use parking_lot::RwLock;
use serde::Serialize;
use serde_json::{json, Value};

/// Output flags shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON lines.
    pub json: bool,
    /// Suppress non-essential human output.
    pub quiet: bool,
    /// Number of `-v` flags.
    pub verbose: u8,
}

impl OutputConfig {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, verbose: u8) -> Self {
        Self {
            json,
            quiet,
            verbose,
        }
    }
}

static OUTPUT: OnceLock<RwLock<OutputConfig>> = OnceLock::new();

fn current() -> OutputConfig {
    *OUTPUT
        .get_or_init(|| RwLock::new(OutputConfig::default()))
        .read()
}

/// Apply output settings from the global CLI flags.
pub fn configure(config: OutputConfig) {
    *OUTPUT.get_or_init(|| RwLock::new(config)).write() = config;
}

#[must_use]
pub fn is_json() -> bool {
    current().json
}

#[must_use]
pub fn is_quiet() -> bool {
    current().quiet
}

#[must_use]
pub fn verbosity() -> u8 {
    current().verbose
}

fn emit(kind: &str, payload: Value) {
    println!("{}", json!({ "type": kind, "payload": payload }));
}

/// Human output is skipped in quiet mode; JSON output never is.
fn human(config: OutputConfig) -> bool {
    !config.json && !config.quiet
}

/// Emit a serializable value as a single typed JSON line.
pub fn record<T: Serialize>(kind: &str, value: &T) {
    let payload =
        serde_json::to_value(value).unwrap_or_else(|err| json!({ "error": err.to_string() }));
    emit(kind, payload);
}

/// Print the application name and version.
pub fn header(version: &str) {
    let config = current();
    if config.json {
        emit("header", json!({ "app": "verity", "version": version }));
        return;
    }
    if human(config) {
        println!("{} {}", "verity".bold(), version.dimmed());
        println!();
    }
}

pub fn section(title: &str) {
    let config = current();
    if config.json {
        emit("section", json!({ "title": title }));
        return;
    }
    if human(config) {
        println!();
        println!("{}", title.bold());
    }
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    let config = current();
    let value = value.to_string();
    if config.json {
        emit("field", json!({ "label": label, "value": value }));
        return;
    }
    if human(config) {
        println!("  {:<14} {}", label.dimmed(), value);
    }
}

pub fn success(message: &str) {
    let config = current();
    if config.json {
        emit("success", json!({ "message": message }));
        return;
    }
    if human(config) {
        println!("  {} {}", "✓".green(), message);
    }
}

/// Warnings are printed even in quiet mode.
pub fn warning(message: &str) {
    if is_json() {
        emit("warning", json!({ "message": message }));
        return;
    }
    println!("  {} {}", "⚠".yellow(), message);
}

/// Errors go to stderr in both modes.
pub fn error(message: &str) {
    if is_json() {
        eprintln!("{}", json!({ "type": "error", "payload": { "message": message } }));
        return;
    }
    eprintln!("  {} {}", "×".red(), message);
}

pub fn note(message: &str) {
    let config = current();
    if config.json {
        emit("note", json!({ "message": message }));
        return;
    }
    if human(config) {
        println!("  {}", message.dimmed());
    }
}

/// Format an outcome-like value in green.
pub fn positive(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.green())
}

/// Format an outcome-like value in red.
pub fn negative(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.red())
}

pub fn highlight(value: impl Display) -> String {
    let value = value.to_string();
    if is_json() {
        return value;
    }
    format!("{}", value.cyan())
}
