//! Command-line interface definitions.
//!
//! Defines the CLI structure for the verity oracle using `clap`: the polling
//! runtime, offline description parsing, live resolution previews, and
//! configuration checks.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Default configuration file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// Autonomous oracle for sports and price prediction markets
#[derive(Parser, Debug)]
#[command(name = "verity")]
#[command(version)]
pub struct Cli {
    /// JSON output for scripting
    #[arg(long, global = true)]
    pub json: bool,

    /// Decrease output verbosity
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Increase output verbosity
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands for the verity CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Poll the ledger and resolve expired markets
    Run(RunArgs),

    /// Parse a market description without contacting any provider
    Parse(DescriptionArgs),

    /// Resolve a market description against live providers (never writes)
    Resolve(ResolveArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

/// Subcommands for `verity config`.
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Display the effective configuration with defaults applied.
    Show(ConfigPathArg),
    /// Validate a configuration file for correctness.
    Validate(ConfigPathArg),
}

/// Config file argument shared by config subcommands.
#[derive(Args, Debug)]
pub struct ConfigPathArg {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,
}

/// Arguments for `verity run`.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Run a single polling pass and exit
    #[arg(long)]
    pub once: bool,

    /// Log resolutions instead of writing them to the ledger
    #[arg(long)]
    pub dry_run: bool,

    /// Override the configured log level (e.g. debug, info, warn)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Free-text market description, given as one or more words.
#[derive(Args, Debug)]
pub struct DescriptionArgs {
    /// Market description, e.g. `sport NBA Lakers win`
    #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
    pub description: Vec<String>,
}

impl DescriptionArgs {
    /// Words joined back with single spaces.
    #[must_use]
    pub fn text(&self) -> String {
        self.description.join(" ")
    }
}

/// Arguments for `verity resolve`.
#[derive(Args, Debug)]
pub struct ResolveArgs {
    /// Path to the configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    #[command(flatten)]
    pub description: DescriptionArgs,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_joins_description_words() {
        let cli = Cli::parse_from(["verity", "parse", "crypto", "ETH", ">", "3000"]);
        let Commands::Parse(args) = cli.command else {
            panic!("expected parse command");
        };
        assert_eq!(args.text(), "crypto ETH > 3000");
    }

    #[test]
    fn run_flags() {
        let cli = Cli::parse_from(["verity", "-v", "run", "--once", "--dry-run", "-c", "x.toml"]);
        assert_eq!(cli.verbose, 1);
        let Commands::Run(args) = cli.command else {
            panic!("expected run command");
        };
        assert!(args.once);
        assert!(args.dry_run);
        assert_eq!(args.config, PathBuf::from("x.toml"));
    }

    #[test]
    fn global_json_flag_after_subcommand() {
        let cli = Cli::parse_from(["verity", "config", "validate", "--json"]);
        assert!(cli.json);
    }
}
