use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use verity::adapter::inbound::cli::command::{Cli, Commands, ConfigCommand};
use verity::adapter::inbound::cli::output::{self, OutputConfig};
use verity::adapter::inbound::cli::{config, operator, parse, resolve, run};
use verity::infrastructure::operator::entry::Operator;

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    output::configure(OutputConfig::new(cli.json, cli.quiet, cli.verbose));

    if operator::install(Box::new(Operator::new())).is_err() {
        output::error("operator already installed");
        return ExitCode::FAILURE;
    }

    match dispatch(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            output::error(&format!("{err:#}"));
            ExitCode::FAILURE
        }
    }
}

async fn dispatch(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Run(args) => run::execute(&args)
            .await
            .with_context(|| format!("run failed ({})", args.config.display())),
        Commands::Parse(args) => {
            parse::execute(&args);
            Ok(())
        }
        Commands::Resolve(args) => resolve::execute(&args)
            .await
            .context("resolution preview failed"),
        Commands::Config(ConfigCommand::Show(args)) => config::execute_show(&args.config)
            .with_context(|| format!("cannot show {}", args.config.display())),
        Commands::Config(ConfigCommand::Validate(args)) => config::execute_validate(&args.config)
            .with_context(|| format!("invalid config {}", args.config.display())),
    }
}
