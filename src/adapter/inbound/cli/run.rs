//! Handler for the `run` command.

use crate::adapter::inbound::cli::command::RunArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::report::RunReport;
use crate::error::Result;
use crate::port::inbound::operator::runtime::{RunRequest, RunStartupSnapshot};

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(&args.config)?;
    let request = build_run_request(args, config_toml, output::is_json(), output::verbosity());
    let service = operator::operator();

    if !output::is_quiet() || output::is_json() {
        let startup = service.prepare_run(&request)?;
        print_startup(&startup);
    }

    if let Some(report) = service.execute_run(request).await? {
        print_report(&report);
    }
    Ok(())
}

fn build_run_request(
    args: &RunArgs,
    config_toml: String,
    force_json_logs: bool,
    verbosity: u8,
) -> RunRequest {
    let log_level = args.log_level.clone().or_else(|| match verbosity {
        0 => None,
        1 => Some("debug".to_string()),
        _ => Some("trace".to_string()),
    });

    RunRequest {
        config_toml,
        once: args.once,
        dry_run: args.dry_run,
        log_level,
        json_logs: args.json_logs || force_json_logs,
    }
}

fn print_startup(snapshot: &RunStartupSnapshot) {
    output::header(env!("CARGO_PKG_VERSION"));
    output::field("Contract", &snapshot.contract_id);
    output::field("RPC", &snapshot.rpc_url);
    output::field("Ledger", &snapshot.ledger_mode);
    if snapshot.once {
        output::field("Mode", "single pass");
    } else {
        output::field("Interval", format!("{}s", snapshot.interval_secs));
    }

    if snapshot.ledger_mode == "dry_run" {
        output::warning("Dry-run mode enabled - resolutions will only be logged");
    }
}

fn print_report(report: &RunReport) {
    if output::is_json() {
        output::record("report", report);
        return;
    }
    output::section("Run Report");
    output::field("Examined", report.examined);
    output::field("Eligible", report.eligible);
    output::field("Resolved", report.resolved);
    output::field("Indeterminate", report.indeterminate);
    output::field("Skipped", report.skipped);
    output::field("Write failures", report.write_failures);
}
