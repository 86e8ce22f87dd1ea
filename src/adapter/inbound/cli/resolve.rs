//! Handler for the `resolve` command.

use serde_json::json;

use crate::adapter::inbound::cli::command::ResolveArgs;
use crate::adapter::inbound::cli::parse::print_request;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::outcome::{Outcome, Verdict};
use crate::error::Result;

/// Execute `resolve`: evaluate a description without writing to the ledger.
pub async fn execute(args: &ResolveArgs) -> Result<()> {
    let config_toml = operator::read_config_toml(&args.config)?;
    let description = args.description.text();
    let preview = operator::operator()
        .preview_resolution(&config_toml, &description)
        .await?;

    if output::is_json() {
        let verdict = match &preview.verdict {
            Verdict::Decided(outcome) => json!({ "decided": true, "outcome": outcome }),
            Verdict::Indeterminate(err) => json!({
                "decided": false,
                "outcome": preview.verdict.fail_closed(),
                "kind": err.kind().to_string(),
                "reason": err.to_string(),
            }),
        };
        output::record("request", &preview.request);
        output::record("verdict", &verdict);
        return Ok(());
    }

    print_request(&preview.request);
    output::section("Verdict");
    match &preview.verdict {
        Verdict::Decided(outcome) => output::field("Outcome", styled(*outcome)),
        Verdict::Indeterminate(err) => {
            output::field("Outcome", styled(preview.verdict.fail_closed()));
            output::warning(&format!("indeterminate ({}): {err}", err.kind()));
        }
    }

    Ok(())
}

fn styled(outcome: Outcome) -> String {
    match outcome {
        Outcome::Yes => output::positive(outcome),
        Outcome::No => output::negative(outcome),
    }
}
