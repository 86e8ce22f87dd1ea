//! Handler for the `parse` command.

use crate::adapter::inbound::cli::command::DescriptionArgs;
use crate::adapter::inbound::cli::{operator, output};
use crate::domain::request::ParsedRequest;

/// Execute `parse`. Never fails: unsupported descriptions are reported, not
/// raised.
pub fn execute(args: &DescriptionArgs) {
    let description = args.text();
    let request = operator::operator().parse_description(&description);

    if output::is_json() {
        output::record("parsed", &request);
        return;
    }

    print_request(&request);
}

pub(super) fn print_request(request: &ParsedRequest) {
    match request {
        ParsedRequest::Sports(sports) => {
            output::section("Sports market");
            output::field("League", &sports.league);
            output::field("Team", &sports.team);
            output::field("Condition", output::highlight(sports.condition));
        }
        ParsedRequest::Price(price) => {
            output::section("Price market");
            output::field("Asset", &price.asset);
            output::field("Operator", output::highlight(price.operator));
            output::field("Threshold", price.threshold);
        }
        ParsedRequest::Unsupported { reason } => {
            output::warning(&format!("unsupported: {reason}"));
        }
    }
}
