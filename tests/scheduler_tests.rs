//! Polling scheduler behavior over in-memory ports.

mod support;

use std::sync::Arc;
use std::time::Duration;

use verity::application::polling::config::{IndeterminatePolicy, SchedulerConfig};
use verity::application::polling::scheduler::PollingScheduler;
use verity::domain::outcome::Outcome;
use verity::testkit::config::scheduler as scheduler_config;
use verity::testkit::domain::{
    completed_fixture, market, market_ending_at, market_id, resolved_market,
};
use verity::testkit::ledger::RecordingLedger;
use verity::testkit::market::StaticMarketSource;
use verity::testkit::provider::{FixedPriceProvider, ScriptedSportsProvider};

use support::engine::engine;

const NOW: u64 = 1_700_000_000_000_000_000;

fn scheduler(
    source: StaticMarketSource,
    ledger: RecordingLedger,
    sports: ScriptedSportsProvider,
    policy: IndeterminatePolicy,
) -> PollingScheduler {
    PollingScheduler::new(
        Arc::new(source),
        Arc::new(ledger),
        engine(sports, FixedPriceProvider::new().with_price("eth", 3_500.0)),
        scheduler_config(policy),
    )
}

#[tokio::test]
async fn only_expired_unresolved_markets_reach_the_engine() {
    let sports = ScriptedSportsProvider::with_fixtures(vec![completed_fixture(
        ("Lakers", "110"),
        ("Celtics", "100"),
    )]);
    let source = StaticMarketSource::new(vec![
        market_ending_at("1", "sport NBA Lakers win", NOW - 1),
        market_ending_at("2", "sport NBA Lakers win", NOW),
        market_ending_at("3", "sport NBA Lakers win", NOW + 1),
        resolved_market("4", "sport NBA Lakers win"),
    ]);
    let ledger = RecordingLedger::new();
    let scheduler = scheduler(
        source,
        ledger.clone(),
        sports.clone(),
        IndeterminatePolicy::ResolveNo,
    );

    let report = scheduler.run_once_at(NOW).await;

    assert_eq!(report.examined, 4);
    assert_eq!(report.eligible, 1);
    assert_eq!(report.resolved, 1);
    assert_eq!(ledger.writes(), vec![(market_id("1"), Outcome::Yes)]);
    assert_eq!(
        sports.requests().len(),
        1,
        "only the eligible market hits the provider"
    );
}

#[tokio::test(start_paused = true)]
async fn per_market_resolution_respects_max_concurrency() {
    let price = FixedPriceProvider::new()
        .with_price("eth", 3_500.0)
        .with_delay(Duration::from_secs(1));
    let markets = (1..=5)
        .map(|id| market(&id.to_string(), "crypto ETH > 3000"))
        .collect();
    let ledger = RecordingLedger::new();
    let scheduler = PollingScheduler::new(
        Arc::new(StaticMarketSource::new(markets)),
        Arc::new(ledger.clone()),
        engine(ScriptedSportsProvider::with_fixtures(Vec::new()), price.clone()),
        SchedulerConfig {
            max_concurrency: 2,
            ..scheduler_config(IndeterminatePolicy::ResolveNo)
        },
    );

    let report = scheduler.run_once_at(NOW).await;

    assert_eq!(price.peak_in_flight(), 2);
    assert_eq!(report.resolved, 5);
    let mut written: Vec<String> = ledger
        .writes()
        .into_iter()
        .map(|(id, outcome)| {
            assert_eq!(outcome, Outcome::Yes);
            id.as_str().to_string()
        })
        .collect();
    written.sort();
    assert_eq!(written, ["1", "2", "3", "4", "5"]);
}

#[tokio::test]
async fn unreachable_source_is_an_empty_run() {
    let ledger = RecordingLedger::new();
    let scheduler = scheduler(
        StaticMarketSource::failing("rpc down"),
        ledger.clone(),
        ScriptedSportsProvider::with_fixtures(Vec::new()),
        IndeterminatePolicy::ResolveNo,
    );

    let report = scheduler.run_once_at(NOW).await;

    assert_eq!(report.examined, 0);
    assert_eq!(report.resolved, 0);
    assert!(ledger.writes().is_empty());
}

#[tokio::test]
async fn write_failure_does_not_stop_the_run() {
    let ledger = RecordingLedger::rejecting(["1"]);
    let source = StaticMarketSource::new(vec![
        market("1", "crypto ETH > 3000"),
        market("2", "crypto ETH > 3000"),
    ]);
    let scheduler = scheduler(
        source,
        ledger.clone(),
        ScriptedSportsProvider::with_fixtures(Vec::new()),
        IndeterminatePolicy::ResolveNo,
    );

    let report = scheduler.run_once_at(NOW).await;

    assert_eq!(report.eligible, 2);
    assert_eq!(report.resolved, 1);
    assert_eq!(report.write_failures, 1);
    assert_eq!(ledger.writes(), vec![(market_id("2"), Outcome::Yes)]);
}

#[tokio::test]
async fn indeterminate_markets_follow_the_policy() {
    let markets = vec![
        market("1", "sport NBA Lakers win"),
        market("2", "poll: will it rain"),
    ];

    let resolve_no = RecordingLedger::new();
    let report = scheduler(
        StaticMarketSource::new(markets.clone()),
        resolve_no.clone(),
        ScriptedSportsProvider::failing("timeout"),
        IndeterminatePolicy::ResolveNo,
    )
    .run_once_at(NOW)
    .await;
    assert_eq!(report.indeterminate, 2);
    assert_eq!(report.resolved, 2);
    let mut writes = resolve_no.writes();
    writes.sort_by(|a, b| a.0.cmp(&b.0));
    assert_eq!(
        writes,
        vec![(market_id("1"), Outcome::No), (market_id("2"), Outcome::No)]
    );

    let skip = RecordingLedger::new();
    let report = scheduler(
        StaticMarketSource::new(markets),
        skip.clone(),
        ScriptedSportsProvider::failing("timeout"),
        IndeterminatePolicy::Skip,
    )
    .run_once_at(NOW)
    .await;
    assert_eq!(report.skipped, 2);
    assert_eq!(report.resolved, 0);
    assert!(skip.writes().is_empty());
}

#[tokio::test]
async fn repeated_runs_resubmit_until_the_ledger_catches_up() {
    let source = StaticMarketSource::new(vec![market("1", "crypto ETH > 3000")]);
    let ledger = RecordingLedger::new();
    let scheduler = scheduler(
        source.clone(),
        ledger.clone(),
        ScriptedSportsProvider::with_fixtures(Vec::new()),
        IndeterminatePolicy::ResolveNo,
    );

    scheduler.run_once_at(NOW).await;
    scheduler.run_once_at(NOW).await;
    source.set_markets(vec![resolved_market("1", "crypto ETH > 3000")]);
    let third = scheduler.run_once_at(NOW).await;

    assert_eq!(
        ledger.writes(),
        vec![(market_id("1"), Outcome::Yes), (market_id("1"), Outcome::Yes)]
    );
    assert_eq!(third.eligible, 0);
    assert_eq!(source.calls(), 3);
}

#[test]
fn run_once_can_be_driven_from_a_blocking_context() {
    let ledger = RecordingLedger::new();
    let scheduler = scheduler(
        StaticMarketSource::new(vec![market("1", "crypto ETH < 3000")]),
        ledger.clone(),
        ScriptedSportsProvider::with_fixtures(Vec::new()),
        IndeterminatePolicy::ResolveNo,
    );

    let report = tokio_test::block_on(scheduler.run_once_at(NOW));

    assert_eq!(report.resolved, 1);
    assert_eq!(ledger.writes(), vec![(market_id("1"), Outcome::No)]);
}
