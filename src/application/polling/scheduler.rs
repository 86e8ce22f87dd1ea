//! Single-pass and continuous polling over the ledger's markets.

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use futures_util::stream::{self, StreamExt};
use tokio::time::MissedTickBehavior;
use tracing::{error, info, info_span, warn, Instrument};
use uuid::Uuid;

use super::config::{IndeterminatePolicy, SchedulerConfig};
use crate::application::resolution::engine::ResolutionEngine;
use crate::domain::market::Market;
use crate::domain::outcome::{Outcome, Verdict};
use crate::domain::report::RunReport;
use crate::port::outbound::ledger::LedgerWriter;
use crate::port::outbound::market::MarketSource;

/// Pulls markets, resolves the expired ones and writes outcomes to the ledger.
///
/// Keeps no state between runs: a market interrupted mid-run is simply
/// picked up again next time, since it is still unresolved on the ledger.
pub struct PollingScheduler {
    source: Arc<dyn MarketSource>,
    ledger: Arc<dyn LedgerWriter>,
    engine: ResolutionEngine,
    config: SchedulerConfig,
}

impl PollingScheduler {
    pub fn new(
        source: Arc<dyn MarketSource>,
        ledger: Arc<dyn LedgerWriter>,
        engine: ResolutionEngine,
        config: SchedulerConfig,
    ) -> Self {
        Self {
            source,
            ledger,
            engine,
            config,
        }
    }

    #[must_use]
    pub const fn engine(&self) -> &ResolutionEngine {
        &self.engine
    }

    /// Run one pass using the wall clock.
    pub async fn run_once(&self) -> RunReport {
        self.run_once_at(now_ns()).await
    }

    /// Run one pass treating `now_ns` as the current time.
    pub async fn run_once_at(&self, now_ns: u64) -> RunReport {
        let run_id = Uuid::new_v4();
        self.pass(now_ns)
            .instrument(info_span!("run", %run_id))
            .await
    }

    async fn pass(&self, now_ns: u64) -> RunReport {
        let mut report = RunReport::default();

        let markets = match self.source.list_markets().await {
            Ok(markets) => markets,
            Err(err) => {
                warn!(
                    source = self.source.source_name(),
                    error = %err,
                    "Failed to list markets, treating as empty"
                );
                Vec::new()
            }
        };
        report.examined = markets.len();

        let eligible: Vec<Market> = markets
            .into_iter()
            .filter(|market| market.is_eligible(now_ns))
            .collect();
        report.eligible = eligible.len();
        info!(
            examined = report.examined,
            eligible = report.eligible,
            "Polling expired markets"
        );

        let engine = &self.engine;
        let mut verdicts = stream::iter(eligible)
            .map(|market| async move {
                info!(
                    market_id = %market.id(),
                    description = %market.description(),
                    "Market expired"
                );
                let verdict = engine.evaluate(&market).await;
                (market, verdict)
            })
            .buffer_unordered(self.config.max_concurrency.max(1));

        // Writes happen one at a time from this loop.
        while let Some((market, verdict)) = verdicts.next().await {
            let outcome = match verdict {
                Verdict::Decided(outcome) => outcome,
                Verdict::Indeterminate(_) => {
                    report.indeterminate += 1;
                    match self.config.on_indeterminate {
                        IndeterminatePolicy::ResolveNo => Outcome::No,
                        IndeterminatePolicy::Skip => {
                            report.skipped += 1;
                            info!(market_id = %market.id(), "Skipping indeterminate market");
                            continue;
                        }
                    }
                }
            };

            info!(market_id = %market.id(), outcome = %outcome, "Determined outcome");
            match self.ledger.resolve(market.id(), outcome).await {
                Ok(()) => {
                    report.resolved += 1;
                    info!(
                        market_id = %market.id(),
                        outcome = %outcome,
                        writer = self.ledger.writer_name(),
                        "Market resolved"
                    );
                }
                Err(err) => {
                    report.write_failures += 1;
                    error!(
                        market_id = %market.id(),
                        outcome = %outcome,
                        error = %err,
                        "Failed to resolve market"
                    );
                }
            }
        }

        report
    }

    /// Poll every `interval_secs` until `shutdown` completes.
    ///
    /// A pass that has started always runs to completion.
    pub async fn run_forever<F>(&self, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        let mut ticker = tokio::time::interval(Duration::from_secs(self.config.interval_secs));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                () = &mut shutdown => {
                    info!("Shutdown signal received");
                    break;
                }
                _ = ticker.tick() => {
                    let report = self.run_once().await;
                    info!(
                        resolved = report.resolved,
                        skipped = report.skipped,
                        write_failures = report.write_failures,
                        "Polling pass complete"
                    );
                }
            }
        }
    }
}

/// Current time in nanoseconds since the Unix epoch.
fn now_ns() -> u64 {
    Utc::now()
        .timestamp_nanos_opt()
        .and_then(|ns| u64::try_from(ns).ok())
        .unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::resolution::price::PriceOutcomeResolver;
    use crate::application::resolution::sports::SportsOutcomeResolver;
    use crate::testkit::domain::{market_ending_at, market_id};
    use crate::testkit::ledger::RecordingLedger;
    use crate::testkit::market::StaticMarketSource;
    use crate::testkit::provider::{FixedPriceProvider, ScriptedSportsProvider};

    fn scheduler(
        markets: Vec<Market>,
        ledger: RecordingLedger,
        policy: IndeterminatePolicy,
    ) -> PollingScheduler {
        let engine = ResolutionEngine::new(
            SportsOutcomeResolver::new(Arc::new(ScriptedSportsProvider::with_fixtures(vec![]))),
            PriceOutcomeResolver::new(Arc::new(
                FixedPriceProvider::new().with_price("eth", 3500.0),
            )),
        );
        PollingScheduler::new(
            Arc::new(StaticMarketSource::new(markets)),
            Arc::new(ledger),
            engine,
            SchedulerConfig {
                on_indeterminate: policy,
                ..SchedulerConfig::default()
            },
        )
    }

    #[tokio::test]
    async fn skip_policy_leaves_indeterminate_markets_open() {
        let ledger = RecordingLedger::new();
        let markets = vec![
            market_ending_at("1", "crypto ETH > 3000", 10),
            market_ending_at("2", "crypto DOGE > 1", 10),
        ];

        let report = scheduler(markets, ledger.clone(), IndeterminatePolicy::Skip)
            .run_once_at(100)
            .await;

        assert_eq!(report.resolved, 1);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.indeterminate, 1);
        assert_eq!(ledger.writes(), vec![(market_id("1"), Outcome::Yes)]);
    }

    #[tokio::test]
    async fn resolve_no_policy_writes_no() {
        let ledger = RecordingLedger::new();
        let markets = vec![market_ending_at("2", "crypto DOGE > 1", 10)];

        let report = scheduler(markets, ledger.clone(), IndeterminatePolicy::ResolveNo)
            .run_once_at(100)
            .await;

        assert_eq!(report.resolved, 1);
        assert_eq!(report.indeterminate, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(ledger.writes(), vec![(market_id("2"), Outcome::No)]);
    }

    #[tokio::test(start_paused = true)]
    async fn run_forever_stops_on_shutdown() {
        let ledger = RecordingLedger::new();
        let markets = vec![market_ending_at("1", "crypto ETH > 3000", 10)];
        let scheduler = scheduler(markets, ledger.clone(), IndeterminatePolicy::ResolveNo);

        scheduler
            .run_forever(tokio::time::sleep(Duration::from_secs(90)))
            .await;

        // Ticks at 0s and 60s; the ledger tolerates repeated writes.
        assert_eq!(ledger.writes().len(), 2);
    }
}
