//! Infrastructure bootstrap helpers for runtime wiring.

use std::sync::Arc;

use tracing::info;

use crate::adapter::outbound::coingecko::client::CoinGeckoClient;
use crate::adapter::outbound::ledger::dry_run::DryRunLedger;
use crate::adapter::outbound::ledger::relay::RelayLedger;
use crate::adapter::outbound::ledger::settings::LedgerMode;
use crate::adapter::outbound::near::client::NearMarketSource;
use crate::adapter::outbound::odds_api::client::OddsApiClient;
use crate::adapter::outbound::odds_api::settings::OddsApiConfig;
use crate::application::polling::scheduler::PollingScheduler;
use crate::application::resolution::engine::ResolutionEngine;
use crate::application::resolution::price::PriceOutcomeResolver;
use crate::application::resolution::sports::{
    default_league_table, LeagueTable, SportsOutcomeResolver,
};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::outbound::ledger::LedgerWriter;
use crate::port::outbound::market::MarketSource;
use crate::port::outbound::price::PriceDataProvider;
use crate::port::outbound::sports::SportsDataProvider;

/// Built-in leagues with configured ones merged on top. Codes are upper-cased.
pub(crate) fn league_table(config: &OddsApiConfig) -> LeagueTable {
    let mut table = default_league_table();
    for (league, sport_id) in &config.leagues {
        table.insert(league.to_uppercase(), sport_id.clone());
    }
    table
}

/// Build the resolution engine against live providers.
///
/// # Errors
///
/// Returns an error when a provider credential is missing.
#[allow(clippy::result_large_err)]
pub(crate) fn build_engine(config: &Config) -> Result<ResolutionEngine> {
    let http = config.http.build_client();
    let timeout = config.http.timeout();

    let sports: Arc<dyn SportsDataProvider> =
        Arc::new(OddsApiClient::from_config(&config.sports, http.clone())?);
    let price: Arc<dyn PriceDataProvider> =
        Arc::new(CoinGeckoClient::from_config(&config.price, http));

    let sports = SportsOutcomeResolver::new(sports)
        .with_leagues(league_table(&config.sports))
        .with_lookback_days(config.sports.lookback_days)
        .with_timeout(timeout);
    let price = PriceOutcomeResolver::new(price)
        .with_equality_tolerance(config.price.equality_tolerance)
        .with_timeout(timeout);

    Ok(ResolutionEngine::new(sports, price))
}

pub(crate) fn build_market_source(config: &Config) -> Arc<dyn MarketSource> {
    Arc::new(NearMarketSource::new(
        config.http.build_client(),
        config.ledger.rpc_url.clone(),
        config.ledger.contract_id.clone(),
    ))
}

/// Build the configured ledger writer.
///
/// # Errors
///
/// Returns an error when relay mode lacks a relay URL.
#[allow(clippy::result_large_err)]
pub(crate) fn build_ledger(config: &Config) -> Result<Arc<dyn LedgerWriter>> {
    let ledger: Arc<dyn LedgerWriter> = match config.ledger.mode {
        LedgerMode::DryRun => Arc::new(DryRunLedger::new(config.ledger.contract_id.clone())),
        LedgerMode::Relay => Arc::new(RelayLedger::from_config(
            &config.ledger,
            config.http.build_client(),
        )?),
    };
    info!(
        writer = ledger.writer_name(),
        contract = %config.ledger.contract_id,
        "Ledger writer ready"
    );
    Ok(ledger)
}

/// Wire the full polling scheduler from configuration.
///
/// # Errors
///
/// Returns an error when any adapter cannot be constructed.
#[allow(clippy::result_large_err)]
pub(crate) fn build_scheduler(config: &Config) -> Result<PollingScheduler> {
    let engine = build_engine(config)?;
    let source = build_market_source(config);
    let ledger = build_ledger(config)?;
    Ok(PollingScheduler::new(
        source,
        ledger,
        engine,
        config.scheduler.clone(),
    ))
}
