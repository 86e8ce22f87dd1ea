//! Resolution engine scenarios against scripted providers.

mod support;

use std::time::Duration;

use verity::application::resolution::parser::DescriptionParser;
use verity::domain::error::ErrorKind;
use verity::domain::outcome::{Outcome, Verdict};
use verity::domain::request::ParsedRequest;
use verity::testkit::domain::{completed_fixture, fixture, market};
use verity::testkit::provider::{FixedPriceProvider, ScriptedSportsProvider};

use support::engine::{empty_engine, engine};

fn sports(fixtures: Vec<verity::domain::fixture::Fixture>) -> ScriptedSportsProvider {
    ScriptedSportsProvider::with_fixtures(fixtures)
}

#[tokio::test]
async fn descriptions_outside_the_grammar_resolve_no() {
    let engine = empty_engine();

    for description in [
        "",
        "weather NYC rain",
        "sport NBA win",
        "sport NBA Lakers",
        "sport NBA Lakers > many",
        "crypto ETH >",
        "crypto ETH >= 3000",
        "crypto ETH > lots",
    ] {
        assert!(
            !DescriptionParser::parse(description).is_supported(),
            "{description:?} should not parse"
        );
        assert_eq!(
            engine.resolve(&market("1", description)).await,
            Outcome::No,
            "{description:?} should resolve no"
        );
    }
}

#[tokio::test]
async fn lakers_win_when_they_outscore_the_opponent() {
    let winning = engine(
        sports(vec![completed_fixture(
            ("Los Angeles Lakers", "110"),
            ("Boston Celtics", "100"),
        )]),
        FixedPriceProvider::new(),
    );
    let losing = engine(
        sports(vec![completed_fixture(
            ("Los Angeles Lakers", "95"),
            ("Boston Celtics", "100"),
        )]),
        FixedPriceProvider::new(),
    );
    let market = market("1", "sport NBA Los Angeles Lakers win");

    assert_eq!(winning.resolve(&market).await, Outcome::Yes);
    assert_eq!(losing.resolve(&market).await, Outcome::No);
}

#[tokio::test]
async fn margin_conditions_need_a_win_by_more_than_the_margin() {
    let market = market("2", "sport NBA Miami Heat > 10");
    let cases = [
        (("Miami Heat", "120"), ("Orlando Magic", "100"), Outcome::Yes),
        (("Miami Heat", "105"), ("Orlando Magic", "100"), Outcome::No),
        (("Miami Heat", "90"), ("Orlando Magic", "130"), Outcome::No),
    ];

    for (home, away, expected) in cases {
        let engine = engine(
            sports(vec![completed_fixture(home, away)]),
            FixedPriceProvider::new(),
        );
        assert_eq!(
            engine.resolve(&market).await,
            expected,
            "{home:?} vs {away:?}"
        );
    }
}

#[tokio::test]
async fn less_than_margin_requires_a_narrow_win() {
    let market = market("3", "sport EPL Arsenal < 2");
    let narrow = engine(
        sports(vec![completed_fixture(("Arsenal", "1"), ("Chelsea", "0"))]),
        FixedPriceProvider::new(),
    );
    let lost = engine(
        sports(vec![completed_fixture(("Arsenal", "0"), ("Chelsea", "1"))]),
        FixedPriceProvider::new(),
    );

    assert_eq!(narrow.resolve(&market).await, Outcome::Yes);
    assert_eq!(lost.resolve(&market).await, Outcome::No);
}

#[tokio::test]
async fn team_matching_is_case_insensitive_substring() {
    let engine = engine(
        sports(vec![completed_fixture(
            ("Los Angeles Lakers", "101"),
            ("Denver Nuggets", "99"),
        )]),
        FixedPriceProvider::new(),
    );

    let verdict = engine.evaluate(&market("4", "SPORT nba lakers WIN")).await;

    assert_eq!(verdict, Verdict::Decided(Outcome::Yes));
}

#[tokio::test]
async fn fixtures_still_in_progress_are_ignored() {
    let in_progress = fixture("Miami Heat", "Orlando Magic", false, Vec::new());
    let engine = engine(sports(vec![in_progress]), FixedPriceProvider::new());

    let verdict = engine.evaluate(&market("5", "sport NBA Miami Heat win")).await;

    let Verdict::Indeterminate(err) = verdict else {
        panic!("expected indeterminate verdict");
    };
    assert_eq!(err.kind(), ErrorKind::NoMatch);
}

#[tokio::test]
async fn unmapped_league_is_a_lookup_failure() {
    let provider = sports(Vec::new());
    let engine = engine(provider.clone(), FixedPriceProvider::new());

    let verdict = engine.evaluate(&market("6", "sport XFL Renegades win")).await;

    let Verdict::Indeterminate(err) = verdict else {
        panic!("expected indeterminate verdict");
    };
    assert_eq!(err.kind(), ErrorKind::Lookup);
    assert!(
        provider.requests().is_empty(),
        "no provider call for unmapped leagues"
    );
}

#[tokio::test]
async fn eth_above_threshold() {
    let high = engine(
        sports(Vec::new()),
        FixedPriceProvider::new().with_price("eth", 3_500.0),
    );
    let low = engine(
        sports(Vec::new()),
        FixedPriceProvider::new().with_price("eth", 2_800.0),
    );
    let market = market("7", "crypto ETH > 3000");

    assert_eq!(high.resolve(&market).await, Outcome::Yes);
    assert_eq!(low.resolve(&market).await, Outcome::No);
}

#[tokio::test]
async fn btc_equality_uses_one_percent_band() {
    let market = market("8", "crypto BTC = 50000");
    let near = engine(
        sports(Vec::new()),
        FixedPriceProvider::new().with_price("btc", 50_400.0),
    );
    let far = engine(
        sports(Vec::new()),
        FixedPriceProvider::new().with_price("btc", 51_000.0),
    );

    assert_eq!(near.resolve(&market).await, Outcome::Yes);
    assert_eq!(far.resolve(&market).await, Outcome::No);
}

#[tokio::test]
async fn missing_price_is_no_match() {
    let engine = empty_engine();

    let verdict = engine.evaluate(&market("9", "crypto DOGE < 1")).await;

    assert_eq!(verdict.fail_closed(), Outcome::No);
    let Verdict::Indeterminate(err) = verdict else {
        panic!("expected indeterminate verdict");
    };
    assert_eq!(err.kind(), ErrorKind::NoMatch);
}

#[tokio::test]
async fn provider_errors_collapse_to_no() {
    let engine = engine(
        ScriptedSportsProvider::failing("503 from upstream"),
        FixedPriceProvider::failing("connection reset"),
    );

    for description in ["sport NBA Lakers win", "crypto ETH > 1"] {
        let verdict = engine.evaluate(&market("10", description)).await;
        let Verdict::Indeterminate(err) = &verdict else {
            panic!("expected indeterminate verdict for {description}");
        };
        assert_eq!(err.kind(), ErrorKind::Provider);
        assert_eq!(verdict.fail_closed(), Outcome::No);
    }
}

#[tokio::test(start_paused = true)]
async fn provider_timeouts_collapse_to_no() {
    let engine = engine(
        sports(vec![completed_fixture(("Lakers", "120"), ("Celtics", "100"))])
            .with_delay(Duration::from_secs(60)),
        FixedPriceProvider::new()
            .with_price("eth", 9_999.0)
            .with_delay(Duration::from_secs(60)),
    );

    assert_eq!(
        engine.resolve(&market("11", "sport NBA Lakers win")).await,
        Outcome::No
    );
    assert_eq!(
        engine.resolve(&market("12", "crypto ETH > 1")).await,
        Outcome::No
    );
}

#[tokio::test]
async fn resolving_twice_gives_the_same_outcome() {
    let engine = engine(
        sports(vec![completed_fixture(("Lakers", "110"), ("Celtics", "100"))]),
        FixedPriceProvider::new().with_price("eth", 3_500.0),
    );

    for description in ["sport NBA Lakers win", "crypto ETH > 3000", "nonsense"] {
        let market = market("13", description);
        let first = engine.evaluate(&market).await;
        let second = engine.evaluate(&market).await;
        assert_eq!(first, second, "{description}");
    }
}

#[test]
fn parser_keeps_team_casing_and_normalizes_codes() {
    let ParsedRequest::Sports(request) = DescriptionParser::parse("sport epl Manchester City win")
    else {
        panic!("expected sports request");
    };
    assert_eq!(request.league, "EPL");
    assert_eq!(request.team, "Manchester City");

    let ParsedRequest::Price(request) = DescriptionParser::parse("crypto SOL < 100") else {
        panic!("expected price request");
    };
    assert_eq!(request.asset, "sol");
}
