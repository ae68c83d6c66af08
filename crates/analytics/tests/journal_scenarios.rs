//! End-to-end journal scenarios: forms go into a session, statistics and the
//! CSV download come out.

use analytics::{Advisor, AnalyticsEngine, Tone};
use chrono::{NaiveDate, NaiveDateTime};
use configuration::Preferences;
use core_types::{Emotion, Outcome, Strategy, TradeForm, TradeRecord};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use trade_store::Session;

fn now() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 4, 2)
        .unwrap()
        .and_hms_opt(11, 15, 0)
        .unwrap()
}

fn form(outcome: &str, emotion: &str, strategy: &str) -> TradeForm {
    TradeForm {
        asset: "BTC/USD".to_string(),
        direction: "Long".to_string(),
        entry_price: "100".to_string(),
        exit_price: "110".to_string(),
        position_size: "1".to_string(),
        fees: "0.25".to_string(),
        stop_loss: "95".to_string(),
        take_profit: "120".to_string(),
        strategy: strategy.to_string(),
        outcome: outcome.to_string(),
        emotions: emotion.to_string(),
        rationale: "range break on volume".to_string(),
        ..TradeForm::default()
    }
}

#[test]
fn single_winning_breakout() {
    let mut session = Session::start(Preferences::default());
    session
        .submit(form("Profit", "Calm", "Breakout"), now())
        .unwrap();

    let engine = AnalyticsEngine::new();
    let trades = session.snapshot();

    assert_eq!(engine.total_trades(trades), 1);
    assert_eq!(engine.win_rate(trades), Some(dec!(100)));
    assert_eq!(engine.average_r_multiple(trades), Some(dec!(2)));
}

#[test]
fn split_outcomes_for_one_emotion() {
    let mut session = Session::start(Preferences::default());
    session.submit(form("Profit", "Calm", "Breakout"), now()).unwrap();
    session.submit(form("Loss", "Calm", "Pullback"), now()).unwrap();

    let table = AnalyticsEngine::new().outcome_by_emotion(session.snapshot());

    assert_eq!(table.rows.len(), 1);
    assert_eq!(table.percentage(Emotion::Calm, Outcome::Profit), Some(dec!(50)));
    assert_eq!(table.percentage(Emotion::Calm, Outcome::Loss), Some(dec!(50)));
}

#[test]
fn advisory_for_an_emotion_never_logged() {
    let mut session = Session::start(Preferences::default());
    session.submit(form("Loss", "Greedy", "Breakout"), now()).unwrap();

    let engine = AnalyticsEngine::new();
    let report = engine.dashboard(session.snapshot()).unwrap();
    let advice = Advisor::default().advise(
        &report.by_emotion,
        &report.by_strategy,
        Emotion::Neutral,
        Strategy::Breakout,
    );

    assert_eq!(advice.emotion.tone, Tone::Encouraging);
    assert!(advice.emotion.text.contains("usually perform well"));
    assert_eq!(advice.strategy.tone, Tone::Caution);
}

#[test]
fn every_category_row_sums_to_one_hundred() {
    let outcomes = ["Profit", "Loss", "Break-even"];
    let emotions = ["Calm", "Neutral", "Anxious", "Overconfident", "Fearful", "Greedy"];
    let strategies = ["Breakout", "Pullback", "News-based", "Other"];

    let mut session = Session::start(Preferences::default());
    for n in 0..47 {
        let submitted = form(
            outcomes[n % outcomes.len()],
            emotions[(n * 7) % emotions.len()],
            strategies[(n * 5) % strategies.len()],
        );
        session.submit(submitted, now()).unwrap();
    }

    let engine = AnalyticsEngine::new();
    let trades = session.snapshot();
    let tolerance = dec!(0.0000001);

    for row in engine.outcome_by_emotion(trades).rows {
        let sum: Decimal = row.percentages.iter().sum();
        assert!((sum - dec!(100)).abs() < tolerance, "{:?} sums to {sum}", row.category);
    }
    for row in engine.outcome_by_strategy(trades).rows {
        let sum: Decimal = row.percentages.iter().sum();
        assert!((sum - dec!(100)).abs() < tolerance, "{:?} sums to {sum}", row.category);
    }
    assert_eq!(engine.total_trades(trades), 47);
}

#[test]
fn csv_download_parses_back_to_the_same_trades() {
    let mut session = Session::start(Preferences::default());
    session.submit(form("Profit", "Calm", "Breakout"), now()).unwrap();
    session
        .submit(
            TradeForm {
                date: "2023-12-31".to_string(),
                time: "23:59:58".to_string(),
                direction: "Short".to_string(),
                entry_price: "0.000123".to_string(),
                exit_price: "-4.5".to_string(),
                mistakes: "chased, \"again\"".to_string(),
                lessons: "line one\nline two".to_string(),
                ..form("Break-even", "Fearful", "News-based")
            },
            now(),
        )
        .unwrap();

    let bytes = export::to_csv_bytes(session.snapshot()).unwrap();
    let mut reader = csv::Reader::from_reader(bytes.as_slice());

    let headers: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_string)
        .collect();
    assert_eq!(headers, TradeRecord::FIELD_NAMES);

    let parsed: Vec<TradeRecord> = reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(parsed.len(), session.snapshot().len());
    assert_eq!(parsed.as_slice(), session.snapshot());
}
