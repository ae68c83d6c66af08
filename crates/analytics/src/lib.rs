//! # Journal Analytics Engine
//!
//! Derives the dashboard statistics from a session's logged trades: win rate,
//! R-multiples, and outcome breakdowns by emotion and by strategy, plus the
//! pre-trade advisory built on top of those breakdowns.
//!
//! ## Architectural Principles
//!
//! - **Layer 1 Logic:** This is a pure logic crate. It depends only on
//!   `core-types` and never sees the store that owns the trades.
//! - **Stateless Calculation:** `AnalyticsEngine` takes a snapshot slice and
//!   recomputes everything from scratch. There is no incremental state to
//!   invalidate.
//! - **Typed "undefined":** divisions that can hit zero return `Option`s
//!   instead of NaN or infinities.
//!
//! ## Public API
//!
//! - `AnalyticsEngine`: the calculation entry points.
//! - `OutcomeTable`: per-category outcome percentages.
//! - `Advisor` / `Advisory`: loss-threshold messages for a planned trade.
//! - `DashboardReport`: the bundle the dashboard renders.

// Declare the modules that constitute this crate.
pub mod advisory;
pub mod engine;
pub mod error;
pub mod report;
pub mod table;

// Re-export the key components to create a clean, public-facing API.
pub use advisory::{Advisor, Advisory, AdvisoryMessage, Tone};
pub use engine::AnalyticsEngine;
pub use error::AnalyticsError;
pub use report::DashboardReport;
pub use table::{OutcomeRow, OutcomeTable};

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::{NaiveDate, NaiveTime};
    use core_types::{Direction, Emotion, Outcome, Strategy, TradeRecord};
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    pub fn trade(outcome: Outcome, emotions: Emotion, strategy: Strategy) -> TradeRecord {
        TradeRecord {
            date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            asset: "BTC/USD".to_string(),
            direction: Direction::Long,
            entry_price: dec!(100),
            exit_price: dec!(110),
            position_size: dec!(1),
            fees: dec!(0.1),
            stop_loss: dec!(95),
            take_profit: dec!(115),
            strategy,
            rationale: String::new(),
            outcome,
            mistakes: String::new(),
            emotions,
            lessons: String::new(),
            screenshot: None,
        }
    }

    pub fn priced(direction: Direction, entry: Decimal, exit: Decimal, stop: Decimal) -> TradeRecord {
        TradeRecord {
            direction,
            entry_price: entry,
            exit_price: exit,
            stop_loss: stop,
            ..trade(Outcome::Profit, Emotion::Neutral, Strategy::Other)
        }
    }
}
