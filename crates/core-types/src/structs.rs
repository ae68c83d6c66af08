use crate::attachment::Screenshot;
use crate::enums::{Direction, Emotion, Outcome, Strategy};
use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One logged trade, built atomically from a submitted trade form.
///
/// Records are immutable once appended to a journal. `outcome` is what the
/// trader reported; it is never reconciled against the sign of
/// `exit_price - entry_price`, and the two may disagree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub asset: String,
    pub direction: Direction,
    #[serde(with = "rust_decimal::serde::str")]
    pub entry_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub exit_price: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub position_size: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub fees: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub stop_loss: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub take_profit: Decimal,
    pub strategy: Strategy,
    pub rationale: String,
    pub outcome: Outcome,
    pub mistakes: String,
    pub emotions: Emotion,
    pub lessons: String,
    #[serde(skip)]
    pub screenshot: Option<Screenshot>,
}

impl TradeRecord {
    /// Column names in declaration order, screenshot excluded.
    pub const FIELD_NAMES: [&'static str; 16] = [
        "date",
        "time",
        "asset",
        "direction",
        "entry_price",
        "exit_price",
        "position_size",
        "fees",
        "stop_loss",
        "take_profit",
        "strategy",
        "rationale",
        "outcome",
        "mistakes",
        "emotions",
        "lessons",
    ];

    /// Price move from entry to exit, ignoring direction. `None` when the
    /// difference overflows a `Decimal`.
    pub fn price_delta(&self) -> Option<Decimal> {
        self.exit_price.checked_sub(self.entry_price)
    }

    pub fn is_win(&self) -> bool {
        self.outcome == Outcome::Profit
    }
}
