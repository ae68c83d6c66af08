use crate::table::OutcomeTable;
use core_types::{Emotion, Strategy};
use rust_decimal::Decimal;
use serde::Serialize;

/// Everything the journal dashboard renders for a non-empty session.
///
/// This struct is the output of `AnalyticsEngine::dashboard` and is rebuilt
/// from the snapshot on every render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardReport {
    pub total_trades: usize,
    pub win_rate_pct: Option<Decimal>,

    // R-multiples
    pub average_r_multiple: Option<Decimal>, // None when every trade has stop == entry
    pub average_directional_r_multiple: Option<Decimal>,
    pub undefined_r_multiples: usize,

    // Behavioural breakdowns
    pub by_emotion: OutcomeTable<Emotion>,
    pub by_strategy: OutcomeTable<Strategy>,

    /// (record index, exit price), in insertion order.
    pub exit_prices: Vec<(usize, Decimal)>,
}
