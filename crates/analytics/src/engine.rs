use crate::report::DashboardReport;
use crate::table::OutcomeTable;
use core_types::{Direction, Emotion, Strategy, TradeRecord};
use rust_decimal::Decimal;

/// A stateless calculator for deriving journal statistics from logged trades.
///
/// Every method is a pure function of the slice it is given. Nothing is cached;
/// callers pass the current snapshot on every read.
#[derive(Debug, Default)]
pub struct AnalyticsEngine {}

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_trades(&self, trades: &[TradeRecord]) -> usize {
        trades.len()
    }

    /// Percentage of trades reported as `Profit`, or `None` with no trades.
    pub fn win_rate(&self, trades: &[TradeRecord]) -> Option<Decimal> {
        if trades.is_empty() {
            return None;
        }
        let wins = trades.iter().filter(|t| t.is_win()).count();
        Some(Decimal::from(wins) / Decimal::from(trades.len()) * Decimal::ONE_HUNDRED)
    }

    /// `(exit - entry) / (entry - stop_loss)` exactly as written, regardless of
    /// direction. `None` when entry equals the stop or the price differences
    /// overflow.
    ///
    /// For a Short whose stop sits below the entry, a winning trade yields a
    /// negative value. See [`AnalyticsEngine::directional_r_multiple`].
    pub fn r_multiple(&self, trade: &TradeRecord) -> Option<Decimal> {
        let risk = trade.entry_price.checked_sub(trade.stop_loss)?;
        trade.price_delta()?.checked_div(risk)
    }

    /// Direction-aware R: reward measured in the trade's favour, divided by the
    /// absolute distance from entry to stop.
    pub fn directional_r_multiple(&self, trade: &TradeRecord) -> Option<Decimal> {
        let risk = trade.entry_price.checked_sub(trade.stop_loss)?.abs();
        let reward = match trade.direction {
            Direction::Long => trade.exit_price.checked_sub(trade.entry_price)?,
            Direction::Short => trade.entry_price.checked_sub(trade.exit_price)?,
        };
        reward.checked_div(risk)
    }

    pub fn r_multiples(&self, trades: &[TradeRecord]) -> Vec<Option<Decimal>> {
        trades.iter().map(|t| self.r_multiple(t)).collect()
    }

    /// Mean literal R-multiple over the trades where it is defined.
    ///
    /// Trades with an undefined R are skipped. `None` when no trade
    /// has a defined R.
    pub fn average_r_multiple(&self, trades: &[TradeRecord]) -> Option<Decimal> {
        mean(trades.iter().filter_map(|t| self.r_multiple(t)))
    }

    pub fn average_directional_r_multiple(&self, trades: &[TradeRecord]) -> Option<Decimal> {
        mean(trades.iter().filter_map(|t| self.directional_r_multiple(t)))
    }

    /// Number of trades left out of the R averages because their R is undefined.
    pub fn undefined_r_multiples(&self, trades: &[TradeRecord]) -> usize {
        trades
            .iter()
            .filter(|t| self.r_multiple(t).is_none())
            .count()
    }

    /// Outcome percentages per value of the category `key` selects.
    pub fn outcome_by_category<K, F>(&self, trades: &[TradeRecord], key: F) -> OutcomeTable<K>
    where
        K: Copy + PartialEq,
        F: Fn(&TradeRecord) -> K,
    {
        OutcomeTable::build(trades, key)
    }

    pub fn outcome_by_emotion(&self, trades: &[TradeRecord]) -> OutcomeTable<Emotion> {
        self.outcome_by_category(trades, |t| t.emotions)
    }

    pub fn outcome_by_strategy(&self, trades: &[TradeRecord]) -> OutcomeTable<Strategy> {
        self.outcome_by_category(trades, |t| t.strategy)
    }

    /// Exit price against record index, the series behind the price chart.
    pub fn exit_price_series(&self, trades: &[TradeRecord]) -> Vec<(usize, Decimal)> {
        trades
            .iter()
            .enumerate()
            .map(|(index, t)| (index, t.exit_price))
            .collect()
    }

    /// Everything the dashboard shows, or `None` while no trade is logged.
    pub fn dashboard(&self, trades: &[TradeRecord]) -> Option<DashboardReport> {
        if trades.is_empty() {
            return None;
        }

        let undefined_r_multiples = self.undefined_r_multiples(trades);
        if undefined_r_multiples > 0 {
            tracing::warn!(
                skipped = undefined_r_multiples,
                "Trades with an undefined R-multiple were left out of the average R."
            );
        }

        let report = DashboardReport {
            total_trades: self.total_trades(trades),
            win_rate_pct: self.win_rate(trades),
            average_r_multiple: self.average_r_multiple(trades),
            average_directional_r_multiple: self.average_directional_r_multiple(trades),
            undefined_r_multiples,
            by_emotion: self.outcome_by_emotion(trades),
            by_strategy: self.outcome_by_strategy(trades),
            exit_prices: self.exit_price_series(trades),
        };
        tracing::debug!(trades = report.total_trades, "Dashboard recomputed.");
        Some(report)
    }
}

/// Arithmetic mean. `None` for an empty sequence or on overflow.
fn mean(values: impl Iterator<Item = Decimal>) -> Option<Decimal> {
    let (sum, count) = values.fold((Some(Decimal::ZERO), 0usize), |(sum, count), v| {
        (sum.and_then(|s| s.checked_add(v)), count + 1)
    });
    if count == 0 {
        return None;
    }
    sum?.checked_div(Decimal::from(count))
}
