use core_types::{Outcome, TradeRecord};
use rust_decimal::Decimal;
use serde::Serialize;

/// Outcome percentages for one category value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeRow<K> {
    pub category: K,
    /// Number of records in this category. Always at least one.
    pub trades: usize,
    /// Share of the category's trades per outcome, aligned with the table's
    /// `outcomes`. Sums to 100.
    pub percentages: Vec<Decimal>,
}

/// A category × outcome crosstab normalized per row.
///
/// Rows are the categories present in the data, in order of first appearance.
/// Columns are the outcomes present in the data, in order of first appearance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutcomeTable<K> {
    pub outcomes: Vec<Outcome>,
    pub rows: Vec<OutcomeRow<K>>,
}

impl<K> Default for OutcomeTable<K> {
    fn default() -> Self {
        Self {
            outcomes: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl<K: Copy + PartialEq> OutcomeTable<K> {
    /// Groups `trades` by the category `key` selects and normalizes each
    /// group's outcome counts to percentages.
    pub fn build<F>(trades: &[TradeRecord], key: F) -> Self
    where
        F: Fn(&TradeRecord) -> K,
    {
        let mut outcomes: Vec<Outcome> = Vec::new();
        let mut groups: Vec<(K, Vec<Outcome>)> = Vec::new();

        for trade in trades {
            if !outcomes.contains(&trade.outcome) {
                outcomes.push(trade.outcome);
            }
            let category = key(trade);
            match groups.iter_mut().find(|(k, _)| *k == category) {
                Some((_, members)) => members.push(trade.outcome),
                None => groups.push((category, vec![trade.outcome])),
            }
        }

        // Groups only exist once they hold a trade, so `total` is never zero.
        let rows = groups
            .into_iter()
            .map(|(category, members)| {
                let total = Decimal::from(members.len());
                let percentages = outcomes
                    .iter()
                    .map(|outcome| {
                        let count = members.iter().filter(|m| *m == outcome).count();
                        Decimal::from(count) / total * Decimal::ONE_HUNDRED
                    })
                    .collect();
                OutcomeRow {
                    category,
                    trades: members.len(),
                    percentages,
                }
            })
            .collect();

        Self { outcomes, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, category: K) -> Option<&OutcomeRow<K>> {
        self.rows.iter().find(|row| row.category == category)
    }

    /// Percentage of `category`'s trades with `outcome`.
    ///
    /// `None` when the category has no trades. An outcome that never occurs
    /// in the data reads as zero for a category that does exist.
    pub fn percentage(&self, category: K, outcome: Outcome) -> Option<Decimal> {
        let row = self.row(category)?;
        let value = self
            .outcomes
            .iter()
            .position(|o| *o == outcome)
            .map(|column| row.percentages[column])
            .unwrap_or(Decimal::ZERO);
        Some(value)
    }

    /// Loss percentage for `category`, treating an unseen category as 0%.
    pub fn loss_pct(&self, category: K) -> Decimal {
        self.percentage(category, Outcome::Loss)
            .unwrap_or(Decimal::ZERO)
    }
}
