use core_types::TradeRecord;

/// Append-only, insertion-ordered list of trade records.
///
/// Records cannot be edited or removed once appended.
#[derive(Debug, Clone, Default)]
pub struct TradeLog {
    records: Vec<TradeRecord>,
}

impl TradeLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record to the end of the log. Never fails and never deduplicates.
    pub fn append(&mut self, record: TradeRecord) {
        self.records.push(record);
        tracing::debug!(len = self.records.len(), "Trade appended to log.");
    }

    /// Read-only view of every record in insertion order.
    pub fn snapshot(&self) -> &[TradeRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
