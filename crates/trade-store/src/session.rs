use crate::error::StoreError;
use crate::log::TradeLog;
use chrono::{DateTime, Local, NaiveDateTime};
use configuration::Preferences;
use core_types::{TradeForm, TradeRecord};
use uuid::Uuid;

/// One user's journal session: a private trade log plus display preferences.
///
/// A session is created per user interaction lifetime and handed by `&mut` to
/// whatever handles input. `end` consumes it, so no record outlives the session.
#[derive(Debug)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Local>,
    preferences: Preferences,
    log: TradeLog,
}

/// What remains of a session after it has ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSummary {
    pub id: Uuid,
    pub started_at: DateTime<Local>,
    pub ended_at: DateTime<Local>,
    pub trades_recorded: usize,
}

impl Session {
    /// Starts a new session with an empty trade log.
    pub fn start(preferences: Preferences) -> Self {
        let session = Self {
            id: Uuid::new_v4(),
            started_at: Local::now(),
            preferences,
            log: TradeLog::new(),
        };
        tracing::info!(session_id = %session.id, "Journal session started.");
        if preferences.email_reminder {
            tracing::debug!(
                session_id = %session.id,
                "Daily email reminder preference is stored but no reminder is ever sent."
            );
        }
        session
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Local> {
        self.started_at
    }

    pub fn preferences(&self) -> Preferences {
        self.preferences
    }

    pub fn set_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// Coerces a submitted form and appends the resulting record.
    ///
    /// Returns a copy of the record that was logged. On rejection the log is
    /// left untouched.
    pub fn submit(&mut self, form: TradeForm, now: NaiveDateTime) -> Result<TradeRecord, StoreError> {
        let record = form.submit(now).inspect_err(|e| {
            tracing::warn!(session_id = %self.id, error = %e, "Trade form rejected.");
        })?;
        self.append(record.clone());
        Ok(record)
    }

    /// Appends an already-built record.
    pub fn append(&mut self, record: TradeRecord) {
        tracing::info!(
            session_id = %self.id,
            asset = %record.asset,
            outcome = %record.outcome,
            "Trade recorded."
        );
        self.log.append(record);
    }

    pub fn log(&self) -> &TradeLog {
        &self.log
    }

    pub fn snapshot(&self) -> &[TradeRecord] {
        self.log.snapshot()
    }

    /// Tears the session down, discarding its trades.
    pub fn end(self) -> SessionSummary {
        let summary = SessionSummary {
            id: self.id,
            started_at: self.started_at,
            ended_at: Local::now(),
            trades_recorded: self.log.len(),
        };
        tracing::info!(
            session_id = %summary.id,
            trades = summary.trades_recorded,
            "Journal session ended; trade log discarded."
        );
        summary
    }
}
