//! # Journal Trade Store
//!
//! The in-memory, append-only record of the trades logged during one session.
//!
//! - `TradeLog` is the ordered sequence itself. It only grows, and readers get a
//!   shared slice so nothing can bypass `append`.
//! - `Session` owns exactly one `TradeLog` together with the user's preferences.
//!   It is created empty at the start of a session and consumed by `end`, which
//!   discards every record. Sessions are never shared.

pub mod error;
pub mod log;
pub mod session;

pub use error::StoreError;
pub use log::TradeLog;
pub use session::{Session, SessionSummary};
