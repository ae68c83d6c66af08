//! # Journal Core Types
//!
//! Layer 0 of the workspace: the trade record schema shared by the store, the
//! analytics engine and the CSV exporter. Nothing in here knows about sessions
//! or rendering.

pub mod attachment;
pub mod enums;
pub mod error;
pub mod form;
pub mod structs;

// Re-export the core types to provide a clean public API.
pub use attachment::{ImageFormat, Screenshot};
pub use enums::{Direction, Emotion, OptionSet, Outcome, Strategy};
pub use error::CoreError;
pub use form::TradeForm;
pub use structs::TradeRecord;
