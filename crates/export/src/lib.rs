//! # Journal Export
//!
//! Renders a session's trades as comma-separated values: one header row naming
//! the record fields in declaration order, then one row per trade in insertion
//! order. Screenshots are not exported.

pub mod csv_export;
pub mod error;

pub use csv_export::{export_csv, to_csv_bytes, write_csv};
pub use error::ExportError;
