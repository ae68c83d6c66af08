use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum AnalyticsError {
    #[error("Invalid loss threshold {0}: must be a percentage between 0 and 100")]
    InvalidThreshold(Decimal),
}
