use crate::attachment::Screenshot;
use crate::enums::OptionSet;
use crate::error::CoreError;
use crate::structs::TradeRecord;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

/// The raw contents of the trade entry form, one string per field, exactly as
/// typed. `submit` turns it into a `TradeRecord` or rejects it whole.
#[derive(Debug, Clone, Default)]
pub struct TradeForm {
    pub date: String,
    pub time: String,
    pub asset: String,
    pub direction: String,
    pub entry_price: String,
    pub exit_price: String,
    pub position_size: String,
    pub fees: String,
    pub stop_loss: String,
    pub take_profit: String,
    pub strategy: String,
    pub rationale: String,
    pub outcome: String,
    pub mistakes: String,
    pub emotions: String,
    pub lessons: String,
    pub screenshot: Option<Screenshot>,
}

impl TradeForm {
    /// Coerces every field and builds the record.
    ///
    /// Blank fields take the defaults the entry widgets start with: `now` for
    /// the date and time, zero for numbers and the first option for choices.
    /// Only `asset` is required.
    pub fn submit(self, now: NaiveDateTime) -> Result<TradeRecord, CoreError> {
        let asset = self.asset.trim();
        if asset.is_empty() {
            return Err(CoreError::InvalidInput(
                "asset".to_string(),
                "must not be blank".to_string(),
            ));
        }

        let record = TradeRecord {
            date: parse_date(&self.date, now.date())?,
            time: parse_time(&self.time, now.time())?,
            asset: asset.to_string(),
            direction: parse_choice(&self.direction)?,
            entry_price: parse_decimal("entry_price", &self.entry_price)?,
            exit_price: parse_decimal("exit_price", &self.exit_price)?,
            position_size: parse_decimal("position_size", &self.position_size)?,
            fees: parse_decimal("fees", &self.fees)?,
            stop_loss: parse_decimal("stop_loss", &self.stop_loss)?,
            take_profit: parse_decimal("take_profit", &self.take_profit)?,
            strategy: parse_choice(&self.strategy)?,
            rationale: self.rationale.trim().to_string(),
            outcome: parse_choice(&self.outcome)?,
            mistakes: self.mistakes.trim().to_string(),
            emotions: parse_choice(&self.emotions)?,
            lessons: self.lessons.trim().to_string(),
            screenshot: self.screenshot,
        };

        tracing::debug!(asset = %record.asset, "Trade form accepted.");
        Ok(record)
    }
}

fn parse_date(raw: &str, default: NaiveDate) -> Result<NaiveDate, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| CoreError::InvalidInput("date".to_string(), format!("'{raw}': {e}")))
}

fn parse_time(raw: &str, default: NaiveTime) -> Result<NaiveTime, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(default);
    }
    NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
        .map_err(|e| CoreError::InvalidInput("time".to_string(), format!("'{raw}': {e}")))
}

fn parse_decimal(field: &str, raw: &str) -> Result<Decimal, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(Decimal::ZERO);
    }
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .map_err(|e| CoreError::InvalidInput(field.to_string(), format!("'{raw}': {e}")))
}

fn parse_choice<T>(raw: &str) -> Result<T, CoreError>
where
    T: OptionSet + FromStr<Err = CoreError>,
{
    if raw.trim().is_empty() {
        return Ok(T::first());
    }
    raw.parse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{Direction, Emotion, Outcome, Strategy};
    use rust_decimal_macros::dec;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 8)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn filled_form() -> TradeForm {
        TradeForm {
            date: "2024-03-01".to_string(),
            time: "14:05".to_string(),
            asset: " BTC/USD ".to_string(),
            direction: "short".to_string(),
            entry_price: "100".to_string(),
            exit_price: "110.25".to_string(),
            position_size: "2".to_string(),
            fees: "0.5".to_string(),
            stop_loss: "95".to_string(),
            take_profit: "120".to_string(),
            strategy: "news-based".to_string(),
            rationale: "CPI surprise".to_string(),
            outcome: "Break-even".to_string(),
            mistakes: "".to_string(),
            emotions: "Greedy".to_string(),
            lessons: "size down".to_string(),
            screenshot: None,
        }
    }

    #[test]
    fn filled_form_is_coerced_field_by_field() {
        let record = filled_form().submit(now()).unwrap();

        assert_eq!(record.date, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        assert_eq!(record.time, NaiveTime::from_hms_opt(14, 5, 0).unwrap());
        assert_eq!(record.asset, "BTC/USD");
        assert_eq!(record.direction, Direction::Short);
        assert_eq!(record.exit_price, dec!(110.25));
        assert_eq!(record.fees, dec!(0.5));
        assert_eq!(record.strategy, Strategy::NewsBased);
        assert_eq!(record.outcome, Outcome::BreakEven);
        assert_eq!(record.emotions, Emotion::Greedy);
        assert_eq!(record.mistakes, "");
    }

    #[test]
    fn blank_fields_take_widget_defaults() {
        let form = TradeForm {
            asset: "ETH".to_string(),
            ..TradeForm::default()
        };
        let record = form.submit(now()).unwrap();

        assert_eq!(record.date, now().date());
        assert_eq!(record.time, now().time());
        assert_eq!(record.direction, Direction::Long);
        assert_eq!(record.entry_price, Decimal::ZERO);
        assert_eq!(record.strategy, Strategy::Breakout);
        assert_eq!(record.outcome, Outcome::Profit);
        assert_eq!(record.emotions, Emotion::Calm);
    }

    #[test]
    fn blank_asset_is_rejected() {
        let err = TradeForm::default().submit(now()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(field, _) if field == "asset"));
    }

    #[test]
    fn malformed_number_names_the_field() {
        let form = TradeForm {
            stop_loss: "ninety".to_string(),
            ..filled_form()
        };
        let err = form.submit(now()).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(field, _) if field == "stop_loss"));
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let form = TradeForm {
            strategy: "Scalping".to_string(),
            ..filled_form()
        };
        assert!(matches!(
            form.submit(now()),
            Err(CoreError::UnknownOption { kind: "strategy", .. })
        ));
    }

    #[test]
    fn seconds_are_accepted_in_time() {
        let form = TradeForm {
            time: "14:05:30".to_string(),
            ..filled_form()
        };
        let record = form.submit(now()).unwrap();
        assert_eq!(record.time, NaiveTime::from_hms_opt(14, 5, 30).unwrap());
    }
}
