use crate::error::ExportError;
use core_types::TradeRecord;
use csv::WriterBuilder;
use std::io::Write;
use std::path::Path;

/// Writes the header and one row per trade to `writer`.
///
/// The header is written even when there are no trades.
pub fn write_csv<W: Write>(trades: &[TradeRecord], writer: W) -> Result<W, ExportError> {
    let mut wtr = WriterBuilder::new().has_headers(false).from_writer(writer);

    wtr.write_record(TradeRecord::FIELD_NAMES)?;
    for trade in trades {
        wtr.serialize(trade)?;
    }
    wtr.flush()?;

    wtr.into_inner().map_err(|e| ExportError::Io(e.into_error()))
}

/// The CSV download as an in-memory buffer.
pub fn to_csv_bytes(trades: &[TradeRecord]) -> Result<Vec<u8>, ExportError> {
    write_csv(trades, Vec::new())
}

/// Saves the CSV to `path`, creating missing parent directories.
pub fn export_csv(trades: &[TradeRecord], path: &Path) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = std::fs::File::create(path)?;
    write_csv(trades, file)?;

    tracing::info!(rows = trades.len(), path = %path.display(), "Trades exported to CSV.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};
    use core_types::{Direction, Emotion, Outcome, Screenshot, Strategy};
    use rust_decimal_macros::dec;

    fn sample() -> TradeRecord {
        TradeRecord {
            date: NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(),
            time: NaiveTime::from_hms_milli_opt(15, 4, 5, 250).unwrap(),
            asset: "EUR/USD".to_string(),
            direction: Direction::Short,
            entry_price: dec!(1.0850),
            exit_price: dec!(1.0801),
            position_size: dec!(-3),
            fees: dec!(2.5),
            stop_loss: dec!(1.0890),
            take_profit: dec!(1.0790),
            strategy: Strategy::NewsBased,
            rationale: "NFP miss, fade the spike".to_string(),
            outcome: Outcome::BreakEven,
            mistakes: "moved stop, twice".to_string(),
            emotions: Emotion::Overconfident,
            lessons: "respect the \"plan\"".to_string(),
            screenshot: Some(Screenshot::new("setup.png", vec![0x89, 0x50]).unwrap()),
        }
    }

    fn as_text(trades: &[TradeRecord]) -> String {
        String::from_utf8(to_csv_bytes(trades).unwrap()).unwrap()
    }

    #[test]
    fn empty_journal_exports_only_the_header() {
        assert_eq!(
            as_text(&[]),
            "date,time,asset,direction,entry_price,exit_price,position_size,fees,\
             stop_loss,take_profit,strategy,rationale,outcome,mistakes,emotions,lessons\n"
        );
    }

    #[test]
    fn row_uses_labels_and_plain_decimals() {
        let text = as_text(&[sample()]);
        let row = text.lines().nth(1).unwrap();

        assert_eq!(
            row,
            "2024-02-29,15:04:05.250,EUR/USD,Short,1.0850,1.0801,-3,2.5,1.0890,1.0790,\
             News-based,\"NFP miss, fade the spike\",Break-even,\"moved stop, twice\",\
             Overconfident,\"respect the \"\"plan\"\"\""
        );
    }

    #[test]
    fn screenshot_is_not_exported() {
        let text = as_text(&[sample()]);
        assert!(!text.contains("setup.png"));
        assert_eq!(text.lines().next().unwrap().split(',').count(), 16);
    }

    #[test]
    fn export_creates_parent_directories() {
        let dir = std::env::temp_dir().join("journal-export-test").join("nested");
        let path = dir.join("trading_journal.csv");
        std::fs::remove_dir_all(&dir).ok();

        export_csv(&[sample(), sample()], &path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(&dir).ok();

        assert_eq!(written.lines().count(), 3);
    }
}
