use analytics::{Advisory, DashboardReport, OutcomeTable, Tone};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_FULL, UTF8_FULL};
use comfy_table::{Cell, Color, ContentArrangement, Table};
use configuration::Preferences;
use core_types::{OptionSet, TradeRecord};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::fmt::Display;

const BAR_WIDTH: usize = 40;

/// Table styling picked from the dark-mode preference. Purely cosmetic.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    dark: bool,
}

impl Theme {
    pub fn from_preferences(preferences: Preferences) -> Self {
        Self {
            dark: preferences.dark_mode,
        }
    }

    fn table(&self) -> Table {
        let mut table = Table::new();
        if self.dark {
            table.load_preset(UTF8_FULL).apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(ASCII_FULL);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table
    }

    fn header(&self, text: &str) -> Cell {
        let cell = Cell::new(text);
        if self.dark { cell.fg(Color::Cyan) } else { cell }
    }
}

pub fn format_pct(value: Option<Decimal>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}%", v.round_dp(2)))
}

pub fn format_ratio(value: Option<Decimal>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{:.2}", v.round_dp(2)))
}

/// The full dashboard: metrics, price chart and both outcome breakdowns.
pub fn render_dashboard(report: &DashboardReport, theme: Theme) -> String {
    let mut out = String::new();
    out.push_str("Trade Analytics\n");
    out.push_str(&render_metrics(report, theme).to_string());
    out.push_str("\n\nExit price by trade\n");
    out.push_str(&render_exit_prices(&report.exit_prices));
    out.push_str("\nOutcome % by emotion\n");
    out.push_str(&render_outcome_table(&report.by_emotion, "Emotion", theme).to_string());
    out.push('\n');
    out.push_str(&render_outcome_bars(&report.by_emotion));
    out.push_str("\nOutcome % by strategy\n");
    out.push_str(&render_outcome_table(&report.by_strategy, "Strategy", theme).to_string());
    out.push('\n');
    out.push_str(&render_outcome_bars(&report.by_strategy));
    out
}

pub fn render_metrics(report: &DashboardReport, theme: Theme) -> Table {
    let mut table = theme.table();
    table.set_header(vec![theme.header("Metric"), theme.header("Value")]);
    table.add_row(vec!["Total Trades".to_string(), report.total_trades.to_string()]);
    table.add_row(vec!["Win Rate".to_string(), format_pct(report.win_rate_pct)]);
    table.add_row(vec![
        "Average R".to_string(),
        format_ratio(report.average_r_multiple),
    ]);
    table.add_row(vec![
        "Average R (direction-aware)".to_string(),
        format_ratio(report.average_directional_r_multiple),
    ]);
    if report.undefined_r_multiples > 0 {
        table.add_row(vec![
            "Trades without defined R".to_string(),
            report.undefined_r_multiples.to_string(),
        ]);
    }
    table
}

pub fn render_outcome_table<K: Display>(table: &OutcomeTable<K>, label: &str, theme: Theme) -> Table {
    let mut rendered = theme.table();
    let mut header = vec![theme.header(label)];
    header.extend(table.outcomes.iter().map(|o| theme.header(o.label())));
    header.push(theme.header("Trades"));
    rendered.set_header(header);

    for row in &table.rows {
        let mut cells = vec![row.category.to_string()];
        cells.extend(row.percentages.iter().map(|p| format_pct(Some(*p))));
        cells.push(row.trades.to_string());
        rendered.add_row(cells);
    }
    rendered
}

/// One horizontal bar per category and outcome, scaled so 100% fills the bar.
pub fn render_outcome_bars<K: Display>(table: &OutcomeTable<K>) -> String {
    let mut out = String::new();
    for row in &table.rows {
        for (outcome, pct) in table.outcomes.iter().zip(&row.percentages) {
            let filled = (*pct * Decimal::from(BAR_WIDTH) / Decimal::ONE_HUNDRED)
                .round()
                .to_usize()
                .unwrap_or(0);
            out.push_str(&format!(
                "{:<14}{:<11}|{:<width$}| {:.1}%\n",
                row.category.to_string(),
                outcome.to_string(),
                "#".repeat(filled),
                pct.round_dp(1),
                width = BAR_WIDTH
            ));
        }
    }
    out
}

/// Text line chart of exit price against record index, scaled between the
/// lowest and highest exit. A zero or unrepresentable range draws flat.
pub fn render_exit_prices(series: &[(usize, Decimal)]) -> String {
    let Some(min) = series.iter().map(|(_, p)| *p).min() else {
        return String::new();
    };
    let max = series.iter().map(|(_, p)| *p).max().unwrap_or(min);
    let span = max.checked_sub(min);

    let mut out = String::new();
    for (index, price) in series {
        let offset = span
            .and_then(|span| price.checked_sub(min)?.checked_div(span))
            .map(|fraction| fraction * Decimal::from(BAR_WIDTH))
            .and_then(|cells| cells.round().to_usize())
            .unwrap_or(BAR_WIDTH);
        out.push_str(&format!(
            "{index:>4} {:>width$}* {price}\n",
            "",
            width = offset
        ));
    }
    out
}

/// The session's trades in insertion order.
pub fn render_trades(trades: &[TradeRecord], theme: Theme) -> Table {
    let mut table = theme.table();
    let mut header: Vec<Cell> = vec![theme.header("#")];
    header.extend(TradeRecord::FIELD_NAMES.iter().map(|name| theme.header(name)));
    header.push(theme.header("screenshot"));
    table.set_header(header);

    for (index, t) in trades.iter().enumerate() {
        table.add_row(vec![
            index.to_string(),
            t.date.to_string(),
            t.time.format("%H:%M:%S").to_string(),
            t.asset.clone(),
            t.direction.to_string(),
            t.entry_price.to_string(),
            t.exit_price.to_string(),
            t.position_size.to_string(),
            t.fees.to_string(),
            t.stop_loss.to_string(),
            t.take_profit.to_string(),
            t.strategy.to_string(),
            t.rationale.clone(),
            t.outcome.to_string(),
            t.mistakes.clone(),
            t.emotions.to_string(),
            t.lessons.clone(),
            t.screenshot
                .as_ref()
                .map(|s| format!("{} ({}, {} bytes)", s.file_name, s.format.mime_type(), s.len()))
                .unwrap_or_default(),
        ]);
    }
    table
}

pub fn render_advisory(advisory: &Advisory) -> String {
    [&advisory.emotion, &advisory.strategy]
        .iter()
        .map(|message| match message.tone {
            Tone::Caution => format!("[!] {message}\n"),
            Tone::Encouraging => format!("[ok] {message}\n"),
        })
        .collect()
}
