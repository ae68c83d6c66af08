use crate::dashboard::{self, Theme};
use analytics::{Advisor, AnalyticsEngine};
use anyhow::{Context, anyhow, bail};
use chrono::Local;
use configuration::Config;
use core_types::{Direction, Emotion, OptionSet, Outcome, Screenshot, Strategy, TradeForm};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};
use trade_store::Session;

const HELP: &str = "\
Commands:
  add                          log a trade (prompts for every field)
  list                         show every logged trade
  dashboard [--json]           show analytics for this session
  export [path]                save the trades as CSV
  advise <emotion> <strategy>  check how this emotion and strategy usually go
  settings                     show display preferences
  set <dark-mode|email-reminder> <on|off>
  help                         show this help
  quit                         end the session (trades are discarded)";

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Add,
    List,
    Dashboard { json: bool },
    Export(Option<PathBuf>),
    Advise(Emotion, Strategy),
    Settings,
    Set(Toggle, bool),
    Help,
    Quit,
    Nothing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Toggle {
    DarkMode,
    EmailReminder,
}

fn parse_command(line: &str) -> anyhow::Result<Command> {
    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(Command::Nothing);
    };
    if verb.eq_ignore_ascii_case("export") {
        // The path is the rest of the line, spaces included.
        let path = line.trim_start()[verb.len()..].trim();
        return Ok(Command::Export((!path.is_empty()).then(|| PathBuf::from(path))));
    }
    let args: Vec<&str> = words.collect();

    let command = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("add", []) => Command::Add,
        ("list", []) => Command::List,
        ("dashboard", []) => Command::Dashboard { json: false },
        ("dashboard", ["--json"]) => Command::Dashboard { json: true },
        ("advise", [emotion, strategy]) => Command::Advise(emotion.parse()?, strategy.parse()?),
        ("settings", []) => Command::Settings,
        ("set", [name, value]) => {
            let toggle = match *name {
                "dark-mode" => Toggle::DarkMode,
                "email-reminder" => Toggle::EmailReminder,
                other => bail!("unknown setting '{other}'"),
            };
            let enabled = match *value {
                "on" | "true" => true,
                "off" | "false" => false,
                other => bail!("expected on or off, got '{other}'"),
            };
            Command::Set(toggle, enabled)
        }
        ("help", _) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        _ => bail!("unrecognised command '{}', type help for a list", line.trim()),
    };
    Ok(command)
}

/// The interactive front end of one journal session.
///
/// Reads commands from `input` and writes everything the user sees to
/// `output`. A failing command is reported and the session carries on.
pub struct Shell<'a, R, W> {
    session: &'a mut Session,
    config: &'a Config,
    engine: AnalyticsEngine,
    advisor: Advisor,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Shell<'a, R, W> {
    pub fn new(session: &'a mut Session, config: &'a Config, input: R, output: W) -> anyhow::Result<Self> {
        let advisor = Advisor::new(config.advisory.loss_threshold_pct)?;
        Ok(Self {
            session,
            config,
            engine: AnalyticsEngine::new(),
            advisor,
            input,
            output,
        })
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> anyhow::Result<()> {
        writeln!(self.output, "Trading Journal. Type help for commands.")?;
        loop {
            let Some(line) = self.prompt("journal> ")? else {
                break;
            };
            let command = match parse_command(&line) {
                Ok(command) => command,
                Err(e) => {
                    writeln!(self.output, "error: {e}")?;
                    continue;
                }
            };
            if command == Command::Quit {
                break;
            }
            if let Err(e) = self.execute(command) {
                tracing::warn!(error = %e, "Command failed.");
                writeln!(self.output, "error: {e:#}")?;
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> anyhow::Result<()> {
        match command {
            Command::Add => self.add_trade(),
            Command::List => self.list(),
            Command::Dashboard { json } => self.dashboard(json),
            Command::Export(path) => self.export(path),
            Command::Advise(emotion, strategy) => self.advise(emotion, strategy),
            Command::Settings => self.settings(),
            Command::Set(toggle, enabled) => {
                let mut preferences = self.session.preferences();
                match toggle {
                    Toggle::DarkMode => preferences.dark_mode = enabled,
                    Toggle::EmailReminder => preferences.email_reminder = enabled,
                }
                self.session.set_preferences(preferences);
                self.settings()
            }
            Command::Help => Ok(writeln!(self.output, "{HELP}")?),
            Command::Quit | Command::Nothing => Ok(()),
        }
    }

    /// Writes `label`, then reads one line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn field(&mut self, label: &str) -> anyhow::Result<String> {
        self.prompt(label)?
            .ok_or_else(|| anyhow!("input ended before the trade form was complete; trade discarded"))
    }

    fn add_trade(&mut self) -> anyhow::Result<()> {
        let form = TradeForm {
            date: self.field("Date (YYYY-MM-DD, blank for today): ")?,
            time: self.field("Time (HH:MM[:SS], blank for now): ")?,
            asset: self.field("Asset (e.g., BTC/USD): ")?,
            direction: self.field(&choice_label::<Direction>("Direction"))?,
            entry_price: self.field("Entry Price: ")?,
            exit_price: self.field("Exit Price: ")?,
            position_size: self.field("Position Size: ")?,
            fees: self.field("Fees: ")?,
            stop_loss: self.field("Stop Loss: ")?,
            take_profit: self.field("Take Profit: ")?,
            strategy: self.field(&choice_label::<Strategy>("Strategy Used"))?,
            rationale: self.field("Trade Rationale: ")?,
            screenshot: self.screenshot()?,
            outcome: self.field(&choice_label::<Outcome>("Outcome"))?,
            mistakes: self.field("Mistakes Made: ")?,
            emotions: self.field(&choice_label::<Emotion>("Emotions Felt"))?,
            lessons: self.field("Lessons Learned: ")?,
        };

        self.session.submit(form, Local::now().naive_local())?;
        writeln!(self.output, "Trade added!")?;
        Ok(())
    }

    fn screenshot(&mut self) -> anyhow::Result<Option<Screenshot>> {
        let path = self.field("Pre-Trade Screenshot path (optional, PNG/JPEG): ")?;
        let path = path.trim();
        if path.is_empty() {
            return Ok(None);
        }
        Ok(Some(load_screenshot(Path::new(path))?))
    }

    fn list(&mut self) -> anyhow::Result<()> {
        let trades = self.session.snapshot();
        if trades.is_empty() {
            writeln!(self.output, "No trades logged yet.")?;
            return Ok(());
        }
        let table = dashboard::render_trades(trades, self.theme());
        writeln!(self.output, "{table}")?;
        Ok(())
    }

    fn dashboard(&mut self, json: bool) -> anyhow::Result<()> {
        let Some(report) = self.engine.dashboard(self.session.snapshot()) else {
            writeln!(self.output, "No trades logged yet.")?;
            return Ok(());
        };
        if json {
            writeln!(self.output, "{}", serde_json::to_string_pretty(&report)?)?;
        } else {
            let rendered = dashboard::render_dashboard(&report, self.theme());
            write!(self.output, "{rendered}")?;
        }
        Ok(())
    }

    fn export(&mut self, path: Option<PathBuf>) -> anyhow::Result<()> {
        let path = path.unwrap_or_else(|| PathBuf::from(&self.config.export.file_name));
        let trades = self.session.snapshot();
        export::export_csv(trades, &path)
            .with_context(|| format!("could not export to {}", path.display()))?;
        writeln!(self.output, "Exported {} trades to {}", trades.len(), path.display())?;
        Ok(())
    }

    fn advise(&mut self, emotion: Emotion, strategy: Strategy) -> anyhow::Result<()> {
        let trades = self.session.snapshot();
        let advisory = self.advisor.advise(
            &self.engine.outcome_by_emotion(trades),
            &self.engine.outcome_by_strategy(trades),
            emotion,
            strategy,
        );
        write!(self.output, "{}", dashboard::render_advisory(&advisory))?;
        Ok(())
    }

    fn settings(&mut self) -> anyhow::Result<()> {
        let preferences = self.session.preferences();
        writeln!(self.output, "dark-mode: {}", on_off(preferences.dark_mode))?;
        writeln!(
            self.output,
            "email-reminder: {} (stored only, no reminders are sent)",
            on_off(preferences.email_reminder)
        )?;
        Ok(())
    }

    fn theme(&self) -> Theme {
        Theme::from_preferences(self.session.preferences())
    }
}

fn choice_label<T: OptionSet>(name: &str) -> String {
    let options: Vec<&str> = T::ALL.iter().map(|o| o.label()).collect();
    format!("{name} [{}]: ", options.join("/"))
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}

fn load_screenshot(path: &Path) -> anyhow::Result<Screenshot> {
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| anyhow!("'{}' is not a file path", path.display()))?;
    // Check the extension before reading the file.
    Screenshot::new(file_name, Vec::new())?;
    let bytes = std::fs::read(path)
        .with_context(|| format!("could not read screenshot {}", path.display()))?;
    Ok(Screenshot::new(file_name, bytes)?)
}

/// Lists the options every choice field accepts.
pub fn options_text() -> String {
    [
        choice_label::<Direction>("Direction"),
        choice_label::<Strategy>("Strategy"),
        choice_label::<Outcome>("Outcome"),
        choice_label::<Emotion>("Emotions"),
    ]
    .iter()
    .map(|line| format!("{}\n", line.trim_end_matches(": ")))
    .collect()
}
