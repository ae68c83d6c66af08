use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, SessionArgs};
use shell::Shell;
use trade_store::Session;

mod cli;
mod dashboard;
mod shell;

/// The main entry point for the trading journal.
fn main() -> anyhow::Result<()> {
    // JOURNAL__* overrides may live in a .env file; it is optional.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Session(args) => run_session(args),
        Commands::Options => {
            print!("{}", shell::options_text());
            Ok(())
        }
    }
}

/// Runs one journal session over stdin/stdout. The session, and every trade
/// logged in it, ends when this function returns.
fn run_session(args: SessionArgs) -> anyhow::Result<()> {
    let config = configuration::load_config(&args.config)
        .with_context(|| format!("could not load {}", args.config.display()))?;
    let _log_guard = configuration::init_tracing(&config.logging)?;

    let preferences = config.preferences.with_overrides(&args.preferences);
    let mut session = Session::start(preferences);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let result = Shell::new(&mut session, &config, stdin.lock(), stdout.lock())
        .and_then(|mut shell| shell.run());

    let summary = session.end();
    println!(
        "Session ended after {} trade(s). Nothing was saved.",
        summary.trades_recorded
    );

    result
}
