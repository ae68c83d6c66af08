use clap::{Parser, Subcommand};
use configuration::PreferenceOverrides;
use std::path::PathBuf;

/// A personal trading journal: log discretionary trades and review how
/// emotions and strategies relate to outcomes.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive journal session. Trades live until the session ends.
    Session(SessionArgs),
    /// List the recognised options for every choice field.
    Options,
}

#[derive(Parser)]
pub struct SessionArgs {
    /// Path to the optional configuration file.
    #[arg(long, default_value = configuration::DEFAULT_CONFIG_FILE)]
    pub config: PathBuf,

    #[command(flatten)]
    pub preferences: PreferenceOverrides,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn session_flags_are_parsed() {
        let cli = Cli::parse_from(["journal", "session", "--dark-mode", "--config", "my.toml"]);
        match cli.command {
            Commands::Session(args) => {
                assert!(args.preferences.dark_mode);
                assert!(!args.preferences.email_reminder);
                assert_eq!(args.config, PathBuf::from("my.toml"));
            }
            Commands::Options => panic!("expected the session command"),
        }
    }

    #[test]
    fn config_defaults_to_journal_toml() {
        let cli = Cli::parse_from(["journal", "session"]);
        let Commands::Session(args) = cli.command else {
            panic!("expected the session command");
        };
        assert_eq!(args.config, PathBuf::from("journal.toml"));
    }
}
