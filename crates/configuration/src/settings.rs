use crate::error::ConfigError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Deserialize;
use std::path::PathBuf;

/// The root configuration structure for the journal.
///
/// Every section has defaults, so an absent `journal.toml` is a valid setup.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub preferences: Preferences,
    pub advisory: Advisory,
    pub export: Export,
    pub logging: Logging,
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.advisory.loss_threshold_pct;
        if threshold < Decimal::ZERO || threshold > dec!(100) {
            return Err(ConfigError::ValidationError(format!(
                "advisory.loss_threshold_pct must be between 0 and 100, got {threshold}"
            )));
        }
        if self.export.file_name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "export.file_name must not be blank".to_string(),
            ));
        }
        Ok(())
    }
}

/// Per-user display toggles carried by a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Preferences {
    /// Selects the dark table theme when rendering.
    pub dark_mode: bool,
    /// Stored only. Nothing delivers reminders.
    pub email_reminder: bool,
}

impl Preferences {
    /// Applies command-line toggles on top of the configured values. A flag can
    /// only switch a preference on.
    pub fn with_overrides(mut self, overrides: &PreferenceOverrides) -> Self {
        self.dark_mode |= overrides.dark_mode;
        self.email_reminder |= overrides.email_reminder;
        self
    }
}

/// Preference toggles as given on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "clap", derive(clap::Args))]
pub struct PreferenceOverrides {
    /// Render tables with the dark theme.
    #[cfg_attr(feature = "clap", arg(long))]
    pub dark_mode: bool,

    /// Remember that a daily email reminder was requested.
    #[cfg_attr(feature = "clap", arg(long))]
    pub email_reminder: bool,
}

/// Parameters for the pre-trade advisory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Advisory {
    /// A category whose loss percentage is strictly above this value gets a
    /// cautionary message.
    pub loss_threshold_pct: Decimal,
}

impl Default for Advisory {
    fn default() -> Self {
        Self {
            loss_threshold_pct: dec!(50),
        }
    }
}

/// Parameters for the CSV download.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Export {
    /// File name used when `export` is given no path.
    pub file_name: String,
}

impl Default for Export {
    fn default() -> Self {
        Self {
            file_name: "trading_journal.csv".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Logging {
    /// Default filter directive when `RUST_LOG` is unset.
    pub level: String,
    /// When set, logs go to a daily-rolling file in this directory instead of stderr.
    pub directory: Option<PathBuf>,
}

impl Default for Logging {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.advisory.loss_threshold_pct, dec!(50));
        assert_eq!(config.export.file_name, "trading_journal.csv");
        assert!(!config.preferences.email_reminder);
    }

    #[test]
    fn threshold_outside_percentage_range_is_rejected() {
        let mut config = Config::default();
        config.advisory.loss_threshold_pct = dec!(120);
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn blank_export_name_is_rejected() {
        let mut config = Config::default();
        config.export.file_name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn overrides_only_switch_preferences_on() {
        let configured = Preferences {
            dark_mode: true,
            email_reminder: false,
        };
        let merged = configured.with_overrides(&PreferenceOverrides {
            dark_mode: false,
            email_reminder: true,
        });
        assert!(merged.dark_mode);
        assert!(merged.email_reminder);
    }
}
