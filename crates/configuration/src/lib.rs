use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod logging;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use logging::init_tracing;
pub use settings::{Advisory, Config, Export, Logging, PreferenceOverrides, Preferences};

/// Default location of the optional configuration file.
pub const DEFAULT_CONFIG_FILE: &str = "journal.toml";

/// Loads the journal configuration.
///
/// Reads the TOML file at `path` if it exists, then layers `JOURNAL__*`
/// environment variables on top (e.g. `JOURNAL__ADVISORY__LOSS_THRESHOLD_PCT=60`),
/// deserializes into our strongly-typed `Config` and validates it.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    let builder = config::Config::builder()
        .add_source(config::File::from(path).required(false))
        .add_source(
            config::Environment::with_prefix("JOURNAL")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config = builder.try_deserialize::<Config>()?;
    config.validate()?;

    Ok(config)
}
