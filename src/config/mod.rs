#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use crate::core::report::OutputFormat;
use crate::domain::model::Period;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use serde::Serialize;
use toml_config::TomlConfig;

pub const DEFAULT_INPUT: &str = "tickets.csv";
pub const DEFAULT_DESTINATION: &str = "Brazil";
pub const DEFAULT_PERIOD: Period = Period::EarlyMorning;

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Settings {
    pub input: String,
    pub destination: String,
    pub period: Period,
    pub format: OutputFormat,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.to_string(),
            destination: DEFAULT_DESTINATION.to_string(),
            period: DEFAULT_PERIOD,
            format: OutputFormat::default(),
        }
    }
}

impl Settings {
    /// Layers the TOML file over the defaults.
    pub fn from_toml(file: TomlConfig) -> Self {
        let defaults = Settings::default();
        Self {
            input: file.input.unwrap_or(defaults.input),
            destination: file.destination.unwrap_or(defaults.destination),
            period: file.period.unwrap_or(defaults.period),
            format: file.format.unwrap_or(defaults.format),
        }
    }

    /// CLI flags win over the TOML file, which wins over the defaults.
    #[cfg(feature = "cli")]
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => {
                validate_path("config", path)?;
                tracing::info!("Loading configuration from: {}", path);
                TomlConfig::from_file(path)?
            }
            None => TomlConfig::default(),
        };

        let base = Settings::from_toml(file);
        Ok(Self {
            input: cli.input.clone().unwrap_or(base.input),
            destination: cli.destination.clone().unwrap_or(base.destination),
            period: cli.period.unwrap_or(base.period),
            format: cli.format.unwrap_or(base.format),
        })
    }
}

impl Validate for Settings {
    // destination is left to the aggregator, which reports an empty one itself
    fn validate(&self) -> Result<()> {
        validate_path("input", &self.input)
    }
}
