use crate::core::report::OutputFormat;
use crate::domain::model::Period;
use crate::utils::error::{Result, TicketError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Every key is optional; missing keys fall back to the CLI or the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub input: Option<String>,
    pub destination: Option<String>,
    pub period: Option<Period>,
    pub format: Option<OutputFormat>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TicketError::ConfigError {
            message: format!("Failed to read config file '{}': {}", path.display(), e),
        })?;

        Self::from_str(&content)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }
}
