//! CLI configuration

use serde::Deserialize;
use std::path::PathBuf;

use domain_statement::StatementFormat;

use crate::error::CliError;

/// Statement printer configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PrinterConfig {
    /// Path to the plays catalog JSON
    pub plays_path: PathBuf,
    /// Path to the invoices JSON
    pub invoices_path: PathBuf,
    /// Output format
    pub format: StatementFormat,
    /// Log level
    pub log_level: String,
}

impl Default for PrinterConfig {
    fn default() -> Self {
        Self {
            plays_path: PathBuf::from("plays.json"),
            invoices_path: PathBuf::from("invoices.json"),
            format: StatementFormat::Text,
            log_level: "info".to_string(),
        }
    }
}

impl PrinterConfig {
    /// Loads configuration from `STATEMENT_*` environment variables
    ///
    /// Unset variables keep their defaults.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_source(config::Environment::with_prefix("STATEMENT"))
    }

    /// Loads configuration from an arbitrary config source
    pub fn from_source<S>(source: S) -> Result<Self, CliError>
    where
        S: config::Source + Send + Sync + 'static,
    {
        let config = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;
        Ok(config)
    }
}

/// Values given on the command line, each replacing its environment counterpart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub plays_path: Option<PathBuf>,
    pub invoices_path: Option<PathBuf>,
    pub format: Option<StatementFormat>,
    pub log_level: Option<String>,
}

impl PrinterConfig {
    /// Applies command-line overrides; unset overrides keep the current value
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(plays_path) = overrides.plays_path {
            self.plays_path = plays_path;
        }
        if let Some(invoices_path) = overrides.invoices_path {
            self.invoices_path = invoices_path;
        }
        if let Some(format) = overrides.format {
            self.format = format;
        }
        if let Some(log_level) = overrides.log_level {
            self.log_level = log_level;
        }
        self
    }
}
