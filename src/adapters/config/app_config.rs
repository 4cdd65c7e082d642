use std::path::PathBuf;

use config::Config;
use error_stack::{report, ResultExt};
use serde::{Deserialize, Deserializer};
use serde_path_to_error::{Deserializer as PathDeserializer, Segment, Track};
use thiserror::Error;

use super::sheets_config::SpreadsheetConfig;

pub const CONFIG_PATH_ENV_VAR: &str = "CONFIG_PATH";
pub const DEFAULT_CONFIG_PATH: &str = "Config";
/// `FORWARDER__SHEETS__WORKSHEET=Responses` overrides `sheets.worksheet`.
pub const ENV_PREFIX: &str = "FORWARDER";

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub sheets: SpreadsheetConfig,
    #[serde(default)]
    pub forwarder: ForwarderConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct ForwarderConfig {
    /// Serialize submissions that target the same spreadsheet.
    #[serde(default)]
    pub serialize_per_spreadsheet: bool,
}

#[derive(serde::Deserialize, Debug, Clone)]
pub struct LoggingConfig {
    #[serde(default)]
    pub file: Option<PathBuf>,
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: None,
            level: default_level(),
        }
    }
}

impl LoggingConfig {
    pub fn level(&self) -> tracing::Level {
        self.level.parse().unwrap_or(tracing::Level::INFO)
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error reading config file '{0}'")]
    ReadFailed(String),
    #[error("Failed to deserialize config, field path: {0}")]
    InvalidField(String),
}

impl AppConfig {
    /// Reads the file named by `CONFIG_PATH` (default `Config`), layered with
    /// `FORWARDER__*` environment variables. A missing file means defaults.
    pub fn load() -> error_stack::Result<Self, ConfigError> {
        let config_path =
            std::env::var(CONFIG_PATH_ENV_VAR).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &str) -> error_stack::Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(environment())
            .build()
            .change_context_lazy(|| ConfigError::ReadFailed(config_path.to_string()))?;

        Self::from_config(config)
            .attach_printable_lazy(|| format!("Config file: {}", config_path))
    }

    /// Environment values stay strings until a field asks for a type, so
    /// `FORWARDER__SHEETS__WORKSHEET=2024` names a worksheet and `"true"` still enables a flag.
    pub fn from_config(config: Config) -> error_stack::Result<Self, ConfigError> {
        let value = config
            .try_deserialize::<config::Value>()
            .change_context(ConfigError::InvalidField(String::from("<root>")))?;

        Self::from_value(value)
    }

    pub fn from_value<'de, D>(value: D) -> error_stack::Result<Self, ConfigError>
    where
        D: Deserializer<'de>,
    {
        let mut track = Track::new();
        let path_de = PathDeserializer::new(value, &mut track);
        AppConfig::deserialize(path_de).map_err(|e| {
            let path_str = track
                .path()
                .iter()
                .map(|seg| match seg {
                    Segment::Seq { index } => format!("[{}]", index),
                    Segment::Map { key } => format!(".{}", key),
                    Segment::Enum { variant } => format!("::{}", variant),
                    Segment::Unknown => String::from("<?>"),
                })
                .collect::<String>();
            report!(ConfigError::InvalidField(
                path_str.trim_start_matches('.').to_string()
            ))
            .attach_printable(e.to_string())
        })
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX).separator("__")
}
