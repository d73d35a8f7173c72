// src/config.rs
use crate::error::ConfigError;
use crate::timestamp::parse_locale;
use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_DATE_FORMAT: &str = "%-m/%-d/%Y";
pub const DEFAULT_TIME_FORMAT: &str = "%-I:%M:%S %p";

/// How the timestamp flag behaves once a message has been logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DatePolicy {
    /// The flag is a sticky default; single calls may override it.
    #[default]
    PerCallDefault,
    /// `with_date`/`without_date` affect the next message only, after which
    /// the flag is cleared. `include_timestamp` only applies to the first
    /// message.
    AutoReset,
}

impl FromStr for DatePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "per-call-default" | "per-call" => Ok(DatePolicy::PerCallDefault),
            "auto-reset" => Ok(DatePolicy::AutoReset),
            other => Err(ConfigError::UnknownPolicy(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimestampStyle {
    /// `<date> | <time> (<offset> <zone>)`
    #[default]
    Full,
    /// `<date> | <time>`
    Short,
}

impl FromStr for TimestampStyle {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(TimestampStyle::Full),
            "short" => Ok(TimestampStyle::Short),
            other => Err(ConfigError::UnknownStyle(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    pub include_timestamp: bool,
    pub policy: DatePolicy,
    pub style: TimestampStyle,
    /// Locale for month/day names and am/pm markers. `None` uses the host's.
    pub locale: Option<String>,
    pub date_format: String,
    pub time_format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            include_timestamp: true,
            policy: DatePolicy::default(),
            style: TimestampStyle::default(),
            locale: None,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
        }
    }
}

impl LoggerConfig {
    pub fn new(include_timestamp: bool) -> Self {
        Self {
            include_timestamp,
            ..Self::default()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(locale) = &self.locale {
            parse_locale(locale)?;
        }
        check_pattern("date_format", &self.date_format)?;
        check_pattern("time_format", &self.time_format)?;
        Ok(())
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: LoggerConfig = serde_yaml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_str(contents: &str) -> Result<Self, ConfigError> {
        let config: LoggerConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a config file, picking the parser from the file extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => Self::from_yaml_str(&contents),
            Some("json") => Self::from_json_str(&contents),
            _ => Err(ConfigError::UnsupportedExtension(path.to_path_buf())),
        }
    }
}

fn check_pattern(field: &'static str, pattern: &str) -> Result<(), ConfigError> {
    if pattern.is_empty() || StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(ConfigError::InvalidFormat {
            field,
            pattern: pattern.to_string(),
        });
    }
    Ok(())
}
