//! Logging configuration

use super::*;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Output format of log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("Unknown log format: {}", other)),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Level filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
    /// Field names whose values are masked in log lines
    #[serde(default = "default_pii_fields")]
    pub pii_fields: Vec<String>,
    /// Replacement written in place of a masked value
    #[serde(default = "default_redaction")]
    pub redaction: String,
    /// Separator between `key=value` segments
    #[serde(default = "default_separator")]
    pub separator: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
            pii_fields: default_pii_fields(),
            redaction: default_redaction(),
            separator: default_separator(),
        }
    }
}

impl LoggingConfig {
    /// Merge logging configurations
    pub fn merge(mut self, other: Self) -> Self {
        if other.level != default_log_level() {
            self.level = other.level;
        }
        if other.format != LogFormat::default() {
            self.format = other.format;
        }
        if other.pii_fields != default_pii_fields() {
            self.pii_fields = other.pii_fields;
        }
        if other.redaction != default_redaction() {
            self.redaction = other.redaction;
        }
        if other.separator != default_separator() {
            self.separator = other.separator;
        }
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.separator.chars().count() != 1 {
            return Err(format!(
                "Log separator must be exactly one character, got '{}'",
                self.separator
            ));
        }
        if self.redaction.contains(&self.separator) {
            return Err(format!(
                "Redaction marker '{}' must not contain the separator '{}'",
                self.redaction, self.separator
            ));
        }
        Ok(())
    }
}
