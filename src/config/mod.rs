mod validation;

use crate::domain::{BuildError, ConfigError, Severity};
use crate::logger::Logger;
use crate::sink::{JsonSink, Sink, TextSink};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

/// Where a sink writes its lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputTarget {
    Stdout,
    Stderr,
    File(PathBuf),
}

/// Encoding for emitted records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Encoding {
    /// One JSON object per line.
    #[default]
    Json,
    /// `"LEVEL: message"` lines.
    Text,
}

impl FromStr for Encoding {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(Encoding::Json),
            "text" | "console" => Ok(Encoding::Text),
            _ => Err(ConfigError::InvalidEncoding {
                input: s.to_string(),
            }),
        }
    }
}

/// Logger configuration.
///
/// The default is the production console setup: JSON encoding with `msg`
/// and `level` field keys and no timestamp, records below `Error` on
/// stdout, `Error` and above on stderr.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum severity emitted. Can be changed later through
    /// [`Logger::set_level`].
    pub level: Severity,
    pub encoding: Encoding,
    /// Development mode makes [`Logger::critical`] panic after emitting.
    pub development: bool,
    pub output: OutputTarget,
    pub error_output: OutputTarget,
    pub message_key: String,
    pub level_key: String,
    /// When set, the JSON encoding adds an RFC 3339 timestamp under this key.
    pub time_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            level: Severity::Info,
            encoding: Encoding::Json,
            development: false,
            output: OutputTarget::Stdout,
            error_output: OutputTarget::Stderr,
            message_key: "msg".to_string(),
            level_key: "level".to_string(),
            time_key: None,
        }
    }
}

impl Config {
    pub fn new(level: Severity) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Default configuration with overrides read from `LEVELOG_LEVEL`,
    /// `LEVELOG_ENCODING` and `LEVELOG_DEVELOPMENT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(value) = env::var("LEVELOG_LEVEL") {
            config.level = value
                .parse()
                .map_err(|e| ConfigError::Env(format!("LEVELOG_LEVEL: {e}")))?;
        }
        if let Ok(value) = env::var("LEVELOG_ENCODING") {
            config.encoding = value.parse()?;
        }
        if let Ok(value) = env::var("LEVELOG_DEVELOPMENT") {
            config.development = match value.to_lowercase().as_str() {
                "1" | "true" | "yes" => true,
                "0" | "false" | "no" => false,
                other => {
                    return Err(ConfigError::Env(format!(
                        "LEVELOG_DEVELOPMENT: expected a boolean, got '{other}'"
                    )));
                }
            };
        }
        Ok(config)
    }

    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    pub fn with_development(mut self, development: bool) -> Self {
        self.development = development;
        self
    }

    pub fn with_output(mut self, output: OutputTarget) -> Self {
        self.output = output;
        self
    }

    pub fn with_error_output(mut self, error_output: OutputTarget) -> Self {
        self.error_output = error_output;
        self
    }

    pub fn with_message_key(mut self, key: impl Into<String>) -> Self {
        self.message_key = key.into();
        self
    }

    pub fn with_level_key(mut self, key: impl Into<String>) -> Self {
        self.level_key = key.into();
        self
    }

    pub fn with_time_key(mut self, key: impl Into<String>) -> Self {
        self.time_key = Some(key.into());
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::validate(self)
    }

    /// Validates, opens the output targets and constructs a live logger.
    ///
    /// Every failure is surfaced; a misconfigured logger is never handed
    /// out silently.
    pub fn build(self) -> Result<Logger, BuildError> {
        self.validate()?;
        let sink: Box<dyn Sink> = match self.encoding {
            Encoding::Json => Box::new(JsonSink::new(&self)?),
            Encoding::Text => Box::new(TextSink::new(&self)?),
        };
        Ok(Logger::new(sink, self.level, self.development))
    }
}
