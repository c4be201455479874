use super::error::ParseLevelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lowercase names accepted by the strict parser, in severity order.
pub const VALID_LEVEL_NAMES: &[&str] = &["debug", "info", "warn", "error", "fatal", "panic"];

/// Severity of a log record.
///
/// One explicit total order: severity strictly increases from `Debug` to
/// `Panic`, and `Ord` follows declaration order. A threshold admits exactly
/// the records at or above it, see [`Severity::admits`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Debug,
    Info,
    Warn,
    Error,
    Fatal,
    Panic,
}

impl Severity {
    /// All severities, least to most severe.
    pub const ALL: [Severity; 6] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
        Severity::Fatal,
        Severity::Panic,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Fatal => "fatal",
            Severity::Panic => "panic",
        }
    }

    /// Uppercase literal tag used by the text encoding (`"DEBUG: ..."`).
    pub fn tag(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
            Severity::Panic => "PANIC",
        }
    }

    /// Lossy parse: case-insensitive, unrecognized input falls back to `Error`.
    pub fn from_name(name: &str) -> Severity {
        name.parse().unwrap_or(Severity::Error)
    }

    /// Whether a threshold of `self` admits a record at `record_level`.
    pub fn admits(self, record_level: Severity) -> bool {
        record_level >= self
    }

    pub(crate) fn from_index(index: u8) -> Severity {
        match index {
            0 => Severity::Debug,
            1 => Severity::Info,
            2 => Severity::Warn,
            3 => Severity::Error,
            4 => Severity::Fatal,
            _ => Severity::Panic,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(Severity::Debug),
            "info" => Ok(Severity::Info),
            "warn" | "warning" => Ok(Severity::Warn),
            "error" => Ok(Severity::Error),
            "fatal" => Ok(Severity::Fatal),
            "panic" | "critical" => Ok(Severity::Panic),
            _ => Err(ParseLevelError {
                input: s.to_string(),
                valid: VALID_LEVEL_NAMES,
            }),
        }
    }
}

/// `tracing` has no fatal or panic level: both surface at `ERROR`.
impl From<Severity> for tracing::Level {
    fn from(level: Severity) -> Self {
        match level {
            Severity::Debug => tracing::Level::DEBUG,
            Severity::Info => tracing::Level::INFO,
            Severity::Warn => tracing::Level::WARN,
            Severity::Error | Severity::Fatal | Severity::Panic => tracing::Level::ERROR,
        }
    }
}
