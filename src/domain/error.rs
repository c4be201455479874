use std::path::PathBuf;
use thiserror::Error;

/// Strict severity parse failure. The lossy path is [`super::Severity::from_name`].
#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid log level '{input}', valid levels: {valid:?}")]
pub struct ParseLevelError {
    pub input: String,
    pub valid: &'static [&'static str],
}

/// Configuration validation failure.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid encoding '{input}', valid encodings: json, text")]
    InvalidEncoding { input: String },

    #[error("encoder key for {field} must not be empty")]
    EmptyEncoderKey { field: &'static str },

    #[error("encoder keys must be distinct: '{key}' is used more than once")]
    DuplicateEncoderKey { key: String },

    #[error("environment error: {0}")]
    Env(String),
}

/// Failure to turn a [`crate::Config`] into a live logger.
///
/// Always surfaced to the caller; a logger is never handed out half-built.
#[derive(Error, Debug)]
pub enum BuildError {
    #[error("configuration validation failed: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to open log output {path:?}")]
    OpenTarget {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
