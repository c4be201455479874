use super::Sink;
use crate::domain::{Record, Severity};

/// Forwards each record as a `tracing` event on the current subscriber.
///
/// `tracing` has no fatal or panic level: `Fatal` and `Panic` surface at
/// `ERROR` with the facade severity attached as a field.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl Sink for TracingSink {
    fn emit(&self, record: &Record) {
        // Event macros take a const level, so dispatch per variant.
        match record.severity {
            Severity::Debug => tracing::debug!("{}", record.message),
            Severity::Info => tracing::info!("{}", record.message),
            Severity::Warn => tracing::warn!("{}", record.message),
            Severity::Error => tracing::error!("{}", record.message),
            Severity::Fatal | Severity::Panic => {
                tracing::error!(severity = record.severity.as_str(), "{}", record.message);
            }
        };
    }
}
