//! Emission backends.
//!
//! A [`Sink`] is the capability a logger needs from its backend: take a
//! finished record and get it somewhere. Console, file, in-memory and
//! tracing-forwarding implementations live here; anything else (a network
//! collector, a syslog writer) plugs in the same way without touching call
//! sites.

pub mod bridge;
pub mod json;
pub mod memory;
pub mod text;
mod writer;

pub use bridge::TracingSink;
pub use json::JsonSink;
pub use memory::MemorySink;
pub use text::TextSink;

use crate::domain::Record;
use std::sync::Arc;

/// Capability interface for record emission.
///
/// Implementations must tolerate concurrent callers; emission is
/// best-effort and must never fail the logging call site.
pub trait Sink: Send + Sync {
    fn emit(&self, record: &Record);
}

impl<S: Sink + ?Sized> Sink for Arc<S> {
    fn emit(&self, record: &Record) {
        S::emit(self, record);
    }
}
