use crate::domain::{Record, Severity};
use crate::sink::Sink;
use std::fmt::Display;
use std::process;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

struct Inner {
    sink: Box<dyn Sink>,
    threshold: AtomicU8,
    development: bool,
}

/// Shared handle over one sink and an atomic threshold cell.
///
/// Clones share the cell: [`Logger::set_level`] through any clone is
/// visible to all of them. Nothing here blocks; threshold reads on the hot
/// path are relaxed atomic loads.
#[derive(Clone)]
pub struct Logger {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.current_level())
            .field("development", &self.inner.development)
            .finish_non_exhaustive()
    }
}

impl Logger {
    /// Wraps a sink. Most callers go through [`crate::Config::build`]
    /// instead; this entry point exists so any [`Sink`] implementation can
    /// be substituted directly.
    pub fn new(sink: Box<dyn Sink>, level: Severity, development: bool) -> Self {
        Self {
            inner: Arc::new(Inner {
                sink,
                threshold: AtomicU8::new(level as u8),
                development,
            }),
        }
    }

    pub fn current_level(&self) -> Severity {
        Severity::from_index(self.inner.threshold.load(Ordering::Relaxed))
    }

    /// Whether a record at `level` would be emitted right now.
    pub fn enabled(&self, level: Severity) -> bool {
        self.current_level().admits(level)
    }

    /// Atomically updates the threshold for all clones of this handle,
    /// then announces the change at the new level. Already-emitted records
    /// are unaffected.
    pub fn set_level(&self, level: Severity) {
        self.inner.threshold.store(level as u8, Ordering::Relaxed);
        // The announcement must not go through fatal/critical dispatch:
        // changing the threshold to Fatal is not a reason to exit.
        self.emit(level, format_args!("log level changed to {level}"));
    }

    pub fn debug(&self, msg: impl Display) {
        self.emit(Severity::Debug, msg);
    }

    pub fn info(&self, msg: impl Display) {
        self.emit(Severity::Info, msg);
    }

    pub fn warning(&self, msg: impl Display) {
        self.emit(Severity::Warn, msg);
    }

    pub fn error(&self, msg: impl Display) {
        self.emit(Severity::Error, msg);
    }

    /// Emits at `Fatal` (subject to the threshold like any other record),
    /// then terminates the process with exit code 1. Termination does not
    /// depend on whether the record was admitted.
    pub fn fatal(&self, msg: impl Display) -> ! {
        self.emit(Severity::Fatal, msg);
        process::exit(1);
    }

    /// Emits at `Panic`. In development mode the call then panics with the
    /// message; in production it only logs.
    pub fn critical(&self, msg: impl Display) {
        let message = msg.to_string();
        self.emit(Severity::Panic, &message);
        if self.inner.development {
            panic!("{message}");
        }
    }

    /// Dispatch on a runtime severity. `Fatal` goes through [`Logger::fatal`]
    /// and therefore terminates; `Panic` goes through [`Logger::critical`].
    pub fn log_at(&self, level: Severity, msg: impl Display) {
        match level {
            Severity::Fatal => self.fatal(msg),
            Severity::Panic => self.critical(msg),
            other => self.emit(other, msg),
        }
    }

    fn emit(&self, level: Severity, msg: impl Display) {
        if !self.enabled(level) {
            return;
        }
        self.inner.sink.emit(&Record::new(level, msg.to_string()));
    }
}
