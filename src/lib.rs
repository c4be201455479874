#![deny(rust_2024_compatibility)]
// Specific pedantic lints enforced (not blanket allow):
#![deny(
    clippy::explicit_iter_loop,
    clippy::manual_let_else,
    clippy::semicolon_if_nothing_returned
)]
// Noisy pedantic lints suppressed with justification:
#![allow(
    clippy::missing_errors_doc,      // Error conditions documented on the types
    clippy::missing_panics_doc,      // Panicking entry points documented inline
    clippy::module_name_repetitions, // e.g. ConfigError in config-facing modules
    clippy::must_use_candidate       // Annotated selectively on critical APIs
)]

pub mod config;
pub mod domain;
pub mod global;
pub mod logger;
pub mod sink;

// Re-export main types for easy access
pub use config::{Config, Encoding, OutputTarget};
pub use domain::{BuildError, ConfigError, ParseLevelError, Record, Severity};
pub use global::{
    critical, current_level, debug, error, fatal, handle, info, init, init_with_level, log_at,
    set_level, warning,
};
pub use logger::Logger;
pub use sink::{JsonSink, MemorySink, Sink, TextSink, TracingSink};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
