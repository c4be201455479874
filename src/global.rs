//! Process-wide facade.
//!
//! One handle, installed by [`init`], read by every free function and by
//! the crate macros. Calling a logging function before [`init`] is a
//! defined no-op that drops the record; [`fatal`] still terminates because
//! a fatal call site must never continue.

use crate::config::Config;
use crate::domain::{BuildError, Severity};
use crate::logger::Logger;
use parking_lot::RwLock;
use std::fmt::Display;
use std::process;

static GLOBAL: RwLock<Option<Logger>> = RwLock::new(None);

/// Builds `config` and installs the result as the process-wide handle.
///
/// Returns the handle so callers can also thread it explicitly.
/// Re-initialization replaces the previous handle; records already emitted
/// are unaffected.
pub fn init(config: Config) -> Result<Logger, BuildError> {
    let logger = config.build()?;
    *GLOBAL.write() = Some(logger.clone());
    Ok(logger)
}

/// [`init`] with the default configuration at `level`.
pub fn init_with_level(level: Severity) -> Result<Logger, BuildError> {
    init(Config::new(level))
}

/// Clone of the installed handle, if any.
pub fn handle() -> Option<Logger> {
    GLOBAL.read().clone()
}

pub fn debug(msg: impl Display) {
    if let Some(logger) = handle() {
        logger.debug(msg);
    }
}

pub fn info(msg: impl Display) {
    if let Some(logger) = handle() {
        logger.info(msg);
    }
}

pub fn warning(msg: impl Display) {
    if let Some(logger) = handle() {
        logger.warning(msg);
    }
}

pub fn error(msg: impl Display) {
    if let Some(logger) = handle() {
        logger.error(msg);
    }
}

/// Terminates the process with exit code 1, emitting through the installed
/// handle first when there is one.
pub fn fatal(msg: impl Display) -> ! {
    match handle() {
        Some(logger) => logger.fatal(msg),
        None => process::exit(1),
    }
}

pub fn critical(msg: impl Display) {
    if let Some(logger) = handle() {
        logger.critical(msg);
    }
}

/// Dispatch on a runtime severity; `Fatal` terminates even when no handle
/// is installed.
pub fn log_at(level: Severity, msg: impl Display) {
    match handle() {
        Some(logger) => logger.log_at(level, msg),
        None if level == Severity::Fatal => process::exit(1),
        None => {}
    }
}

/// Updates the installed handle's threshold; no-op when uninstalled.
pub fn set_level(level: Severity) {
    if let Some(logger) = handle() {
        logger.set_level(level);
    }
}

pub fn current_level() -> Option<Severity> {
    handle().map(|logger| logger.current_level())
}

/// Variadic front-end over [`debug`].
#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::global::debug(::core::format_args!($($arg)*))
    };
}

/// Variadic front-end over [`info`].
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::global::info(::core::format_args!($($arg)*))
    };
}

/// Variadic front-end over [`warning`].
#[macro_export]
macro_rules! warning {
    ($($arg:tt)*) => {
        $crate::global::warning(::core::format_args!($($arg)*))
    };
}

/// Variadic front-end over [`error`].
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        $crate::global::error(::core::format_args!($($arg)*))
    };
}

/// Variadic front-end over [`fatal`]. Diverges.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)*) => {
        $crate::global::fatal(::core::format_args!($($arg)*))
    };
}

/// Variadic front-end over [`critical`].
#[macro_export]
macro_rules! critical {
    ($($arg:tt)*) => {
        $crate::global::critical(::core::format_args!($($arg)*))
    };
}

/// Variadic front-end over [`log_at`]: `log_at!(level, "...", args)`.
#[macro_export]
macro_rules! log_at {
    ($level:expr, $($arg:tt)*) => {
        $crate::global::log_at($level, ::core::format_args!($($arg)*))
    };
}
