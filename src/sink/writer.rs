use crate::config::OutputTarget;
use crate::domain::{BuildError, Severity};
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};

/// Line-oriented writer over one output target.
///
/// Opening happens at build time and failures are surfaced; writes after
/// that are best-effort, logging must not fail the caller.
pub(crate) enum LineWriter {
    Stdout,
    Stderr,
    File(Mutex<File>),
}

impl LineWriter {
    pub(crate) fn open(target: &OutputTarget) -> Result<Self, BuildError> {
        match target {
            OutputTarget::Stdout => Ok(LineWriter::Stdout),
            OutputTarget::Stderr => Ok(LineWriter::Stderr),
            OutputTarget::File(path) => OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map(|file| LineWriter::File(Mutex::new(file)))
                .map_err(|source| BuildError::OpenTarget {
                    path: path.clone(),
                    source,
                }),
        }
    }

    pub(crate) fn write_line(&self, line: &str) {
        let _ = match self {
            LineWriter::Stdout => {
                let stdout = io::stdout();
                let mut lock = stdout.lock();
                writeln!(lock, "{line}").and_then(|()| lock.flush())
            }
            LineWriter::Stderr => {
                let stderr = io::stderr();
                let mut lock = stderr.lock();
                writeln!(lock, "{line}").and_then(|()| lock.flush())
            }
            LineWriter::File(file) => {
                let mut file = file.lock();
                writeln!(file, "{line}").and_then(|()| file.flush())
            }
        };
    }
}

/// Pair of writers with severity routing: records at `Error` and above go
/// to the error target, everything else to the primary target.
pub(crate) struct RoutedWriter {
    output: LineWriter,
    error_output: LineWriter,
}

impl RoutedWriter {
    pub(crate) fn open(
        output: &OutputTarget,
        error_output: &OutputTarget,
    ) -> Result<Self, BuildError> {
        Ok(Self {
            output: LineWriter::open(output)?,
            error_output: LineWriter::open(error_output)?,
        })
    }

    pub(crate) fn write_line(&self, severity: Severity, line: &str) {
        if severity >= Severity::Error {
            self.error_output.write_line(line);
        } else {
            self.output.write_line(line);
        }
    }
}
