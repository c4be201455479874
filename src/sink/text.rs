use super::Sink;
use super::writer::RoutedWriter;
use crate::config::Config;
use crate::domain::{BuildError, Record};

/// Line-oriented encoding: an uppercase level tag followed by the message,
/// `"DEBUG: starting up"`.
pub struct TextSink {
    writer: RoutedWriter,
}

impl TextSink {
    pub fn new(config: &Config) -> Result<Self, BuildError> {
        Ok(Self {
            writer: RoutedWriter::open(&config.output, &config.error_output)?,
        })
    }

    fn render(record: &Record) -> String {
        format!("{}: {}", record.severity.tag(), record.message)
    }
}

impl Sink for TextSink {
    fn emit(&self, record: &Record) {
        self.writer.write_line(record.severity, &Self::render(record));
    }
}
