use super::Sink;
use super::writer::RoutedWriter;
use crate::config::Config;
use crate::domain::{BuildError, Record};
use serde_json::Value;

/// One JSON object per line, field keys taken from the encoder config
/// (defaults `"msg"` and `"level"`). A timestamp field is written only when
/// a time key is configured, as RFC 3339.
pub struct JsonSink {
    message_key: String,
    level_key: String,
    time_key: Option<String>,
    writer: RoutedWriter,
}

impl JsonSink {
    pub fn new(config: &Config) -> Result<Self, BuildError> {
        Ok(Self {
            message_key: config.message_key.clone(),
            level_key: config.level_key.clone(),
            time_key: config.time_key.clone(),
            writer: RoutedWriter::open(&config.output, &config.error_output)?,
        })
    }

    fn encode(&self, record: &Record) -> String {
        let mut object = serde_json::Map::new();
        object.insert(
            self.level_key.clone(),
            Value::String(record.severity.as_str().to_string()),
        );
        object.insert(
            self.message_key.clone(),
            Value::String(record.message.clone()),
        );
        if let Some(time_key) = &self.time_key {
            object.insert(
                time_key.clone(),
                Value::String(record.timestamp.to_rfc3339()),
            );
        }
        Value::Object(object).to_string()
    }
}

impl Sink for JsonSink {
    fn emit(&self, record: &Record) {
        let line = self.encode(record);
        self.writer.write_line(record.severity, &line);
    }
}
