use super::Config;
use crate::domain::ConfigError;

/// Rejects encoder key sets the JSON encoding cannot represent: empty keys
/// and keys used for more than one field.
pub(super) fn validate(config: &Config) -> Result<(), ConfigError> {
    if config.message_key.is_empty() {
        return Err(ConfigError::EmptyEncoderKey { field: "message" });
    }
    if config.level_key.is_empty() {
        return Err(ConfigError::EmptyEncoderKey { field: "level" });
    }
    if let Some(time_key) = &config.time_key {
        if time_key.is_empty() {
            return Err(ConfigError::EmptyEncoderKey { field: "time" });
        }
    }

    let mut keys = vec![&config.message_key, &config.level_key];
    if let Some(time_key) = &config.time_key {
        keys.push(time_key);
    }
    keys.sort();
    for pair in keys.windows(2) {
        if pair[0] == pair[1] {
            return Err(ConfigError::DuplicateEncoderKey {
                key: pair[0].clone(),
            });
        }
    }

    Ok(())
}
