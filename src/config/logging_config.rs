use crate::config::ConfigError;
use serde::Deserialize;

#[derive(Debug, Deserialize, Default, Clone)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_to_file: bool,
    pub log_file_path: String,
}

impl LoggingConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_to_file && self.log_file_path.trim().is_empty() {
            return Err(ConfigError::MissingLogFilePath);
        }
        Ok(())
    }
}
