//! Model — IngestConfig.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Root of the directory tree to scan for log files.
    pub logs_root: String,
    /// File extension (without the dot) that marks a candidate log file.
    pub log_extension: String,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            logs_root: "logs".to_string(),
            log_extension: "log".to_string(),
        }
    }
}

impl IngestConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.logs_root.is_empty() {
            return Err("logs_root must not be empty".to_string());
        }
        if self.log_extension.is_empty() {
            return Err("log_extension must not be empty".to_string());
        }
        if self.log_extension.starts_with('.') {
            return Err("log_extension must not include the leading dot".to_string());
        }
        Ok(())
    }
}
