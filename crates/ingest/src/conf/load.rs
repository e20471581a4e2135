//! Load — config loading from file and environment variables.

use std::path::Path;

use thiserror::Error;

use super::model::IngestConfig;

#[derive(Debug, Error)]
pub enum ConfError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl IngestConfig {
    /// Load configuration from file or environment variables
    /// Priority: Environment Variables > Config File > Defaults
    pub fn load() -> Result<Self, ConfError> {
        let config_path = std::env::var("INGEST_CONFIG_FILE")
            .unwrap_or_else(|_| "/etc/ingest/ingest.toml".to_string());

        let mut config = if Path::new(&config_path).exists() {
            tracing::info!("Loading configuration from: {}", config_path);
            Self::from_file(&config_path)?
        } else {
            tracing::info!(
                "Config file not found at {}, using environment variables",
                config_path
            );
            Self::from_env()
        };

        // Environment variables override file config
        if let Ok(root) = std::env::var("INGEST_LOGS_ROOT") {
            config.logs_root = root;
        }
        if let Ok(extension) = std::env::var("INGEST_LOG_EXTENSION") {
            config.log_extension = extension;
        }

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: &str) -> Result<Self, ConfError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfError::Read {
            path: path.to_string(),
            source,
        })?;
        toml::from_str(&contents).map_err(|source| ConfError::Parse {
            path: path.to_string(),
            source,
        })
    }

    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            logs_root: std::env::var("INGEST_LOGS_ROOT").unwrap_or_else(|_| "logs".to_string()),
            log_extension: std::env::var("INGEST_LOG_EXTENSION")
                .unwrap_or_else(|_| "log".to_string()),
        }
    }
}
