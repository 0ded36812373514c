use std::path::{Path, PathBuf};
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

mod schema;

pub use schema::{CatalogConfig, DubrankConfig, OutputConfig, OutputFormat};

use crate::duration::{Calculator, FrameClock};

/// Default config file looked up in the working directory.
pub const CONFIG_FILE: &str = "dubrank.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadFailed {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ParseFailed(#[from] toml::de::Error),

    #[error("config validation error: {message}")]
    Validation { message: String },
}

/// Load and validate a `DubrankConfig` from a TOML file path.
///
/// Returns the default config if the file does not exist.
pub fn load_config(path: &Path) -> Result<DubrankConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(DubrankConfig::default());
    }

    let data = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
        path: path.display().to_string(),
        source: e,
    })?;

    parse_config(&data)
}

/// Parse and validate a `DubrankConfig` from a TOML string.
pub fn parse_config(data: &str) -> Result<DubrankConfig, ConfigError> {
    let config: DubrankConfig = toml::from_str(data)?;
    validate(&config)?;
    Ok(config)
}

impl DubrankConfig {
    /// Load `./dubrank.toml` if it exists, otherwise return defaults.
    pub fn load_or_default() -> Self {
        let path = PathBuf::from(CONFIG_FILE);
        match load_config(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!(%e, "failed to load {CONFIG_FILE}, falling back to defaults");
                Self::default()
            }
        }
    }
}

impl CatalogConfig {
    /// Calculator backed by the default engine at the configured frame rate.
    pub fn calculator(&self) -> Calculator {
        Calculator::new(Arc::new(FrameClock), self.frame_rate)
    }
}

fn validate(config: &DubrankConfig) -> Result<(), ConfigError> {
    let rate = config.catalog.frame_rate;
    if rate == 0 || rate > 1000 {
        return Err(ConfigError::Validation {
            message: format!("catalog.frame_rate must be 1..=1000, got {rate}"),
        });
    }

    if let Some(path) = &config.catalog.path {
        if path.trim().is_empty() {
            return Err(ConfigError::Validation {
                message: "catalog.path must not be empty".to_string(),
            });
        }
    }

    Ok(())
}
