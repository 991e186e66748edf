//! config.rs
//! Service-wide settings, loadable from JSON.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants::{DEFAULT_LEVEL, DEFAULT_MAX_DECOMPRESSED_SIZE, DEFAULT_NAME_PREFIX, DEFAULT_WINDOW_LOG},
    params::SessionParams,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Level used when a caller does not pass one.
    pub default_level: i32,

    /// Window log used when a caller does not pass one.
    pub default_window_log: i32,

    /// Ceiling on the output of any single decompression.
    pub max_decompressed_size: u64,

    /// Whether frames carry a content checksum.
    pub include_checksum: bool,

    /// Prefix for generated session names.
    pub name_prefix: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            default_level: DEFAULT_LEVEL,
            default_window_log: DEFAULT_WINDOW_LOG,
            max_decompressed_size: DEFAULT_MAX_DECOMPRESSED_SIZE,
            include_checksum: true,
            name_prefix: DEFAULT_NAME_PREFIX.to_string(),
        }
    }
}

impl ServiceConfig {
    pub fn new(level: Option<i32>, window_log: Option<i32>, max_decompressed_size: Option<u64>) -> Self {
        let defaults = Self::default();
        Self {
            default_level: level.unwrap_or(defaults.default_level),
            default_window_log: window_log.unwrap_or(defaults.default_window_log),
            max_decompressed_size: max_decompressed_size.unwrap_or(defaults.max_decompressed_size),
            ..defaults
        }
    }

    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: ServiceConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        SessionParams::new(self.default_level, self.default_window_log)
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;
        if self.max_decompressed_size == 0 {
            return Err(ConfigError::Invalid("max_decompressed_size must be non-zero".into()));
        }
        if self.name_prefix.is_empty() {
            return Err(ConfigError::Invalid("name_prefix must not be empty".into()));
        }
        Ok(())
    }

    /// Defaults as validated session parameters.
    pub fn default_params(&self) -> Result<SessionParams, ConfigError> {
        SessionParams::new(self.default_level, self.default_window_log)
            .map_err(|e| ConfigError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config = ServiceConfig::from_json_str(r#"{ "default_level": 9 }"#).unwrap();
        assert_eq!(config.default_level, 9);
        assert_eq!(config.default_window_log, DEFAULT_WINDOW_LOG);
        assert!(config.include_checksum);
    }

    #[test]
    fn out_of_range_default_is_rejected() {
        let err = ServiceConfig::from_json_str(r#"{ "default_window_log": 40 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn zero_ceiling_is_rejected() {
        let config = ServiceConfig::new(None, None, Some(0));
        assert!(config.validate().is_err());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = ServiceConfig::from_json_str("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
