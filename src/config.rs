//! Configuration management

use anyhow::Result;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use timeline_render::DisplayOptions;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Figure size must be positive, got ({width}, {height})")]
    InvalidFigsize { width: f64, height: f64 },

    #[error("Log filter must not be empty")]
    EmptyLogFilter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LapwatchConfig {
    pub auto_start: bool,
    pub log_filter: String,
    pub display: DisplayOptions,
}

impl Default for LapwatchConfig {
    fn default() -> Self {
        Self {
            auto_start: true,
            log_filter: "info".to_string(),
            display: DisplayOptions::default(),
        }
    }
}

impl LapwatchConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: LapwatchConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        let (width, height) = self.display.figsize;
        if !(width > 0.0 && height > 0.0) {
            return Err(ConfigError::InvalidFigsize { width, height });
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::EmptyLogFilter);
        }
        Ok(())
    }
}
