//! Application configuration for scale-pct

use crate::error::{Result, ScaleError};
use crate::output::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration stored in ~/.scale-pct/config.toml
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Default output format when -o is not given
    #[serde(default)]
    pub default_output: OutputFormat,

    /// Whether to use colors
    #[serde(default = "default_true")]
    pub colors: bool,
}

fn default_true() -> bool {
    true
}

/// Get the scale-pct config directory (~/.scale-pct)
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|h| h.join(".scale-pct"))
        .ok_or_else(|| ScaleError::Config("Could not determine home directory".to_string()))
}

/// Load application config from ~/.scale-pct/config.toml
pub fn load_config() -> Result<AppConfig> {
    let path = config_dir()?.join("config.toml");
    if path.exists() {
        let content = std::fs::read_to_string(&path)?;
        toml::from_str(&content).map_err(|e| ScaleError::Config(e.to_string()))
    } else {
        Ok(AppConfig::default())
    }
}
