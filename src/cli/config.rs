//! CLI configuration file
//!
//! ```toml
//! [parser]
//! reject_duplicate_tables = true
//!
//! [checks]
//! multi_value_threshold = 0.2
//! multi_value_separators = [",", ";", "|", "/"]
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use crate::cli::error::CliError;
use crate::import::ParseConfig;
use crate::validation::CheckConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Contents of a `--config` TOML file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub parser: ParseConfig,
    pub checks: CheckConfig,
}

impl CliConfig {
    pub fn from_toml_str(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load the config file, or the defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, CliError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::FileReadError(path.to_path_buf(), e.to_string()))?;
        Self::from_toml_str(&content)
            .map_err(|e| CliError::ConfigError(path.to_path_buf(), e.to_string()))
    }
}
