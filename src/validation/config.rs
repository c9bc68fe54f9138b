//! Configuration for the check pipeline

use serde::{Deserialize, Serialize};

/// Error for a check configuration that cannot be used
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CheckConfigError {
    #[error("multi_value_threshold must be within 0.0 - 1.0, got {0}")]
    InvalidThreshold(f64),
}

/// Configuration for the data checks
///
/// Deserialized values go through [`CheckConfig::validate`], the same as
/// builder output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CheckConfigFields")]
pub struct CheckConfig {
    /// Share of cells (0.0 - 1.0) that may contain a separator before the
    /// table is flagged as a possible 1NF violation; the comparison is strict
    pub multi_value_threshold: f64,

    /// Characters that suggest a cell holds a list of values
    pub multi_value_separators: Vec<char>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            multi_value_threshold: 0.10,
            multi_value_separators: vec![',', ';', '|'],
        }
    }
}

/// Unvalidated wire form of [`CheckConfig`]; every key is optional
#[derive(Deserialize)]
#[serde(default)]
struct CheckConfigFields {
    multi_value_threshold: f64,
    multi_value_separators: Vec<char>,
}

impl Default for CheckConfigFields {
    fn default() -> Self {
        let defaults = CheckConfig::default();
        Self {
            multi_value_threshold: defaults.multi_value_threshold,
            multi_value_separators: defaults.multi_value_separators,
        }
    }
}

impl TryFrom<CheckConfigFields> for CheckConfig {
    type Error = CheckConfigError;

    fn try_from(fields: CheckConfigFields) -> Result<Self, Self::Error> {
        let config = Self {
            multi_value_threshold: fields.multi_value_threshold,
            multi_value_separators: fields.multi_value_separators,
        };
        config.validate()?;
        Ok(config)
    }
}

impl CheckConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> CheckConfigBuilder {
        CheckConfigBuilder::default()
    }

    /// The threshold must be a number within 0.0 - 1.0 (NaN is rejected)
    pub fn validate(&self) -> Result<(), CheckConfigError> {
        if !(0.0..=1.0).contains(&self.multi_value_threshold) {
            return Err(CheckConfigError::InvalidThreshold(self.multi_value_threshold));
        }
        Ok(())
    }

    /// Whether a cell value looks multi-valued
    pub fn is_multi_valued(&self, value: &str) -> bool {
        value.contains(self.multi_value_separators.as_slice())
    }
}

/// Builder for CheckConfig
#[derive(Debug, Default)]
pub struct CheckConfigBuilder {
    config: CheckConfig,
}

impl CheckConfigBuilder {
    /// Set the 1NF threshold (0.0 - 1.0, checked by [`Self::build`])
    pub fn multi_value_threshold(mut self, threshold: f64) -> Self {
        self.config.multi_value_threshold = threshold;
        self
    }

    pub fn multi_value_separators(mut self, separators: impl IntoIterator<Item = char>) -> Self {
        self.config.multi_value_separators = separators.into_iter().collect();
        self
    }

    pub fn build(self) -> Result<CheckConfig, CheckConfigError> {
        self.config.validate()?;
        Ok(self.config)
    }
}
