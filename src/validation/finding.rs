//! Finding: the uniform output unit of a check run

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Info,
    Warn,
    Error,
    Suggestion,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
            Level::Suggestion => "SUGGESTION",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One reported observation from a check
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub level: Level,
    /// Table the finding refers to, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<String>,
    pub message: String,
}

impl Finding {
    pub fn new(level: Level, message: impl Into<String>, table: Option<&str>) -> Self {
        Self {
            level,
            table: table.map(str::to_string),
            message: message.into(),
        }
    }

    pub fn info(table: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Info, message, Some(table))
    }

    pub fn warn(table: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Warn, message, Some(table))
    }

    pub fn error(table: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Error, message, Some(table))
    }

    pub fn suggestion(table: &str, message: impl Into<String>) -> Self {
        Self::new(Level::Suggestion, message, Some(table))
    }

    /// Table name, or `-` when the finding has no table context
    pub fn table_or_dash(&self) -> &str {
        self.table.as_deref().unwrap_or("-")
    }

    pub fn is_error(&self) -> bool {
        self.level == Level::Error
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.level, self.table_or_dash(), self.message)
    }
}

/// Number of findings per level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub info: usize,
    pub warn: usize,
    pub error: usize,
    pub suggestion: usize,
}

impl ReportSummary {
    pub fn from_findings(findings: &[Finding]) -> Self {
        findings.iter().fold(Self::default(), |mut summary, f| {
            match f.level {
                Level::Info => summary.info += 1,
                Level::Warn => summary.warn += 1,
                Level::Error => summary.error += 1,
                Level::Suggestion => summary.suggestion += 1,
            }
            summary
        })
    }

    pub fn total(&self) -> usize {
        self.info + self.warn + self.error + self.suggestion
    }

    /// Whether any ERROR finding was produced
    pub fn has_errors(&self) -> bool {
        self.error > 0
    }
}
