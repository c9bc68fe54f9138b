//! Import functionality
//!
//! Provides the parser for the compact schema definition language:
//!
//! ```text
//! # comment
//! Departments(id(pk), name)
//! Users(id(pk), name, dept_id(fk:Departments.id))
//! ```

pub mod schema_text;

/// Error during schema import
///
/// The first malformed line aborts the whole import; no partial schema is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Malformed table line {line_number}: {line}")]
    MalformedTableLine { line_number: usize, line: String },
    #[error("Malformed foreign key spec on line {line_number}: {spec}")]
    MalformedForeignKeySpec { line_number: usize, spec: String },
    #[error("Duplicate table '{name}' on line {line_number}")]
    DuplicateTable { line_number: usize, name: String },
}

impl ParseError {
    /// 1-based line of the schema text the error refers to
    pub fn line_number(&self) -> usize {
        match self {
            ParseError::MalformedTableLine { line_number, .. }
            | ParseError::MalformedForeignKeySpec { line_number, .. }
            | ParseError::DuplicateTable { line_number, .. } => *line_number,
        }
    }
}

/// Parser options
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ParseConfig {
    /// Fail with [`ParseError::DuplicateTable`] instead of replacing an
    /// earlier definition of the same table
    pub reject_duplicate_tables: bool,
}

impl ParseConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_reject_duplicate_tables(mut self, reject: bool) -> Self {
        self.reject_duplicate_tables = reject;
        self
    }
}

pub use schema_text::{SchemaTextImporter, parse_schema_text};
