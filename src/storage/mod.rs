//! Row source abstraction
//!
//! Defines the RowSource trait the checker loads table data through:
//! - CsvDirectory: one `TableName.csv` file per table in a directory
//! - InMemoryRowSource: rows held in memory (embedding, tests)

use std::collections::HashMap;

/// One data row: column name to raw string value
///
/// A column missing from the map is treated as an empty value.
pub type Row = HashMap<String, String>;

/// Error type for row source operations
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("CSV error in {path}: {message}")]
    CsvError { path: String, message: String },
    #[error("Invalid table name for storage lookup: {0}")]
    InvalidTableName(String),
}

/// Trait for row sources
///
/// Returns `Ok(None)` when no data exists for a table. That is not an error:
/// the checker reports it and skips the data checks for that table.
pub trait RowSource {
    /// Load all rows of a table, in order
    fn load_rows(&self, table: &str) -> Result<Option<Vec<Row>>, StorageError>;
}

impl<S: RowSource + ?Sized> RowSource for &S {
    fn load_rows(&self, table: &str) -> Result<Option<Vec<Row>>, StorageError> {
        (**self).load_rows(table)
    }
}

/// Value of `column` in `row`, with a missing column read as empty
pub fn cell<'a>(row: &'a Row, column: &str) -> &'a str {
    row.get(column).map(String::as_str).unwrap_or("")
}

/// A value is null when it is absent or blank after trimming
pub fn is_null(value: &str) -> bool {
    value.trim().is_empty()
}

pub mod filesystem;
pub mod memory;

pub use filesystem::CsvDirectory;
pub use memory::InMemoryRowSource;
