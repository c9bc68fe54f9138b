//! CSV directory row source
//!
//! Implements RowSource over a directory holding one `TableName.csv` file per
//! table. The first record of each file is the header row.
//!
//! ## Security
//!
//! Table names are validated before they are turned into paths: names
//! containing path separators or ".." are rejected, so lookups stay inside
//! the base directory.

use super::{Row, RowSource, StorageError};
use std::path::{Path, PathBuf};
use tracing::debug;

/// CSV directory row source
pub struct CsvDirectory {
    base_path: PathBuf,
}

impl CsvDirectory {
    /// Create a new CSV directory row source
    ///
    /// # Example
    ///
    /// ```rust
    /// use dbms_checker::storage::CsvDirectory;
    ///
    /// let source = CsvDirectory::new("/data/export");
    /// assert!(source.table_path("Users").unwrap().ends_with("Users.csv"));
    /// ```
    pub fn new(base_path: impl AsRef<Path>) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Resolve the CSV file path of a table
    pub fn table_path(&self, table: &str) -> Result<PathBuf, StorageError> {
        if table.is_empty()
            || table.contains("..")
            || table.contains('/')
            || table.contains('\\')
        {
            return Err(StorageError::InvalidTableName(table.to_string()));
        }
        Ok(self.base_path.join(format!("{}.csv", table)))
    }
}

impl RowSource for CsvDirectory {
    fn load_rows(&self, table: &str) -> Result<Option<Vec<Row>>, StorageError> {
        let path = self.table_path(table)?;
        if !path.is_file() {
            debug!(table, path = %path.display(), "No CSV file for table");
            return Ok(None);
        }

        let csv_error = |e: csv::Error| storage_error(&path, e);

        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_path(&path)
            .map_err(csv_error)?;
        let headers = reader.headers().map_err(csv_error)?.clone();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            // Short records leave trailing columns empty; extra fields have no header and are dropped
            let row: Row = headers
                .iter()
                .enumerate()
                .map(|(i, header)| {
                    (
                        header.to_string(),
                        record.get(i).unwrap_or_default().to_string(),
                    )
                })
                .collect();
            rows.push(row);
        }

        debug!(table, rows = rows.len(), path = %path.display(), "Loaded CSV rows");
        Ok(Some(rows))
    }
}

/// I/O failures keep their own variant; everything else is a CSV format error
fn storage_error(path: &Path, err: csv::Error) -> StorageError {
    match err.kind() {
        csv::ErrorKind::Io(io) => StorageError::IoError(format!("{}: {}", path.display(), io)),
        _ => StorageError::CsvError {
            path: path.display().to_string(),
            message: err.to_string(),
        },
    }
}
