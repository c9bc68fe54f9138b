//! In-memory row source

use super::{Row, RowSource, StorageError};
use std::collections::HashMap;

/// Row source backed by rows held in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryRowSource {
    tables: HashMap<String, Vec<Row>>,
}

impl InMemoryRowSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register rows for a table, replacing any rows already registered
    pub fn insert_table(&mut self, table: impl Into<String>, rows: Vec<Row>) {
        self.tables.insert(table.into(), rows);
    }

    /// Builder-style table registration from `(column, value)` pairs
    ///
    /// ```rust
    /// use dbms_checker::storage::{InMemoryRowSource, RowSource};
    ///
    /// let source = InMemoryRowSource::new()
    ///     .with_table("A", vec![vec![("id", "1")], vec![("id", "2")]]);
    /// assert_eq!(source.load_rows("A").unwrap().unwrap().len(), 2);
    /// assert!(source.load_rows("B").unwrap().is_none());
    /// ```
    pub fn with_table<K, V>(mut self, table: &str, rows: Vec<Vec<(K, V)>>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let rows = rows
            .into_iter()
            .map(|cells| {
                cells
                    .into_iter()
                    .map(|(k, v)| (k.into(), v.into()))
                    .collect::<Row>()
            })
            .collect();
        self.insert_table(table, rows);
        self
    }
}

impl RowSource for InMemoryRowSource {
    fn load_rows(&self, table: &str) -> Result<Option<Vec<Row>>, StorageError> {
        Ok(self.tables.get(table).cloned())
    }
}
