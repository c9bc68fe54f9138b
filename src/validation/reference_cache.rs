//! Reference cache for foreign key validation
//!
//! Maps every `"Table.column"` of the schema to the distinct non-null values
//! observed in that column. Built once per check run, read-only afterwards.

use crate::models::Schema;
use crate::storage::{Row, RowSource, cell, is_null};
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};

/// Accepted values per `"Table.column"`
#[derive(Debug, Clone, Default)]
pub struct ReferenceCache {
    values: HashMap<String, HashSet<String>>,
}

impl ReferenceCache {
    /// Build the cache by loading every table of `schema` from `source`
    ///
    /// Without a source the cache is empty. A table without data, or whose
    /// rows fail to load, contributes empty sets for its columns.
    pub fn from_source(schema: &Schema, source: Option<&dyn RowSource>) -> Self {
        let Some(source) = source else {
            return Self::default();
        };

        let loaded: HashMap<&str, Vec<Row>> = schema
            .tables
            .iter()
            .map(|t| {
                let rows = match source.load_rows(&t.name) {
                    Ok(rows) => rows.unwrap_or_default(),
                    Err(e) => {
                        warn!(table = %t.name, error = %e, "Failed to load rows for reference cache");
                        Vec::new()
                    }
                };
                (t.name.as_str(), rows)
            })
            .collect();

        Self::from_loaded(schema, |table| loaded.get(table).map(Vec::as_slice))
    }

    /// Build the cache from rows that were already loaded
    ///
    /// `rows_for` returns the rows of a table, or `None` when it has no data.
    pub fn from_loaded<'a, F>(schema: &Schema, rows_for: F) -> Self
    where
        F: Fn(&str) -> Option<&'a [Row]>,
    {
        let mut values = HashMap::new();
        for table in &schema.tables {
            let rows = rows_for(&table.name).unwrap_or_default();
            for column in &table.columns {
                let accepted: HashSet<String> = rows
                    .iter()
                    .map(|row| cell(row, &column.name))
                    .filter(|v| !is_null(v))
                    .map(str::to_string)
                    .collect();
                values.insert(cache_key(&table.name, &column.name), accepted);
            }
        }

        debug!(entries = values.len(), "Built reference cache");
        Self { values }
    }

    /// Accepted values of `table.column`, if the column was cached
    pub fn accepted_values(&self, table: &str, column: &str) -> Option<&HashSet<String>> {
        self.values.get(&cache_key(table, column))
    }

    /// Whether `value` was observed in `table.column`
    ///
    /// An unknown column has no accepted values.
    pub fn contains(&self, table: &str, column: &str, value: &str) -> bool {
        self.accepted_values(table, column)
            .is_some_and(|accepted| accepted.contains(value))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

fn cache_key(table: &str, column: &str) -> String {
    format!("{}.{}", table, column)
}
