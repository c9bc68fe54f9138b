//! Column model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role a column plays in its table
///
/// A column is either plain, part of the primary key, or a foreign key.
/// The two key roles are never combined on one column.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ColumnKind {
    #[default]
    Plain,
    PrimaryKey,
    ForeignKey {
        ref_table: String,
        ref_column: String,
    },
}

/// Column model representing a declared field in a table
///
/// # Example
///
/// ```rust
/// use dbms_checker::models::Column;
///
/// let column = Column::foreign_key("dept_id", "Departments", "id");
/// assert!(column.is_foreign_key());
/// assert!(!column.is_primary_key());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Column {
    /// Column name, unique within its table
    pub name: String,
    #[serde(flatten)]
    pub kind: ColumnKind,
}

impl Column {
    /// Create a plain column
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::Plain,
        }
    }

    /// Create a primary-key column
    pub fn primary_key(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::PrimaryKey,
        }
    }

    /// Create a foreign-key column referencing `ref_table.ref_column`
    pub fn foreign_key(
        name: impl Into<String>,
        ref_table: impl Into<String>,
        ref_column: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            kind: ColumnKind::ForeignKey {
                ref_table: ref_table.into(),
                ref_column: ref_column.into(),
            },
        }
    }

    pub fn is_primary_key(&self) -> bool {
        matches!(self.kind, ColumnKind::PrimaryKey)
    }

    pub fn is_foreign_key(&self) -> bool {
        matches!(self.kind, ColumnKind::ForeignKey { .. })
    }

    /// Referenced `(table, column)` when this column is a foreign key
    pub fn foreign_key_target(&self) -> Option<(&str, &str)> {
        match &self.kind {
            ColumnKind::ForeignKey {
                ref_table,
                ref_column,
            } => Some((ref_table.as_str(), ref_column.as_str())),
            _ => None,
        }
    }
}

/// Foreign key descriptor derived from a table's columns
///
/// Not stored in the model; produced on demand by [`crate::models::Table::fks`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ForeignKey {
    /// Source table name
    pub table: String,
    /// Source column name
    pub column: String,
    /// Referenced table name
    pub ref_table: String,
    /// Referenced column name
    pub ref_column: String,
}

impl ForeignKey {
    /// Reference cache key of the referenced column (`"Table.column"`)
    pub fn ref_key(&self) -> String {
        format!("{}.{}", self.ref_table, self.ref_column)
    }
}

impl fmt::Display for ForeignKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{} -> {}.{}",
            self.table, self.column, self.ref_table, self.ref_column
        )
    }
}
