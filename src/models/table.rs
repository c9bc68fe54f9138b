//! Table model

use super::column::{Column, ForeignKey};
use serde::{Deserialize, Serialize};

/// A declared table with its columns in declaration order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub columns: Vec<Column>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            columns: Vec::new(),
        }
    }

    /// Add a column, replacing any column with the same name in place
    ///
    /// Returns the replaced column, if any. A replaced column keeps its
    /// original declaration position.
    pub fn add_column(&mut self, column: Column) -> Option<Column> {
        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => Some(std::mem::replace(existing, column)),
            None => {
                self.columns.push(column);
                None
            }
        }
    }

    /// Builder-style variant of [`Table::add_column`]
    pub fn with_column(mut self, column: Column) -> Self {
        self.add_column(column);
        self
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Primary-key column names in declaration order (may be empty)
    pub fn pk_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .filter(|c| c.is_primary_key())
            .map(|c| c.name.as_str())
            .collect()
    }

    pub fn has_primary_key(&self) -> bool {
        self.columns.iter().any(Column::is_primary_key)
    }

    /// Foreign keys materialized from the columns that declare a reference
    pub fn fks(&self) -> Vec<ForeignKey> {
        self.columns
            .iter()
            .filter_map(|c| {
                c.foreign_key_target()
                    .map(|(ref_table, ref_column)| ForeignKey {
                        table: self.name.clone(),
                        column: c.name.clone(),
                        ref_table: ref_table.to_string(),
                        ref_column: ref_column.to_string(),
                    })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn users() -> Table {
        Table::new("Users")
            .with_column(Column::primary_key("id"))
            .with_column(Column::new("name"))
            .with_column(Column::foreign_key("dept_id", "Departments", "id"))
    }

    #[test]
    fn test_pk_columns_in_declaration_order() {
        let table = Table::new("Enrollments")
            .with_column(Column::primary_key("student_id"))
            .with_column(Column::new("grade"))
            .with_column(Column::primary_key("course_id"));
        assert_eq!(table.pk_columns(), vec!["student_id", "course_id"]);
        assert!(table.has_primary_key());
    }

    #[test]
    fn test_fks_are_derived() {
        let fks = users().fks();
        assert_eq!(fks.len(), 1);
        assert_eq!(fks[0].table, "Users");
        assert_eq!(fks[0].column, "dept_id");
        assert_eq!(fks[0].ref_table, "Departments");
        assert_eq!(fks[0].ref_column, "id");
    }

    #[test]
    fn test_add_column_replaces_in_place() {
        let mut table = users();
        let replaced = table.add_column(Column::primary_key("name"));
        assert_eq!(replaced, Some(Column::new("name")));
        let names: Vec<_> = table.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "dept_id"]);
        assert_eq!(table.pk_columns(), vec!["id", "name"]);
    }

    #[test]
    fn test_table_without_keys() {
        let table = Table::new("Log").with_column(Column::new("line"));
        assert!(table.pk_columns().is_empty());
        assert!(!table.has_primary_key());
        assert!(table.fks().is_empty());
    }
}
