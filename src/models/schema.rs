//! Schema model

use super::table::Table;
use serde::{Deserialize, Serialize};

/// All declared tables, in declaration order
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table, replacing any table with the same name in place
    ///
    /// Returns the replaced table so callers can decide whether a
    /// redefinition is acceptable.
    pub fn add_table(&mut self, table: Table) -> Option<Table> {
        match self.tables.iter_mut().find(|t| t.name == table.name) {
            Some(existing) => Some(std::mem::replace(existing, table)),
            None => {
                self.tables.push(table);
                None
            }
        }
    }

    pub fn table(&self, name: &str) -> Option<&Table> {
        self.tables.iter().find(|t| t.name == name)
    }

    pub fn contains_table(&self, name: &str) -> bool {
        self.table(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    #[test]
    fn test_add_table_keeps_order() {
        let mut schema = Schema::new();
        schema.add_table(Table::new("B"));
        schema.add_table(Table::new("A"));
        let names: Vec<_> = schema.tables.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
        assert_eq!(schema.len(), 2);
    }

    #[test]
    fn test_duplicate_table_replaces_prior_entry() {
        let mut schema = Schema::new();
        assert!(schema.add_table(Table::new("A")).is_none());
        schema.add_table(Table::new("B"));

        let replaced = schema.add_table(Table::new("A").with_column(Column::primary_key("id")));
        assert_eq!(replaced, Some(Table::new("A")));
        assert_eq!(schema.len(), 2);
        assert_eq!(schema.tables[0].name, "A");
        assert_eq!(schema.table("A").unwrap().pk_columns(), vec!["id"]);
    }

    #[test]
    fn test_lookup_missing_table() {
        let schema = Schema::new();
        assert!(schema.is_empty());
        assert!(!schema.contains_table("Nope"));
    }
}
