//! Schema text import
//!
//! Parses the line-oriented schema language into a [`Schema`]. Each non-blank,
//! non-comment line declares one table:
//!
//! ```text
//! TableName(col_spec, col_spec, ...)
//! ```
//!
//! A column spec is `name(pk)`, `name(fk:RefTable.ref_column)` or a plain `name`,
//! matched in that order. Whitespace around every token is ignored.

use super::{ParseConfig, ParseError};
use crate::models::{Column, Schema, Table};
use tracing::{debug, warn};

const PK_MARKER: &str = "(pk)";
const FK_MARKER: &str = "(fk:";

/// Schema text importer
#[derive(Debug, Clone, Default)]
pub struct SchemaTextImporter {
    config: ParseConfig,
}

impl SchemaTextImporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParseConfig) -> Self {
        Self { config }
    }

    /// Parse schema text into a [`Schema`]
    ///
    /// # Errors
    ///
    /// Returns the first [`ParseError`] encountered; parsing never recovers
    /// mid-text.
    ///
    /// # Example
    ///
    /// ```rust
    /// use dbms_checker::import::SchemaTextImporter;
    ///
    /// let schema = SchemaTextImporter::new()
    ///     .parse("Users(id(pk), name, dept_id(fk:Departments.id))")
    ///     .unwrap();
    /// assert_eq!(schema.tables[0].pk_columns(), vec!["id"]);
    /// ```
    pub fn parse(&self, text: &str) -> Result<Schema, ParseError> {
        let mut schema = Schema::new();

        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_number = idx + 1;
            let table = parse_table_line(line, line_number)?;

            if self.config.reject_duplicate_tables && schema.contains_table(&table.name) {
                return Err(ParseError::DuplicateTable {
                    line_number,
                    name: table.name,
                });
            }

            debug!(
                table = %table.name,
                columns = table.columns.len(),
                line = line_number,
                "Parsed table"
            );
            let name = table.name.clone();
            if schema.add_table(table).is_some() {
                warn!(table = %name, line = line_number, "Table redefined, replacing earlier definition");
            }
        }

        Ok(schema)
    }
}

/// Parse schema text with the default [`ParseConfig`]
pub fn parse_schema_text(text: &str) -> Result<Schema, ParseError> {
    SchemaTextImporter::new().parse(text)
}

fn parse_table_line(line: &str, line_number: usize) -> Result<Table, ParseError> {
    let malformed = || ParseError::MalformedTableLine {
        line_number,
        line: line.to_string(),
    };

    let inner = line.strip_suffix(')').ok_or_else(malformed)?;
    let (name, specs) = inner.split_once('(').ok_or_else(malformed)?;
    let name = name.trim();
    if name.is_empty() {
        return Err(malformed());
    }

    let mut table = Table::new(name);
    for spec in specs.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let column = parse_column_spec(spec, line_number)?;
        if column.name.is_empty() {
            return Err(malformed());
        }
        let column_name = column.name.clone();
        if table.add_column(column).is_some() {
            warn!(table = %name, column = %column_name, line = line_number, "Column redefined, replacing earlier definition");
        }
    }

    Ok(table)
}

fn parse_column_spec(spec: &str, line_number: usize) -> Result<Column, ParseError> {
    if spec.contains(PK_MARKER) {
        return Ok(Column::primary_key(spec.replace(PK_MARKER, "").trim()));
    }

    if let Some((name, target)) = spec.split_once(FK_MARKER) {
        let malformed = || ParseError::MalformedForeignKeySpec {
            line_number,
            spec: spec.to_string(),
        };
        let target = target.trim_end_matches(')');
        let (ref_table, ref_column) = target.split_once('.').ok_or_else(malformed)?;
        let (ref_table, ref_column) = (ref_table.trim(), ref_column.trim());
        // Exactly one '.': "A.b.c" would alias the reference key of table "A.b"
        if ref_table.is_empty() || ref_column.is_empty() || ref_column.contains('.') {
            return Err(malformed());
        }
        return Ok(Column::foreign_key(name.trim(), ref_table, ref_column));
    }

    Ok(Column::new(spec))
}
