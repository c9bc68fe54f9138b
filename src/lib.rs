//! DBMS Checker - validates a declared relational schema against tabular data
//!
//! Provides:
//! - A compact schema definition language and its parser
//! - Row sources (CSV directory, in-memory)
//! - Integrity checks: primary key uniqueness, foreign key existence,
//!   a first normal form heuristic and schema-level suggestions
//! - Markdown and JSON report export
//!
//! ```rust
//! use dbms_checker::{InMemoryRowSource, Level, parse_schema_text, run_checks};
//!
//! let schema = parse_schema_text("A(id(pk))\nB(id(pk), a_id(fk:A.id))").unwrap();
//! let source = InMemoryRowSource::new()
//!     .with_table("A", vec![vec![("id", "1")]])
//!     .with_table("B", vec![vec![("id", "1"), ("a_id", "2")]]);
//!
//! let findings = run_checks(&schema, Some(&source));
//! assert!(findings.iter().any(|f| f.level == Level::Error));
//! ```

pub mod export;
pub mod import;
pub mod models;
pub mod storage;
pub mod validation;

pub mod cli;

// Re-export commonly used types
pub use export::{ExportError, JsonExporter, MarkdownExporter};
pub use import::{ParseConfig, ParseError, SchemaTextImporter, parse_schema_text};
pub use models::{Column, ColumnKind, ForeignKey, Schema, Table};
pub use storage::{CsvDirectory, InMemoryRowSource, Row, RowSource, StorageError};
pub use validation::{
    CheckConfig, Checker, Finding, Level, ReferenceCache, ReportSummary, run_checks,
};
