//! Models module
//!
//! Defines the logical schema model the checker validates data against:
//! tables, their ordered columns, primary-key flags and foreign-key references.
//! Models are built once by the schema importer and never mutated afterwards.

pub mod column;
pub mod schema;
pub mod table;

pub use column::{Column, ColumnKind, ForeignKey};
pub use schema::Schema;
pub use table::Table;
