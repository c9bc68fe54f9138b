//! Validation functionality
//!
//! Cross-checks a parsed schema against table data:
//! - Primary key uniqueness and non-nullness
//! - Foreign key integrity (via the reference cache)
//! - First normal form heuristic (multi-valued looking cells)
//! - Schema-level suggestions (missing primary keys, foreign key indexes)

pub mod checks;
pub mod config;
pub mod finding;
pub mod reference_cache;

pub use checks::{
    Checker, check_first_normal_form, check_foreign_key_integrity,
    check_primary_key_uniqueness, run_checks, schema_suggestions,
};
pub use config::{CheckConfig, CheckConfigBuilder, CheckConfigError};
pub use finding::{Finding, Level, ReportSummary};
pub use reference_cache::ReferenceCache;
