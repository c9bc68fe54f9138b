//! Check pipeline
//!
//! Walks the schema in declaration order and produces a flat list of
//! [`Finding`]s per table:
//!
//! 1. schema-level suggestions (always emitted)
//! 2. data availability
//! 3. primary key uniqueness
//! 4. foreign key integrity
//! 5. first normal form heuristic
//!
//! Data problems never fail the run; they are reported as findings.

use super::config::CheckConfig;
use super::finding::{Finding, Level, ReportSummary};
use super::reference_cache::ReferenceCache;
use crate::models::{Schema, Table};
use crate::storage::{Row, RowSource, StorageError, cell, is_null};
use std::collections::HashSet;
use tracing::{debug, info, info_span, warn};

/// Outcome of loading one table's rows
enum TableData {
    Rows(Vec<Row>),
    Missing,
    Failed(StorageError),
}

impl TableData {
    fn rows(&self) -> Option<&[Row]> {
        match self {
            TableData::Rows(rows) => Some(rows.as_slice()),
            _ => None,
        }
    }
}

/// Runs all checks of a schema against a row source
#[derive(Debug, Clone, Default)]
pub struct Checker {
    config: CheckConfig,
}

impl Checker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CheckConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Run every check and return the findings in report order
    ///
    /// Each table's rows are loaded once. The reference cache is built from
    /// all loaded tables before any foreign key is checked, since a key may
    /// reference a table declared later.
    pub fn run(&self, schema: &Schema, source: Option<&dyn RowSource>) -> Vec<Finding> {
        let loaded: Vec<TableData> = schema
            .tables
            .iter()
            .map(|table| match source {
                None => TableData::Missing,
                Some(source) => match source.load_rows(&table.name) {
                    Ok(Some(rows)) => TableData::Rows(rows),
                    Ok(None) => TableData::Missing,
                    Err(e) => {
                        warn!(table = %table.name, error = %e, "Failed to load rows");
                        TableData::Failed(e)
                    }
                },
            })
            .collect();

        let cache = ReferenceCache::from_loaded(schema, |name| {
            schema
                .tables
                .iter()
                .position(|t| t.name == name)
                .and_then(|idx| loaded[idx].rows())
        });

        let mut findings = Vec::new();
        for (table, data) in schema.tables.iter().zip(&loaded) {
            let _span = info_span!("check_table", table = %table.name).entered();

            findings.extend(schema_suggestions(table));

            let rows = match data {
                TableData::Rows(rows) => rows,
                TableData::Missing => {
                    findings.push(Finding::warn(
                        &table.name,
                        format!(
                            "No data found for table {}; data checks skipped",
                            table.name
                        ),
                    ));
                    continue;
                }
                TableData::Failed(e) => {
                    findings.push(Finding::warn(
                        &table.name,
                        format!(
                            "Could not read data for table {}: {}; data checks skipped",
                            table.name, e
                        ),
                    ));
                    continue;
                }
            };

            debug!(rows = rows.len(), "Checking table data");
            findings.extend(check_primary_key_uniqueness(table, rows));
            findings.extend(check_foreign_key_integrity(table, rows, &cache));
            findings.push(check_first_normal_form(table, rows, &self.config));
        }

        let summary = ReportSummary::from_findings(&findings);
        info!(
            tables = schema.len(),
            errors = summary.error,
            warnings = summary.warn,
            suggestions = summary.suggestion,
            "Checks complete"
        );
        findings
    }
}

/// Run all checks with the default [`CheckConfig`]
pub fn run_checks(schema: &Schema, source: Option<&dyn RowSource>) -> Vec<Finding> {
    Checker::new().run(schema, source)
}

/// Schema-level suggestions, independent of any data
pub fn schema_suggestions(table: &Table) -> Vec<Finding> {
    let mut out = Vec::new();
    if !table.has_primary_key() {
        out.push(Finding::suggestion(
            &table.name,
            format!("Table {} has no primary key; define a primary key", table.name),
        ));
    }
    for fk in table.fks() {
        out.push(Finding::suggestion(
            &table.name,
            format!(
                "Consider an index on {}.{} (foreign key to {}.{})",
                fk.table, fk.column, fk.ref_table, fk.ref_column
            ),
        ));
    }
    out
}

/// Primary key uniqueness and non-nullness, rows numbered from 1
///
/// A key with a null component is reported and never recorded as seen, so it
/// cannot be reported as a duplicate.
pub fn check_primary_key_uniqueness(table: &Table, rows: &[Row]) -> Vec<Finding> {
    let pk = table.pk_columns();
    if pk.is_empty() {
        return vec![Finding::warn(
            &table.name,
            format!(
                "No primary key defined for {}; uniqueness check skipped",
                table.name
            ),
        )];
    }

    let mut out = Vec::new();
    let mut seen: HashSet<Vec<&str>> = HashSet::new();
    for (i, row) in rows.iter().enumerate() {
        let row_number = i + 1;
        let key: Vec<&str> = pk.iter().map(|col| cell(row, col)).collect();

        if key.iter().any(|v| is_null(v)) {
            out.push(Finding::error(
                &table.name,
                format!("Null in primary key at row {}: {}", row_number, format_key(&key)),
            ));
            continue;
        }
        if !seen.insert(key.clone()) {
            out.push(Finding::error(
                &table.name,
                format!(
                    "Duplicate primary key at row {}: {}",
                    row_number,
                    format_key(&key)
                ),
            ));
        }
    }

    if !out.iter().any(|f| f.level == Level::Error) {
        out.push(Finding::info(
            &table.name,
            format!("Primary key uniqueness OK ({} rows)", rows.len()),
        ));
    }
    out
}

/// One finding per declared foreign key: missing-reference count or OK
///
/// Null foreign key values are always allowed. A referenced column the cache
/// does not know accepts no values.
pub fn check_foreign_key_integrity(
    table: &Table,
    rows: &[Row],
    cache: &ReferenceCache,
) -> Vec<Finding> {
    table
        .fks()
        .into_iter()
        .map(|fk| {
            let missing = rows
                .iter()
                .map(|row| cell(row, &fk.column))
                .filter(|v| !is_null(v))
                .filter(|v| !cache.contains(&fk.ref_table, &fk.ref_column, v))
                .count();

            if missing > 0 {
                Finding::error(
                    &table.name,
                    format!("FK {}: {} missing references", fk, missing),
                )
            } else {
                Finding::info(&table.name, format!("FK {} OK", fk))
            }
        })
        .collect()
}

/// Flag tables where too many cells look like lists of values
pub fn check_first_normal_form(table: &Table, rows: &[Row], config: &CheckConfig) -> Finding {
    let total = rows.iter().map(|row| row.len()).sum::<usize>();
    let multi_valued = rows
        .iter()
        .flat_map(|row| row.values())
        .filter(|v| config.is_multi_valued(v))
        .count();

    let separators: String = config
        .multi_value_separators
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");

    if total > 0 && (multi_valued as f64 / total as f64) > config.multi_value_threshold {
        Finding::warn(
            &table.name,
            format!(
                "Possible 1NF violation: {} of {} cells contain list separators ({})",
                multi_valued, total, separators
            ),
        )
    } else {
        Finding::info(
            &table.name,
            format!(
                "1NF heuristic OK: {} of {} cells contain list separators",
                multi_valued, total
            ),
        )
    }
}

fn format_key(key: &[&str]) -> String {
    format!("({})", key.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::import::parse_schema_text;
    use crate::storage::InMemoryRowSource;

    fn rows(cells: Vec<Vec<(&str, &str)>>) -> Vec<Row> {
        cells
            .into_iter()
            .map(|r| {
                r.into_iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect()
            })
            .collect()
    }

    fn table(text: &str) -> Table {
        parse_schema_text(text).unwrap().tables.remove(0)
    }

    #[test]
    fn test_suggestions_for_missing_pk_and_fks() {
        let t = table("Orders(user_id(fk:Users.id), item_id(fk:Items.id))");
        let out = schema_suggestions(&t);
        assert_eq!(out.len(), 3);
        assert!(out.iter().all(|f| f.level == Level::Suggestion));
        assert!(out[0].message.contains("define a primary key"));
        assert!(out[1].message.contains("Orders.user_id"));
        assert!(out[2].message.contains("Orders.item_id"));
    }

    #[test]
    fn test_no_suggestions_for_keyed_table() {
        let t = table("Users(id(pk), name)");
        assert!(schema_suggestions(&t).is_empty());
    }

    #[test]
    fn test_composite_duplicate_reported_once_at_second_row() {
        let t = table("Enrollment(student(pk), course(pk), grade)");
        let data = rows(vec![
            vec![("student", "1"), ("course", "A"), ("grade", "B")],
            vec![("student", "1"), ("course", "B"), ("grade", "A")],
            vec![("student", "1"), ("course", "A"), ("grade", "C")],
        ]);
        let out = check_primary_key_uniqueness(&t, &data);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].level, Level::Error);
        assert!(out[0].message.starts_with("Duplicate primary key at row 3"));
    }

    #[test]
    fn test_null_pk_never_compared_for_duplication() {
        let t = table("T(id(pk))");
        let data = rows(vec![
            vec![("id", "1")],
            vec![("id", "2")],
            vec![("id", "  ")],
            vec![],
            vec![("id", "2")],
        ]);
        let out = check_primary_key_uniqueness(&t, &data);
        let messages: Vec<_> = out.iter().map(|f| f.message.as_str()).collect();
        assert_eq!(out.len(), 3);
        assert!(messages[0].starts_with("Null in primary key at row 3"));
        assert!(messages[1].starts_with("Null in primary key at row 4"));
        assert!(messages[2].starts_with("Duplicate primary key at row 5"));
    }

    #[test]
    fn test_unique_pk_gives_single_info() {
        let t = table("T(id(pk))");
        let data = rows(vec![vec![("id", "1")], vec![("id", "2")]]);
        let out = check_primary_key_uniqueness(&t, &data);
        assert_eq!(out, vec![Finding::info("T", "Primary key uniqueness OK (2 rows)")]);
    }

    #[test]
    fn test_pk_zero_rows_is_info() {
        let t = table("T(id(pk))");
        let out = check_primary_key_uniqueness(&t, &[]);
        assert_eq!(out, vec![Finding::info("T", "Primary key uniqueness OK (0 rows)")]);
    }

    #[test]
    fn test_missing_pk_gives_single_warn() {
        let t = table("T(a, b)");
        let data = rows(vec![vec![("a", "1")], vec![("a", "1")]]);
        let out = check_primary_key_uniqueness(&t, &data);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].level, Level::Warn);
    }

    #[test]
    fn test_fk_missing_count_ignores_nulls() {
        let schema = parse_schema_text("A(id(pk))\nB(id(pk), a_id(fk:A.id))").unwrap();
        let source = InMemoryRowSource::new().with_table(
            "A",
            vec![vec![("id", "1")], vec![("id", "2")], vec![("id", "3")]],
        );
        let cache = ReferenceCache::from_source(&schema, Some(&source));
        let data = rows(vec![
            vec![("a_id", "2")],
            vec![("a_id", "9")],
            vec![("a_id", "")],
        ]);

        let out = check_foreign_key_integrity(&schema.tables[1], &data, &cache);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].level, Level::Error);
        assert_eq!(out[0].message, "FK B.a_id -> A.id: 1 missing references");
    }

    #[test]
    fn test_fk_to_unknown_table_reports_every_value() {
        let schema = parse_schema_text("B(id(pk), x_id(fk:Nowhere.id))").unwrap();
        let cache = ReferenceCache::default();
        let data = rows(vec![vec![("x_id", "1")], vec![("x_id", "2")], vec![]]);

        let out = check_foreign_key_integrity(&schema.tables[0], &data, &cache);
        assert_eq!(out[0].message, "FK B.x_id -> Nowhere.id: 2 missing references");
    }

    #[test]
    fn test_fk_all_present_gives_info() {
        let schema = parse_schema_text("A(id(pk))\nB(a_id(fk:A.id))").unwrap();
        let source = InMemoryRowSource::new().with_table("A", vec![vec![("id", "1")]]);
        let cache = ReferenceCache::from_source(&schema, Some(&source));
        let data = rows(vec![vec![("a_id", "1")], vec![("a_id", " ")]]);

        let out = check_foreign_key_integrity(&schema.tables[1], &data, &cache);
        assert_eq!(out, vec![Finding::info("B", "FK B.a_id -> A.id OK")]);
    }

    #[test]
    fn test_fk_zero_rows_is_info() {
        let schema = parse_schema_text("A(id(pk))\nB(a_id(fk:A.id))").unwrap();
        let out = check_foreign_key_integrity(&schema.tables[1], &[], &ReferenceCache::default());
        assert_eq!(out, vec![Finding::info("B", "FK B.a_id -> A.id OK")]);
    }

    fn one_column_rows(total: usize, multi: usize) -> Vec<Row> {
        (0..total)
            .map(|i| {
                let v = if i < multi { format!("{},x", i) } else { i.to_string() };
                [("v".to_string(), v)].into_iter().collect()
            })
            .collect()
    }

    #[test]
    fn test_1nf_threshold_boundary() {
        let t = table("T(v)");
        let config = CheckConfig::default();

        let below = check_first_normal_form(&t, &one_column_rows(100, 9), &config);
        assert_eq!(below.level, Level::Info);

        let at = check_first_normal_form(&t, &one_column_rows(100, 10), &config);
        assert_eq!(at.level, Level::Info);

        let above = check_first_normal_form(&t, &one_column_rows(100, 11), &config);
        assert_eq!(above.level, Level::Warn);
        assert!(above.message.contains("11 of 100 cells"));
    }

    #[test]
    fn test_1nf_zero_cells_is_info() {
        let t = table("T(v)");
        let out = check_first_normal_form(&t, &[], &CheckConfig::default());
        assert_eq!(out.level, Level::Info);
    }

    #[test]
    fn test_run_without_source_skips_data_checks() {
        let schema = parse_schema_text("A(id(pk))\nLog(line)").unwrap();
        let out = run_checks(&schema, None);
        assert_eq!(out.len(), 3);
        assert_eq!(out[0].level, Level::Warn);
        assert_eq!(out[0].table.as_deref(), Some("A"));
        assert_eq!(out[1].level, Level::Suggestion);
        assert_eq!(out[2].level, Level::Warn);
        assert!(out[2].message.contains("data checks skipped"));
    }

    #[test]
    fn test_finding_order_within_table() {
        let schema = parse_schema_text("A(id(pk))\nB(id(pk), a_id(fk:A.id))").unwrap();
        let source = InMemoryRowSource::new()
            .with_table("A", vec![vec![("id", "1")]])
            .with_table("B", vec![vec![("id", "1"), ("a_id", "1")]]);

        let levels: Vec<_> = Checker::new()
            .run(&schema, Some(&source))
            .into_iter()
            .map(|f| (f.table.unwrap_or_default(), f.level))
            .collect();
        assert_eq!(
            levels,
            vec![
                ("A".to_string(), Level::Info),
                ("A".to_string(), Level::Info),
                ("B".to_string(), Level::Suggestion),
                ("B".to_string(), Level::Info),
                ("B".to_string(), Level::Info),
                ("B".to_string(), Level::Info),
            ]
        );
    }

    struct FailingSource;

    impl RowSource for FailingSource {
        fn load_rows(&self, _table: &str) -> Result<Option<Vec<Row>>, StorageError> {
            Err(StorageError::IoError("disk on fire".to_string()))
        }
    }

    #[test]
    fn test_load_failure_is_a_warning() {
        let schema = parse_schema_text("A(id(pk))").unwrap();
        let out = run_checks(&schema, Some(&FailingSource));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].level, Level::Warn);
        assert!(out[0].message.contains("disk on fire"));
    }
}
