//! Output formatting for CLI

use crate::models::Schema;
use crate::validation::{Finding, ReportSummary};

/// Report format of the `check` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Markdown,
    Json,
    Text,
}

/// Output format of the `schema` command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SchemaFormat {
    #[default]
    Text,
    Json,
}

/// Format findings one per line, followed by a summary line
pub fn format_findings_text(findings: &[Finding]) -> String {
    let mut output = String::new();
    for f in findings {
        output.push_str(&format!("{}\n", f));
    }

    let summary = ReportSummary::from_findings(findings);
    output.push_str(&format!(
        "\n{} finding(s): {} error, {} warn, {} info, {} suggestion\n",
        summary.total(),
        summary.error,
        summary.warn,
        summary.info,
        summary.suggestion
    ));
    output
}

/// Format a parsed schema: tables with their primary and foreign keys
pub fn format_schema_text(schema: &Schema) -> String {
    let mut output = format!("✅ Parsed {} table(s)\n", schema.len());
    for table in &schema.tables {
        output.push_str(&format!("\nTable: {}\n", table.name));
        let columns: Vec<&str> = table.columns.iter().map(|c| c.name.as_str()).collect();
        output.push_str(&format!("  Columns: {}\n", columns.join(", ")));
        output.push_str(&format!("  PK: [{}]\n", table.pk_columns().join(", ")));
        for fk in table.fks() {
            output.push_str(&format!(
                "  FK: {} -> {}.{}\n",
                fk.column, fk.ref_table, fk.ref_column
            ));
        }
    }
    output
}
