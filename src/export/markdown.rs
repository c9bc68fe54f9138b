//! Markdown report exporter
//!
//! Cell text is escaped so messages containing `|` or line breaks cannot
//! break the table layout.

use crate::validation::Finding;

const TITLE: &str = "# DBMS Integrity Check Report";
const LEGEND: &str = "**Legend**: `ERROR` = failed integrity, `WARN` = possible issue/missing data, \
`INFO` = OK/pass, `SUGGESTION` = schema improvement.";

/// Exporter for the Markdown report format.
pub struct MarkdownExporter;

impl MarkdownExporter {
    /// Render findings as a Markdown report
    ///
    /// # Example
    ///
    /// ```rust
    /// use dbms_checker::export::MarkdownExporter;
    ///
    /// let report = MarkdownExporter::export_findings(&[]);
    /// assert!(report.contains("_No findings._"));
    /// ```
    pub fn export_findings(findings: &[Finding]) -> String {
        let mut lines = vec![TITLE.to_string(), String::new()];

        if findings.is_empty() {
            lines.push("_No findings._".to_string());
            lines.push(String::new());
            return lines.join("\n");
        }

        lines.push("| Level | Table | Message |".to_string());
        lines.push("|---|---|---|".to_string());
        for f in findings {
            lines.push(format!(
                "| {} | {} | {} |",
                f.level,
                Self::escape_cell(f.table_or_dash()),
                Self::escape_cell(&f.message)
            ));
        }
        lines.push(String::new());
        lines.push(LEGEND.to_string());
        lines.push(String::new());
        lines.join("\n")
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|").replace(['\r', '\n'], " ")
    }
}
