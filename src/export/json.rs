//! JSON report exporter

use crate::export::ExportError;
use crate::validation::{Finding, ReportSummary};
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    summary: ReportSummary,
    findings: &'a [Finding],
}

/// Exporter for the JSON report format.
pub struct JsonExporter;

impl JsonExporter {
    /// Render findings as pretty-printed JSON with per-level counts
    pub fn export_findings(findings: &[Finding]) -> Result<String, ExportError> {
        let report = JsonReport {
            summary: ReportSummary::from_findings(findings),
            findings,
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}
