//! Check command implementation

use super::load_input;
use crate::cli::config::CliConfig;
use crate::cli::error::CliError;
use crate::cli::output::{ReportFormat, format_findings_text};
use crate::export::{JsonExporter, MarkdownExporter};
use crate::import::SchemaTextImporter;
use crate::storage::{CsvDirectory, RowSource};
use crate::validation::{Checker, Finding, ReportSummary};
use std::path::PathBuf;
use tracing::info;

/// Arguments for the `check` command
pub struct CheckArgs {
    /// Schema definition file (`-` for stdin)
    pub schema: PathBuf,
    /// Directory holding one `TableName.csv` per table
    pub data: Option<PathBuf>,
    /// Report file (stdout when absent)
    pub output: Option<PathBuf>,
    /// Report format
    pub format: ReportFormat,
    /// Optional TOML config file
    pub config: Option<PathBuf>,
}

/// Handle the `check` command
///
/// Returns the finding summary so the caller can decide whether ERROR
/// findings should fail the process.
pub fn handle_check(args: &CheckArgs) -> Result<ReportSummary, CliError> {
    let config = CliConfig::load(args.config.as_deref())?;
    let content = load_input(&args.schema)?;
    let schema = SchemaTextImporter::with_config(config.parser).parse(&content)?;
    info!(tables = schema.len(), schema = %args.schema.display(), "Parsed schema");

    let source = match &args.data {
        Some(dir) if !dir.is_dir() => {
            return Err(CliError::InvalidArgument(format!(
                "Data directory not found: {}",
                dir.display()
            )));
        }
        Some(dir) => Some(CsvDirectory::new(dir)),
        None => None,
    };

    let findings = Checker::with_config(config.checks)
        .run(&schema, source.as_ref().map(|s| s as &dyn RowSource));

    let report = render_report(&findings, args.format)?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, &report)
                .map_err(|e| CliError::FileWriteError(path.clone(), e.to_string()))?;
            info!(output = %path.display(), "Report written");
        }
        None => print!("{}", report),
    }

    Ok(ReportSummary::from_findings(&findings))
}

fn render_report(findings: &[Finding], format: ReportFormat) -> Result<String, CliError> {
    Ok(match format {
        ReportFormat::Markdown => MarkdownExporter::export_findings(findings),
        ReportFormat::Json => {
            let mut json = JsonExporter::export_findings(findings)?;
            json.push('\n');
            json
        }
        ReportFormat::Text => format_findings_text(findings),
    })
}
