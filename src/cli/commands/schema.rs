//! Schema command implementation

use super::load_input;
use crate::cli::config::CliConfig;
use crate::cli::error::CliError;
use crate::cli::output::{SchemaFormat, format_schema_text};
use crate::import::SchemaTextImporter;
use std::path::PathBuf;

/// Arguments for the `schema` command
pub struct SchemaArgs {
    /// Schema definition file (`-` for stdin)
    pub schema: PathBuf,
    /// Output format
    pub format: SchemaFormat,
    /// Optional TOML config file
    pub config: Option<PathBuf>,
}

/// Handle the `schema` command: parse and print the schema
pub fn handle_schema(args: &SchemaArgs) -> Result<(), CliError> {
    let config = CliConfig::load(args.config.as_deref())?;
    let content = load_input(&args.schema)?;
    let schema = SchemaTextImporter::with_config(config.parser).parse(&content)?;

    match args.format {
        SchemaFormat::Text => print!("{}", format_schema_text(&schema)),
        SchemaFormat::Json => {
            let json = serde_json::to_string_pretty(&schema)
                .map_err(crate::export::ExportError::from)?;
            println!("{}", json);
        }
    }
    Ok(())
}
