//! dbms-checker CLI
//!
//! Validates a schema definition against CSV data and reports the findings.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use dbms_checker::cli::CliError;
use dbms_checker::cli::commands::check::{CheckArgs, handle_check};
use dbms_checker::cli::commands::schema::{SchemaArgs, handle_schema};
use dbms_checker::cli::output::{ReportFormat, SchemaFormat};

/// Exit code when `--fail-on-error` is set and ERROR findings exist
const EXIT_FINDINGS: u8 = 2;

#[derive(Parser)]
#[command(name = "dbms-checker")]
#[command(author, version, about = "DBMS Integrity Checker - validate a schema against CSV data", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// TOML config file with [parser] and [checks] sections
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a schema file and print its tables and keys
    Schema {
        /// Path to the schema file (`-` for stdin)
        #[arg(long)]
        schema: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = SchemaFormat::Text)]
        format: SchemaFormat,
    },

    /// Check CSV data against a schema and write a report
    Check {
        /// Path to the schema file (`-` for stdin)
        #[arg(long)]
        schema: PathBuf,

        /// Directory with one TableName.csv per table
        #[arg(long)]
        data: Option<PathBuf>,

        /// Report file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Markdown)]
        format: ReportFormat,

        /// Exit with status 2 when any ERROR finding is reported
        #[arg(long)]
        fail_on_error: bool,
    },
}

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "dbms_checker=warn",
        1 => "dbms_checker=info",
        _ => "dbms_checker=debug",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_directive.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    match cli.command {
        Commands::Schema { schema, format } => {
            handle_schema(&SchemaArgs {
                schema,
                format,
                config: cli.config,
            })?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check {
            schema,
            data,
            output,
            format,
            fail_on_error,
        } => {
            let summary = handle_check(&CheckArgs {
                schema,
                data,
                output,
                format,
                config: cli.config,
            })?;
            if fail_on_error && summary.has_errors() {
                eprintln!("{} ERROR finding(s) reported", summary.error);
                return Ok(ExitCode::from(EXIT_FINDINGS));
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
