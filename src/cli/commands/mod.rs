//! CLI command implementations

pub mod check;
pub mod schema;

use crate::cli::error::CliError;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Load input content from file or stdin (`-`)
pub(crate) fn load_input(input: &Path) -> Result<String, CliError> {
    if input == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| CliError::InvalidArgument(format!("Failed to read stdin: {}", e)))?;
        Ok(content)
    } else {
        std::fs::read_to_string(input)
            .map_err(|e| CliError::FileReadError(PathBuf::from(input), e.to_string()))
    }
}
