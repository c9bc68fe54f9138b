//! Export functionality
//!
//! Renders a finding sequence for people and tools:
//! - Markdown (report table)
//! - JSON (summary plus findings)

pub mod json;
pub mod markdown;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::SerializationError(err.to_string())
    }
}

// Re-export for convenience
pub use json::JsonExporter;
pub use markdown::MarkdownExporter;
