//! Error types for parsing and printing modules

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while reading or regenerating a module
#[derive(Error, Debug, Diagnostic)]
pub enum GenError {
    /// Source text could not be parsed
    #[error("Failed to parse {filename}: {}", messages.join(", "))]
    #[diagnostic(code(sprig::gen::parse_failed))]
    ParseFailed {
        filename: String,
        messages: Vec<String>,
    },
}

impl GenError {
    /// Create a ParseFailed error
    pub fn parse_failed(filename: impl Into<String>, messages: Vec<String>) -> Self {
        Self::ParseFailed {
            filename: filename.into(),
            messages,
        }
    }
}

/// Result type for parse/print operations
pub type Result<T> = std::result::Result<T, GenError>;
