//! Shared error types for the application

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for commentscope operations
#[derive(Debug, Error)]
pub enum Error {
    /// Input file does not exist
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Malformed JSON input
    #[error("Parse error in {}:{line}:{column}: {message}", file.display())]
    Parse {
        file: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// Elapsed-time string that is not `H:M:S` or `M:S`
    #[error("Parse error: invalid elapsed time '{value}': {message}")]
    InvalidTime { value: String, message: String },

    /// Empty collection or zero-valued count parameter
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Field name outside the record schema, or a required field absent from a record
    #[error("Field not found: {field}{}", record.map(|i| format!(" (record {i})")).unwrap_or_default())]
    FieldNotFound { field: String, record: Option<usize> },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid input error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    /// Create a field-not-found error, optionally pointing at a record index
    pub fn field_not_found(field: impl Into<String>, record: Option<usize>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
            record,
        }
    }

    /// Create a JSON parse error located in `file`
    pub fn parse(file: impl Into<PathBuf>, source: &serde_json::Error) -> Self {
        Self::Parse {
            file: file.into(),
            line: source.line(),
            column: source.column(),
            message: source.to_string(),
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
