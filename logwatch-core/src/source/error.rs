use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    // IO
    #[error("failed to open access log {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to start reader thread: {0}")]
    Spawn(#[source] std::io::Error),

    #[error("reader thread panicked: {message}")]
    ReaderPanicked { message: String },

    // Decoding
    #[error("malformed CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("access log header is missing required column '{column}'")]
    MissingColumn { column: &'static str },

    #[error("line {line}: invalid {field} value '{value}'")]
    InvalidField {
        line: u64,
        field: &'static str,
        value: String,
    },
}

impl SourceError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn invalid_field(line: u64, field: &'static str, value: &str) -> Self {
        Self::InvalidField {
            line,
            field,
            value: value.to_string(),
        }
    }
}
