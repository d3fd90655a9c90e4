use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecprepError {
    #[error("Input file not found: {}", path.display())]
    InputNotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed JSON in {} at line {line}: {source}", path.display())]
    MalformedRecord {
        path: PathBuf,
        line: usize,
        source: serde_json::Error,
    },

    #[error("Line {line} of {} is not a JSON object", path.display())]
    NotAnObject { path: PathBuf, line: usize },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error writing {}: {source}", path.display())]
    Csv { path: PathBuf, source: csv::Error },

    #[error("JSON export error writing {}: {source}", path.display())]
    Export {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML error in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl RecprepError {
    /// Process exit status for this error class
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Toml { .. } => 2,
            Self::InputNotFound { .. } | Self::Read { .. } => 3,
            Self::MalformedRecord { .. } | Self::NotAnObject { .. } => 4,
            Self::Write { .. } | Self::Csv { .. } | Self::Export { .. } => 5,
        }
    }
}

pub type Result<T> = std::result::Result<T, RecprepError>;
