// crates/core/src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StampError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Long description file '{path}' does not exist")]
    ReadmeMissing { path: std::path::PathBuf },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid manifest: {0}")]
    Manifest(String),
}

pub type Result<T> = std::result::Result<T, StampError>;
