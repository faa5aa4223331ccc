use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Ingest(#[from] IngestError),
    #[error("config error: {0}")]
    Config(String),
    #[error("render failed: {0}")]
    Render(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("No tasks provided.")]
    MissingSource,
    #[error("File '{}' is not valid or readable.", path.display())]
    InvalidFile { path: PathBuf },
    #[error("Task string '{input}' is not valid.")]
    InvalidTaskString { input: String },
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl IngestError {
    /// Only a missing source lets the caller continue with an absent result.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, IngestError::MissingSource)
    }
}
