use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FetchError {
    #[error("invalid sample id: {0}")]
    InvalidSampleId(String),

    #[error("failed to read manifest at {0}")]
    ManifestRead(PathBuf),

    #[error("failed to parse CSV manifest: {0}")]
    ManifestParse(String),

    #[error("manifest is missing required column: {0}")]
    MissingColumn(String),

    #[error("GitHub request failed: {0}")]
    GithubHttp(String),

    #[error("filesystem error: {0}")]
    Filesystem(String),

    #[error("failed to write download log: {0}")]
    LogWrite(String),
}
