use crate::forge::FetchError;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal run conditions. Everything outside this taxonomy (provider
/// errors, filesystem permissions) propagates as `anyhow::Error` and
/// terminates the run without special handling.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("{0} is not set")]
    MissingCredential(&'static str),

    #[error("missing judge file: {}", .0.display())]
    MissingRubric(PathBuf),

    #[error("sample.json not found at {}", .0.display())]
    MissingSamples(PathBuf),

    #[error("invalid GitHub URL (must be a blob URL): {0}")]
    InvalidUrl(String),

    #[error("GitHub fetch error: {0}")]
    Fetch(#[from] FetchError),
}
