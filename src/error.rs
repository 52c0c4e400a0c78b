// ABOUTME: Application-wide error types for dockconv.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::convert::SpecFormatError;
use crate::runtime::RuntimeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    SpecFormat(#[from] SpecFormatError),

    #[error("request file not found in {0}")]
    RequestNotFound(PathBuf),

    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
