//! Failure types for the comment task.

use std::io;
use std::path::PathBuf;

use crate::core::config::{ACCESS_TOKEN_VAR, FORM_ID_VAR};
use crate::core::netlify::FetchError;

/// Every way the comment task can stop early. None of these fail the build:
/// they are logged and reported as a soft failure.
#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("Missing {} environment variable!", FORM_ID_VAR)]
    MissingFormId,
    #[error("Missing {} environment variable!", ACCESS_TOKEN_VAR)]
    MissingAccessToken,
    #[error("Couldn't get comments from Netlify")]
    Fetch(#[from] FetchError),
    #[error("Failed to create directory {}: {source}", .path.display())]
    CreateDir { path: PathBuf, source: io::Error },
    #[error("Failed to serialize comments: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error("Failed to write {}: {source}", .path.display())]
    Write { path: PathBuf, source: io::Error },
}

impl TaskError {
    /// Configuration problems are expected on local builds; everything else is worth an error line.
    pub fn is_config(&self) -> bool {
        matches!(self, TaskError::MissingFormId | TaskError::MissingAccessToken)
    }
}
