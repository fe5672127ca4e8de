use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for aida operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// No directory containing `dbt_project/` found above the anchor.
    #[error("No dbt_project/ directory found in any ancestor of {}", .0.display())]
    ProjectRootNotFound(PathBuf),

    /// The dbt executable could not be started at all.
    #[error("Failed to launch dbt: {details}")]
    DbtLaunch { details: String },

    /// Raw-data ingestion reported failure.
    #[error("Raw data ingestion failed: {0}")]
    Ingestion(String),
}

impl AppError {
    pub(crate) fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }
}
