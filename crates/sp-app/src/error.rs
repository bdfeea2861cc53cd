//! Error types for the sp-app service layer.

use std::path::PathBuf;

/// Application error wrapping the backend crates behind one interface.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Scenario error: {0}")]
    Project(String),

    #[error("Failed to read scenario file: {path}")]
    ScenarioFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write scenario file: {path}")]
    ScenarioFileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Scenario validation failed: {0}")]
    Validation(String),

    #[error("Model error: {0}")]
    Model(#[from] sp_model::ModelError),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for sp-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<sp_project::ProjectError> for AppError {
    fn from(err: sp_project::ProjectError) -> Self {
        match err {
            sp_project::ProjectError::Validation(inner) => AppError::Validation(inner.to_string()),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<sp_project::ValidationError> for AppError {
    fn from(err: sp_project::ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Export(err.to_string())
    }
}
