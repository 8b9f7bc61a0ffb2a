//! Error types for the pd-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the engine crates and
/// gives front ends one error surface.
///
/// Missing parameters are not errors; see [`crate::Outcome::Incomplete`].
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Failed to read {what} file: {path}")]
    FileRead {
        what: &'static str,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Invalid scenario: {0}")]
    Scenario(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Simulation error: {0}")]
    Simulation(String),

    #[error("Results error: {0}")]
    Results(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pd-app operations.
pub type AppResult<T> = Result<T, AppError>;

impl From<pd_core::PdError> for AppError {
    fn from(err: pd_core::PdError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}

impl From<pd_sim::SimError> for AppError {
    fn from(err: pd_sim::SimError) -> Self {
        AppError::Simulation(err.to_string())
    }
}

impl From<pd_results::ResultsError> for AppError {
    fn from(err: pd_results::ResultsError) -> Self {
        AppError::Results(err.to_string())
    }
}

impl From<pd_models::ModelError> for AppError {
    fn from(err: pd_models::ModelError) -> Self {
        use pd_models::ModelError;
        match err {
            ModelError::Params(e) => e.into(),
            ModelError::Sim(e) => e.into(),
            ModelError::Results(e) => e.into(),
            // The facade screens for these before dispatch.
            incomplete @ ModelError::Incomplete { .. } => {
                AppError::InvalidInput(incomplete.to_string())
            }
        }
    }
}
