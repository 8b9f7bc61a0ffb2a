//! Error types for model evaluation.

use pd_core::PdError;
use pd_results::ResultsError;
use pd_sim::SimError;
use thiserror::Error;

/// Errors that can occur while evaluating a model.
#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Missing parameters: {}", names.join(", "))]
    Incomplete { names: Vec<String> },

    #[error("Invalid parameter: {0}")]
    Params(PdError),

    #[error("Integration error: {0}")]
    Sim(#[from] SimError),

    #[error("Result assembly error: {0}")]
    Results(#[from] ResultsError),
}

pub type ModelResult<T> = Result<T, ModelError>;

impl From<PdError> for ModelError {
    fn from(e: PdError) -> Self {
        match e {
            PdError::MissingParameter { names } => ModelError::Incomplete { names },
            other => ModelError::Params(other),
        }
    }
}
