//! Error types for simulation operations.

use thiserror::Error;

/// Errors encountered while integrating a model.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Integration failed on [{t0}, {t1}]: {message}")]
    Integration { t0: f64, t1: f64, message: String },
}

pub type SimResult<T> = Result<T, SimError>;
