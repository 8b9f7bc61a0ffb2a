use thiserror::Error;

pub type PdResult<T> = Result<T, PdError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PdError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Missing parameters: {}", names.join(", "))]
    MissingParameter { names: Vec<String> },

    #[error("Unknown model: {name}")]
    UnknownModel { name: String },

    #[error("Malformed parameter assignment: {input} (expected NAME=VALUE)")]
    ParseParam { input: String },
}
