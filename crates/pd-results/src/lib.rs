//! pd-results: time series, result envelopes and scalar summaries.

pub mod export;
pub mod summarize;
pub mod types;

pub use summarize::{Peak, interpolate, peak, value_at_floor_index};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Channel {channel} has {actual} values, expected {expected}")]
    LengthMismatch {
        channel: String,
        expected: usize,
        actual: usize,
    },

    #[error("Duplicate channel: {0}")]
    DuplicateChannel(String),
}
