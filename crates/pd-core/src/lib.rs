//! pd-core: stable foundation for popdyn.
//!
//! Contains:
//! - numeric (Real + tolerances + float helpers)
//! - grid (explicit sample-time grids)
//! - model (model identifiers and their parameter catalogue)
//! - params (named, possibly-absent numeric inputs)
//! - timing (opt-in wall clock instrumentation)
//! - error (shared error types)

pub mod error;
pub mod grid;
pub mod model;
pub mod numeric;
pub mod params;
pub mod timing;

// Re-exports: nice ergonomics for downstream crates
pub use error::{PdError, PdResult};
pub use grid::TimeGrid;
pub use model::ModelId;
pub use numeric::*;
pub use params::ParameterSet;
