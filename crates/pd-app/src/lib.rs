//! Shared application service layer for popdyn.
//!
//! Front ends (the CLI, or any GUI or web layer) go through this crate:
//! engine configuration, scenario files, the evaluation facade, and
//! queries over evaluated results.

pub mod config;
pub mod error;
pub mod facade;
pub mod query;
pub mod scenario;

// Re-export key types for convenience
pub use config::{
    EngineConfig, OdeConfig, OdeMethodConfig, SamplingConfig, load_config, parse_config,
};
pub use error::{AppError, AppResult};
pub use facade::{Outcome, OutcomeRecord, SimulationFacade, evaluate};
pub use query::{RunSummary, extract_series, get_run_summary, list_channels};
pub use scenario::{Scenario, load_scenario, parse_scenario, save_scenario};
