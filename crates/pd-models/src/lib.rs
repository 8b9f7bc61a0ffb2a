//! pd-models: the population and epidemic model library.
//!
//! Provides one evaluator per model:
//! - Exponential growth (closed form)
//! - Logistic growth with a periodically varying rate (fixed-step Euler)
//! - Logistic growth with constant migration (fixed-step Euler, floored at 0)
//! - SI epidemic (closed-form logistic split)
//! - SIR and SEIR epidemics (general-purpose ODE solver)
//!
//! Every evaluator implements [`ModelEvaluator`] and is a pure function of
//! its parameters and [`EvalOptions`]: nothing is cached between calls.
//! [`evaluate`] is the tagged dispatch keyed by [`ModelId`].
//!
//! # Example
//!
//! ```
//! use pd_core::{ModelId, ParameterSet};
//! use pd_models::{EvalOptions, evaluate};
//!
//! let params = ParameterSet::new()
//!     .with("P0", 10.0)
//!     .with("r", 0.2)
//!     .with("t_max", 10.0)
//!     .with("t_eval", 5.0);
//!
//! let envelope = evaluate(ModelId::Exponential, &params, &EvalOptions::default()).unwrap();
//! let p = envelope.highlights.get("value_at_t_eval").unwrap();
//! assert!((p - 10.0 * 1.0_f64.exp()).abs() < 1e-9);
//! ```

pub mod common;
pub mod error;
pub mod exponential;
pub mod logistic_migration;
pub mod logistic_variable;
pub mod options;
pub mod seir;
pub mod si;
pub mod sir;
pub mod traits;

// Re-exports
pub use error::{ModelError, ModelResult};
pub use exponential::{Exponential, ExponentialParams};
pub use logistic_migration::{LogisticMigration, LogisticMigrationParams};
pub use logistic_variable::{LogisticVariableRate, LogisticVariableRateParams};
pub use options::EvalOptions;
pub use seir::{Seir, SeirParams};
pub use si::{Si, SiParams};
pub use sir::{Sir, SirParams};
pub use traits::{FromParameters, ModelEvaluator, evaluate, evaluate_with};
