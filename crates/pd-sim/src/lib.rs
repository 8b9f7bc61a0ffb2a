//! Numerical integration strategies for popdyn models.
//!
//! Provides:
//! - `OdeSystem`: derivative function plus initial state, generic over dimension
//! - Closed-form sampling of analytic solutions
//! - Fixed-step explicit Euler stepping on an explicit grid
//! - General-purpose IVP solving (adaptive Dormand-Prince or fixed-step RK4)
//!
//! Every strategy takes its time grid explicitly, never mutates inputs and
//! returns a freshly allocated `SimRecord`.

pub mod closed_form;
pub mod error;
pub mod euler;
pub mod integrator;
pub mod model;
pub mod ode;
pub mod sim;

// Re-exports for public API
pub use closed_form::ClosedForm;
pub use error::{SimError, SimResult};
pub use euler::FixedStepEuler;
pub use integrator::{ForwardEuler, Integrator, RK4};
pub use model::{OdeSystem, State};
pub use ode::{GeneralOdeSolve, OdeMethod};
pub use sim::SimRecord;
