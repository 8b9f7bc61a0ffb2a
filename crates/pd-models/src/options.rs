//! Sampling and solver settings shared by all evaluators.

use pd_core::Real;
use pd_sim::GeneralOdeSolve;

/// Grid sizes per model plus the general ODE solver configuration.
#[derive(Clone, Copy, Debug)]
pub struct EvalOptions {
    pub exponential_samples: usize,
    pub logistic_variable_samples: usize,
    /// Nominal Euler step of the migration model; also sets its grid density.
    pub migration_dt: Real,
    pub si_samples: usize,
    pub sir_samples: usize,
    pub seir_samples: usize,
    pub ode: GeneralOdeSolve,
}

impl Default for EvalOptions {
    fn default() -> Self {
        Self {
            exponential_samples: 200,
            logistic_variable_samples: 400,
            migration_dt: 0.1,
            si_samples: 300,
            sir_samples: 400,
            seir_samples: 500,
            ode: GeneralOdeSolve::default(),
        }
    }
}
