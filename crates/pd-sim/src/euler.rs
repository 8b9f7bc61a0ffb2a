//! Fixed-step explicit Euler over an explicit grid.

use pd_core::{Real, TimeGrid};
use tracing::debug;

use crate::error::{SimError, SimResult};
use crate::integrator::{ForwardEuler, Integrator};
use crate::model::OdeSystem;
use crate::sim::SimRecord;

/// Produces `x[i] = project(x[i-1] + f(t[i-1], x[i-1]) * dt)`.
///
/// `dt` defaults to the grid spacing. A nominal step can be pinned
/// instead, in which case the recorded timestamps stay those of the grid
/// while each update advances by the pinned step.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedStepEuler {
    step: Option<Real>,
}

impl FixedStepEuler {
    /// Step size taken from the grid spacing.
    pub fn new() -> Self {
        Self { step: None }
    }

    /// Step size pinned to `dt` regardless of grid spacing.
    pub fn with_step(dt: Real) -> SimResult<Self> {
        if !(dt.is_finite() && dt > 0.0) {
            return Err(SimError::InvalidArg {
                what: "euler step must be positive",
            });
        }
        Ok(Self { step: Some(dt) })
    }

    /// Step `model` across `grid`, recording one state per grid time.
    pub fn integrate<const N: usize, M: OdeSystem<N>>(
        &self,
        model: &M,
        grid: &TimeGrid,
    ) -> SimResult<SimRecord<N>> {
        let times = grid.times();
        let Some(&t0) = times.first() else {
            return Err(SimError::InvalidArg {
                what: "grid must not be empty",
            });
        };
        let dt = self.step.unwrap_or_else(|| grid.spacing());
        debug!(samples = times.len(), dt, "fixed-step euler");

        let mut record = SimRecord::with_capacity(times.len());
        let mut x = model.initial_state();
        record.push(t0, x);
        for (t_prev, t) in grid.intervals() {
            x = model.project(ForwardEuler.step(model, t_prev, &x, dt));
            record.push(t, x);
        }
        Ok(record)
    }
}
