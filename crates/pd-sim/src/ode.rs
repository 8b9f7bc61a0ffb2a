//! General-purpose initial-value-problem solving over an explicit grid.
//!
//! The grid is walked interval by interval: each `[t[i-1], t[i]]` is handed
//! to the underlying method, and only the state at `t[i]` is recorded. The
//! adaptive method picks its own internal steps inside an interval.

use ode_solvers::dop_shared::OutputType;
use ode_solvers::{Dopri5, System};
use pd_core::{Real, TimeGrid};
use tracing::{debug, trace};

use crate::error::{SimError, SimResult};
use crate::integrator::{Integrator, RK4};
use crate::model::{OdeSystem, State};
use crate::sim::SimRecord;

/// Tolerance customary for general-purpose IVP libraries (about sqrt(eps)).
pub const DEFAULT_TOLERANCE: Real = 1.490_116_119_384_765_6e-8;

/// Method used by [`GeneralOdeSolve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OdeMethod {
    /// Adaptive Dormand-Prince 5(4) with error control.
    #[default]
    Dopri5,
    /// Classical RK4 with a fixed number of substeps per grid interval.
    Rk4,
}

/// Step budget for one grid interval before the adaptive solver gives up.
const MAX_STEPS_PER_INTERVAL: u32 = 100_000;

/// Whole-trajectory IVP solver sampled on an explicit grid.
#[derive(Clone, Copy, Debug)]
pub struct GeneralOdeSolve {
    pub method: OdeMethod,
    pub rtol: Real,
    pub atol: Real,
    /// RK4 substeps per grid interval (ignored by Dopri5).
    pub substeps: usize,
}

impl Default for GeneralOdeSolve {
    fn default() -> Self {
        Self {
            method: OdeMethod::default(),
            rtol: DEFAULT_TOLERANCE,
            atol: DEFAULT_TOLERANCE,
            substeps: 4,
        }
    }
}

/// Adapter exposing an `OdeSystem` to the Dormand-Prince driver.
struct Rhs<'a, M>(&'a M);

impl<const N: usize, M: OdeSystem<N>> System<Real, State<N>> for Rhs<'_, M> {
    fn system(&self, t: Real, y: &State<N>, dy: &mut State<N>) {
        *dy = self.0.rhs(t, y);
    }
}

impl GeneralOdeSolve {
    pub fn new(method: OdeMethod) -> Self {
        Self {
            method,
            ..Self::default()
        }
    }

    fn validate(&self) -> SimResult<()> {
        if !(self.rtol.is_finite() && self.rtol > 0.0) {
            return Err(SimError::InvalidArg {
                what: "rtol must be positive",
            });
        }
        if !(self.atol.is_finite() && self.atol > 0.0) {
            return Err(SimError::InvalidArg {
                what: "atol must be positive",
            });
        }
        if self.substeps == 0 {
            return Err(SimError::InvalidArg {
                what: "substeps must be positive",
            });
        }
        Ok(())
    }

    /// Record the state at every grid time, solving one interval at a time.
    pub fn integrate<const N: usize, M: OdeSystem<N>>(
        &self,
        model: &M,
        grid: &TimeGrid,
    ) -> SimResult<SimRecord<N>> {
        self.validate()?;
        let times = grid.times();
        let Some(&t0) = times.first() else {
            return Err(SimError::InvalidArg {
                what: "grid must not be empty",
            });
        };
        debug!(samples = times.len(), dim = N, method = ?self.method, "general ode solve");

        let mut record = SimRecord::with_capacity(times.len());
        let mut x = model.initial_state();
        record.push(t0, x);
        for (t_prev, t) in grid.intervals() {
            if t > t_prev {
                x = match self.method {
                    OdeMethod::Dopri5 => self.dopri5_interval(model, t_prev, t, x)?,
                    OdeMethod::Rk4 => self.rk4_interval(model, t_prev, t, x),
                };
                x = model.project(x);
            }
            record.push(t, x);
        }
        Ok(record)
    }

    fn dopri5_interval<const N: usize, M: OdeSystem<N>>(
        &self,
        model: &M,
        t0: Real,
        t1: Real,
        x0: State<N>,
    ) -> SimResult<State<N>> {
        let span = t1 - t0;
        // Sparse output: only accepted steps are recorded, the last one at t1.
        let mut solver = Dopri5::from_param(
            Rhs(model),
            t0,
            t1,
            span,
            x0,
            self.rtol,
            self.atol,
            0.9,
            0.04,
            0.2,
            10.0,
            span,
            0.0,
            MAX_STEPS_PER_INTERVAL,
            1000,
            OutputType::Sparse,
        );
        solver
            .integrate()
            .map_err(|e| SimError::Integration {
                t0,
                t1,
                message: e.to_string(),
            })?;
        trace!(t0, t1, steps = solver.x_out().len(), "dopri5 interval");
        solver
            .y_out()
            .last()
            .copied()
            .ok_or_else(|| SimError::Integration {
                t0,
                t1,
                message: "solver produced no output".to_string(),
            })
    }

    fn rk4_interval<const N: usize, M: OdeSystem<N>>(
        &self,
        model: &M,
        t0: Real,
        t1: Real,
        x0: State<N>,
    ) -> State<N> {
        let h = (t1 - t0) / self.substeps as Real;
        (0..self.substeps).fold(x0, |x, k| RK4.step(model, t0 + k as Real * h, &x, h))
    }
}
