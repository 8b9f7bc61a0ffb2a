//! Single-step explicit integrators.

use pd_core::Real;

use crate::model::{OdeSystem, State};

/// Trait for one-step time integrators.
pub trait Integrator {
    /// Advance state by one time step of size `dt` starting at `t`.
    fn step<const N: usize, M: OdeSystem<N>>(
        &self,
        model: &M,
        t: Real,
        x: &State<N>,
        dt: Real,
    ) -> State<N>;
}

/// Classical RK4 (Runge-Kutta 4th order) integrator.
#[derive(Clone, Copy, Debug)]
pub struct RK4;

impl Integrator for RK4 {
    fn step<const N: usize, M: OdeSystem<N>>(
        &self,
        model: &M,
        t: Real,
        x: &State<N>,
        dt: Real,
    ) -> State<N> {
        let k1 = model.rhs(t, x);

        let x2 = x + k1 * (0.5 * dt);
        let k2 = model.rhs(t + 0.5 * dt, &x2);

        let x3 = x + k2 * (0.5 * dt);
        let k3 = model.rhs(t + 0.5 * dt, &x3);

        let x4 = x + k3 * dt;
        let k4 = model.rhs(t + dt, &x4);

        // x_new = x + (dt/6) * (k1 + 2*k2 + 2*k3 + k4)
        x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

/// Forward Euler (explicit, 1st order).
/// Calls rhs() once per step instead of 4 times (RK4).
#[derive(Clone, Copy, Debug)]
pub struct ForwardEuler;

impl Integrator for ForwardEuler {
    fn step<const N: usize, M: OdeSystem<N>>(
        &self,
        model: &M,
        t: Real,
        x: &State<N>,
        dt: Real,
    ) -> State<N> {
        let xdot = model.rhs(t, x);
        x + xdot * dt
    }
}
