//! OdeSystem trait for pluggable derivative functions.

use pd_core::Real;

/// Fixed-size state vector of an `N`-dimensional system.
pub type State<const N: usize> = ode_solvers::SVector<Real, N>;

/// An initial-value problem `dx/dt = f(t, x)`, `x(0) = x0`.
///
/// Implementations are plain parameter holders: `rhs` must be a pure
/// function of its arguments so a system can be evaluated from any thread.
pub trait OdeSystem<const N: usize> {
    /// Return the initial state at t=0.
    fn initial_state(&self) -> State<N>;

    /// Compute state derivative dxdt = f(t, x).
    fn rhs(&self, t: Real, x: &State<N>) -> State<N>;

    /// Constraint applied to every stepped state (not to the initial one).
    ///
    /// Identity by default; models with a hard floor override it.
    fn project(&self, x: State<N>) -> State<N> {
        x
    }
}
