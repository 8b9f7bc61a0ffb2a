//! Direct evaluation of an analytic solution.

use pd_core::{Real, TimeGrid};
use tracing::debug;

use crate::model::State;
use crate::sim::SimRecord;

/// Samples a known solution `x(t)` at every grid time.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClosedForm;

impl ClosedForm {
    pub fn sample<const N: usize, F>(&self, grid: &TimeGrid, solution: F) -> SimRecord<N>
    where
        F: Fn(Real) -> State<N>,
    {
        debug!(samples = grid.len(), dim = N, "closed-form sampling");
        let mut record = SimRecord::with_capacity(grid.len());
        for &t in grid.times() {
            record.push(t, solution(t));
        }
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn samples_every_grid_point() {
        let grid = TimeGrid::uniform(1.0, 11).unwrap();
        let record = ClosedForm.sample(&grid, |t| State::<1>::new(2.0 * t));
        assert_eq!(record.len(), 11);
        assert_eq!(record.t, grid.times());
        assert!((record.x[10][0] - 2.0).abs() < 1e-15);
    }
}
