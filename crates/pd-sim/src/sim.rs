//! Integration output.

use pd_core::Real;

use crate::model::State;

/// Sample times paired with state snapshots.
#[derive(Clone, Debug, PartialEq)]
pub struct SimRecord<const N: usize> {
    /// Time points
    pub t: Vec<Real>,
    /// State snapshots, one per time point
    pub x: Vec<State<N>>,
}

impl<const N: usize> SimRecord<N> {
    pub fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            x: Vec::with_capacity(n),
        }
    }

    pub fn push(&mut self, t: Real, x: State<N>) {
        self.t.push(t);
        self.x.push(x);
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Values of state component `i` across all samples.
    pub fn component(&self, i: usize) -> Vec<Real> {
        self.x.iter().map(|x| x[i]).collect()
    }

    pub fn last(&self) -> Option<(Real, &State<N>)> {
        self.t.last().copied().zip(self.x.last())
    }
}
