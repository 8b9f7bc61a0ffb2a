//! Explicit sample-time grids.
//!
//! Every integration strategy receives its time axis up front; nothing
//! advances an implicit clock.

use crate::numeric::{Real, linspace};
use crate::{PdError, PdResult};

/// Safety limit on grid length (guards `t_max / dt` blowing up).
pub const MAX_SAMPLES: usize = 10_000_000;

/// Ordered, non-decreasing sample times starting at `0`.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    t: Vec<Real>,
}

impl TimeGrid {
    /// `samples` evenly spaced points over `[0, t_max]`.
    pub fn uniform(t_max: Real, samples: usize) -> PdResult<Self> {
        check_span(t_max)?;
        if samples < 2 {
            return Err(PdError::InvalidArg {
                what: "grid needs at least two samples",
            });
        }
        if samples > MAX_SAMPLES {
            return Err(PdError::InvalidArg {
                what: "grid exceeds maximum sample count",
            });
        }
        Ok(Self {
            t: linspace(0.0, t_max, samples),
        })
    }

    /// Grid whose density follows a nominal step `dt`.
    ///
    /// The sample count is `floor(t_max / dt)` (at least two), laid out
    /// evenly over `[0, t_max]`.
    pub fn stepped(t_max: Real, dt: Real) -> PdResult<Self> {
        check_span(t_max)?;
        if !(dt.is_finite() && dt > 0.0) {
            return Err(PdError::InvalidArg {
                what: "dt must be positive",
            });
        }
        let raw = (t_max / dt).floor();
        if raw > MAX_SAMPLES as Real {
            return Err(PdError::InvalidArg {
                what: "grid exceeds maximum sample count",
            });
        }
        Self::uniform(t_max, (raw as usize).max(2))
    }

    pub fn times(&self) -> &[Real] {
        &self.t
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn end(&self) -> Real {
        self.t.last().copied().unwrap_or(0.0)
    }

    /// Distance between the first two samples (0 for a single-sample grid).
    pub fn spacing(&self) -> Real {
        if self.t.len() < 2 {
            0.0
        } else {
            self.t[1] - self.t[0]
        }
    }

    /// Consecutive `(t[i-1], t[i])` pairs.
    pub fn intervals(&self) -> impl Iterator<Item = (Real, Real)> + '_ {
        self.t.windows(2).map(|w| (w[0], w[1]))
    }
}

fn check_span(t_max: Real) -> PdResult<()> {
    if !t_max.is_finite() {
        return Err(PdError::NonFinite {
            what: "t_max",
            value: t_max,
        });
    }
    if t_max < 0.0 {
        return Err(PdError::InvalidArg {
            what: "t_max must be non-negative",
        });
    }
    Ok(())
}
