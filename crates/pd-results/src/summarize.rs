//! Scalar summaries over an already computed series.
//!
//! Nothing here integrates anything: every function reads the samples it
//! is given and nothing else.

use pd_core::Real;

/// Linear interpolation of `(t, y)` at `at`.
///
/// Queries outside the sampled range return the nearest endpoint value.
/// `t` must be non-decreasing. Returns `None` for empty or ragged input.
pub fn interpolate(t: &[Real], y: &[Real], at: Real) -> Option<Real> {
    if t.is_empty() || t.len() != y.len() {
        return None;
    }
    let last = t.len() - 1;
    if at <= t[0] {
        return Some(y[0]);
    }
    if at >= t[last] {
        return Some(y[last]);
    }
    // First index with t[j] > at; at > t[0] guarantees j >= 1.
    let j = t.partition_point(|&v| v <= at);
    let i = j - 1;
    let span = t[j] - t[i];
    if span == 0.0 {
        return Some(y[j]);
    }
    let w = (at - t[i]) / span;
    Some(y[i] + w * (y[j] - y[i]))
}

/// Sample at index `floor(at / dt)`, clamped into `[0, len - 1]`.
///
/// No interpolation: this is the nearest sample at or below `at` on a grid
/// advanced in steps of `dt`.
pub fn value_at_floor_index(y: &[Real], at: Real, dt: Real) -> Option<Real> {
    let last = y.len().checked_sub(1)?;
    if !(dt > 0.0) {
        return None;
    }
    let raw = (at / dt).floor();
    let idx = if raw.is_nan() || raw <= 0.0 {
        0
    } else if raw >= last as Real {
        last
    } else {
        raw as usize
    };
    Some(y[idx])
}

/// Global maximum of a series and where it occurs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Peak {
    pub value: Real,
    pub time: Real,
    pub index: usize,
}

/// First occurrence of the maximum of `y`. NaN samples are skipped.
pub fn peak(t: &[Real], y: &[Real]) -> Option<Peak> {
    if t.len() != y.len() {
        return None;
    }
    y.iter()
        .enumerate()
        .filter(|(_, v)| !v.is_nan())
        .fold(None, |best: Option<(usize, Real)>, (i, &v)| match best {
            Some((_, b)) if b >= v => best,
            _ => Some((i, v)),
        })
        .map(|(index, value)| Peak {
            value,
            time: t[index],
            index,
        })
}

pub fn final_value(y: &[Real]) -> Option<Real> {
    y.last().copied()
}
