//! Exponential growth, `dP/dt = r P`, sampled from its closed form.

use pd_core::{ModelId, ParameterSet, Real, TimeGrid};
use pd_results::{Compartment, Highlights, ResultEnvelope, keys};
use pd_sim::{ClosedForm, State};

use crate::common::{clamp_t_eval, read_params, record_to_series};
use crate::error::ModelResult;
use crate::options::EvalOptions;
use crate::traits::{FromParameters, ModelEvaluator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialParams {
    pub p0: Real,
    pub r: Real,
    pub t_max: Real,
    pub t_eval: Real,
}

impl ExponentialParams {
    /// `P(t) = P0 e^(r t)`
    pub fn population(&self, t: Real) -> Real {
        self.p0 * (self.r * t).exp()
    }
}

impl FromParameters for ExponentialParams {
    fn from_parameters(set: &ParameterSet) -> ModelResult<Self> {
        let [p0, r, t_max, t_eval] = read_params(set, &["P0", "r", "t_max", "t_eval"])?;
        Ok(Self {
            p0,
            r,
            t_max,
            t_eval,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Exponential;

impl ModelEvaluator for Exponential {
    type Params = ExponentialParams;

    fn id(&self) -> ModelId {
        ModelId::Exponential
    }

    fn evaluate(&self, p: &ExponentialParams, opts: &EvalOptions) -> ModelResult<ResultEnvelope> {
        let t_eval = clamp_t_eval(p.t_eval, p.t_max);
        let grid = TimeGrid::uniform(p.t_max, opts.exponential_samples)?;
        let record = ClosedForm.sample(&grid, |t| State::<1>::new(p.population(t)));
        let series = record_to_series(record, [Compartment::Population], Vec::new())?;

        // Straight from the formula, not read back off the grid.
        let highlights = Highlights::new()
            .with(keys::VALUE_AT_T_EVAL, p.population(t_eval))
            .with(keys::T_EVAL, t_eval);

        Ok(ResultEnvelope {
            model: self.id(),
            series,
            highlights,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pd_core::{Tolerances, nearly_equal};

    fn params(t_eval: Real) -> ExponentialParams {
        ExponentialParams {
            p0: 10.0,
            r: 0.2,
            t_max: 10.0,
            t_eval,
        }
    }

    #[test]
    fn value_at_t_eval_matches_formula() {
        let env = Exponential
            .evaluate(&params(5.0), &EvalOptions::default())
            .unwrap();
        let v = env.highlights.get(keys::VALUE_AT_T_EVAL).unwrap();
        assert!(nearly_equal(v, 10.0 * 1.0_f64.exp(), Tolerances::default()));
        assert!((v - 27.18).abs() < 0.01);
    }

    #[test]
    fn t_eval_is_clamped_to_t_max() {
        let env = Exponential
            .evaluate(&params(25.0), &EvalOptions::default())
            .unwrap();
        assert_eq!(env.highlights.get(keys::T_EVAL), Some(10.0));
        let v = env.highlights.get(keys::VALUE_AT_T_EVAL).unwrap();
        assert!(nearly_equal(v, 10.0 * 2.0_f64.exp(), Tolerances::default()));
    }

    #[test]
    fn series_spans_grid() {
        let env = Exponential
            .evaluate(&params(5.0), &EvalOptions::default())
            .unwrap();
        let t = env.series.times();
        assert_eq!(t.len(), 200);
        assert_eq!(t[0], 0.0);
        assert_eq!(t[199], 10.0);
        let p = env.series.channel(Compartment::Population).unwrap();
        assert_eq!(p[0], 10.0);
    }
}
