//! SI epidemic: susceptible and infected only, no recovery.
//!
//! With `N = S0 + I0` fixed, the infected share follows a logistic curve:
//! `I(t) = N I0 / (I0 + (N - I0) e^(-beta N t))`, `S(t) = N - I(t)`.

use pd_core::{ModelId, ParameterSet, Real, TimeGrid};
use pd_results::{Compartment, Highlights, ResultEnvelope, keys, summarize::final_value};
use pd_sim::{ClosedForm, State};

use crate::common::{read_params, record_to_series};
use crate::error::ModelResult;
use crate::options::EvalOptions;
use crate::traits::{FromParameters, ModelEvaluator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiParams {
    pub s0: Real,
    pub i0: Real,
    pub beta: Real,
    pub t_max: Real,
}

impl SiParams {
    pub fn total(&self) -> Real {
        self.s0 + self.i0
    }

    pub fn infected(&self, t: Real) -> Real {
        let n = self.total();
        n * self.i0 / (self.i0 + (n - self.i0) * (-self.beta * n * t).exp())
    }
}

impl FromParameters for SiParams {
    fn from_parameters(set: &ParameterSet) -> ModelResult<Self> {
        let [s0, i0, beta, t_max] = read_params(set, &["S0", "I0", "beta", "t_max"])?;
        Ok(Self {
            s0,
            i0,
            beta,
            t_max,
        })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Si;

impl ModelEvaluator for Si {
    type Params = SiParams;

    fn id(&self) -> ModelId {
        ModelId::Si
    }

    fn evaluate(&self, p: &SiParams, opts: &EvalOptions) -> ModelResult<ResultEnvelope> {
        let n = p.total();
        let grid = TimeGrid::uniform(p.t_max, opts.si_samples)?;
        let record = ClosedForm.sample(&grid, |t| {
            let i = p.infected(t);
            State::<2>::new(n - i, i)
        });
        let series = record_to_series(
            record,
            [Compartment::Susceptible, Compartment::Infected],
            Vec::new(),
        )?;

        let mut highlights = Highlights::new().with(keys::TOTAL_POPULATION, n);
        if let Some(i_end) = series.channel(Compartment::Infected).and_then(final_value) {
            highlights.insert(keys::FINAL_INFECTED, i_end);
        }

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

    fn params() -> SiParams {
        SiParams {
            s0: 90.0,
            i0: 10.0,
            beta: 0.002,
            t_max: 50.0,
        }
    }

    #[test]
    fn population_is_conserved() {
        let env = Si.evaluate(&params(), &EvalOptions::default()).unwrap();
        for i in 0..env.series.len() {
            assert!((env.series.state_total(i).unwrap() - 100.0).abs() < 1e-9);
        }
    }

    #[test]
    fn infected_rise_monotonically_toward_n() {
        let env = Si.evaluate(&params(), &EvalOptions::default()).unwrap();
        let infected = env.series.channel(Compartment::Infected).unwrap();
        assert_eq!(infected[0], 10.0);
        assert!(infected.windows(2).all(|w| w[1] >= w[0]));
        let i_end = env.highlights.get(keys::FINAL_INFECTED).unwrap();
        assert!(i_end > 95.0 && i_end < 100.0);
        assert!((i_end - params().infected(50.0)).abs() < 1e-12);
        assert!(params().infected(1_000.0) > 99.999);
    }

    #[test]
    fn samples_three_hundred_points() {
        let env = Si.evaluate(&params(), &EvalOptions::default()).unwrap();
        assert_eq!(env.series.len(), 300);
        assert_eq!(env.highlights.get(keys::TOTAL_POPULATION), Some(100.0));
    }
}
