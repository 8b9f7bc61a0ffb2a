//! SIR epidemic integrated with the general-purpose ODE solver.

use pd_core::{ModelId, ParameterSet, Real, TimeGrid};
use pd_results::{Compartment, Highlights, ResultEnvelope, keys, peak};
use pd_sim::{OdeSystem, State};

use crate::common::{read_params, record_to_series};
use crate::error::ModelResult;
use crate::options::EvalOptions;
use crate::traits::{FromParameters, ModelEvaluator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SirParams {
    pub s0: Real,
    pub i0: Real,
    pub r0: Real,
    pub beta: Real,
    pub gamma: Real,
    pub t_max: Real,
}

impl SirParams {
    pub fn total(&self) -> Real {
        self.s0 + self.i0 + self.r0
    }
}

impl FromParameters for SirParams {
    fn from_parameters(set: &ParameterSet) -> ModelResult<Self> {
        let [s0, i0, r0, beta, gamma, t_max] =
            read_params(set, &["S0", "I0", "R0", "beta", "gamma", "t_max"])?;
        Ok(Self {
            s0,
            i0,
            r0,
            beta,
            gamma,
            t_max,
        })
    }
}

impl OdeSystem<3> for SirParams {
    fn initial_state(&self) -> State<3> {
        State::<3>::new(self.s0, self.i0, self.r0)
    }

    fn rhs(&self, _t: Real, x: &State<3>) -> State<3> {
        let (s, i) = (x[0], x[1]);
        let infection = self.beta * s * i;
        let recovery = self.gamma * i;
        State::<3>::new(-infection, infection - recovery, recovery)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Sir;

impl ModelEvaluator for Sir {
    type Params = SirParams;

    fn id(&self) -> ModelId {
        ModelId::Sir
    }

    fn evaluate(&self, p: &SirParams, opts: &EvalOptions) -> ModelResult<ResultEnvelope> {
        let grid = TimeGrid::uniform(p.t_max, opts.sir_samples)?;
        let record = opts.ode.integrate(p, &grid)?;
        let series = record_to_series(
            record,
            [
                Compartment::Susceptible,
                Compartment::Infected,
                Compartment::Recovered,
            ],
            Vec::new(),
        )?;

        let mut highlights = Highlights::new().with(keys::TOTAL_POPULATION, p.total());
        if let Some(top) = series
            .channel(Compartment::Infected)
            .and_then(|infected| peak(series.times(), infected))
        {
            highlights.insert(keys::PEAK_INFECTED, top.value);
            highlights.insert(keys::PEAK_TIME, top.time);
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

    fn params() -> SirParams {
        SirParams {
            s0: 990.0,
            i0: 10.0,
            r0: 0.0,
            beta: 0.002,
            gamma: 0.5,
            t_max: 60.0,
        }
    }

    #[test]
    fn population_is_conserved() {
        let env = Sir.evaluate(&params(), &EvalOptions::default()).unwrap();
        assert_eq!(env.series.len(), 400);
        for i in 0..env.series.len() {
            let total = env.series.state_total(i).unwrap();
            assert!((total - 1000.0).abs() < 1e-6, "sample {i}: {total}");
        }
    }

    #[test]
    fn outbreak_peaks_then_burns_out() {
        let env = Sir.evaluate(&params(), &EvalOptions::default()).unwrap();
        let infected = env.series.channel(Compartment::Infected).unwrap();
        let peak_value = env.highlights.get(keys::PEAK_INFECTED).unwrap();
        let peak_time = env.highlights.get(keys::PEAK_TIME).unwrap();
        assert!(infected.iter().all(|&v| v <= peak_value));
        assert!(peak_value > 10.0);
        assert!(peak_time > 0.0 && peak_time < 60.0);
        assert!(*infected.last().unwrap() < 1.0);
    }

    #[test]
    fn below_threshold_infection_only_declines() {
        // beta * S0 < gamma: no outbreak, the peak is the first sample.
        let p = SirParams {
            beta: 0.0001,
            ..params()
        };
        let env = Sir.evaluate(&p, &EvalOptions::default()).unwrap();
        assert_eq!(env.highlights.get(keys::PEAK_INFECTED), Some(10.0));
        assert_eq!(env.highlights.get(keys::PEAK_TIME), Some(0.0));
    }
}
