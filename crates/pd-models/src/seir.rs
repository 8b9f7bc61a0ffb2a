//! SEIR epidemic: SIR with a latent (exposed) compartment.

use pd_core::{ModelId, ParameterSet, Real, TimeGrid};
use pd_results::{Compartment, Highlights, ResultEnvelope, keys, peak};
use pd_sim::{OdeSystem, State};

use crate::common::{read_params, record_to_series};
use crate::error::ModelResult;
use crate::options::EvalOptions;
use crate::traits::{FromParameters, ModelEvaluator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeirParams {
    pub s0: Real,
    pub e0: Real,
    pub i0: Real,
    pub r0: Real,
    pub beta: Real,
    /// Rate of progression from exposed to infectious (1 / incubation period)
    pub sigma: Real,
    pub gamma: Real,
    pub t_max: Real,
}

impl SeirParams {
    pub fn total(&self) -> Real {
        self.s0 + self.e0 + self.i0 + self.r0
    }
}

impl FromParameters for SeirParams {
    fn from_parameters(set: &ParameterSet) -> ModelResult<Self> {
        let [s0, e0, i0, r0, beta, sigma, gamma, t_max] = read_params(
            set,
            &["S0", "E0", "I0", "R0", "beta", "sigma", "gamma", "t_max"],
        )?;
        Ok(Self {
            s0,
            e0,
            i0,
            r0,
            beta,
            sigma,
            gamma,
            t_max,
        })
    }
}

impl OdeSystem<4> for SeirParams {
    fn initial_state(&self) -> State<4> {
        State::<4>::new(self.s0, self.e0, self.i0, self.r0)
    }

    fn rhs(&self, _t: Real, x: &State<4>) -> State<4> {
        let (s, e, i) = (x[0], x[1], x[2]);
        let infection = self.beta * s * i;
        let onset = self.sigma * e;
        let recovery = self.gamma * i;
        State::<4>::new(-infection, infection - onset, onset - recovery, recovery)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Seir;

impl ModelEvaluator for Seir {
    type Params = SeirParams;

    fn id(&self) -> ModelId {
        ModelId::Seir
    }

    fn evaluate(&self, p: &SeirParams, opts: &EvalOptions) -> ModelResult<ResultEnvelope> {
        let grid = TimeGrid::uniform(p.t_max, opts.seir_samples)?;
        let record = opts.ode.integrate(p, &grid)?;
        let series = record_to_series(
            record,
            [
                Compartment::Susceptible,
                Compartment::Exposed,
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
    use pd_sim::{GeneralOdeSolve, OdeMethod};

    fn params() -> SeirParams {
        SeirParams {
            s0: 990.0,
            e0: 5.0,
            i0: 5.0,
            r0: 0.0,
            beta: 0.002,
            sigma: 0.3,
            gamma: 0.5,
            t_max: 80.0,
        }
    }

    #[test]
    fn population_is_conserved() {
        let env = Seir.evaluate(&params(), &EvalOptions::default()).unwrap();
        assert_eq!(env.series.len(), 500);
        for i in 0..env.series.len() {
            let total = env.series.state_total(i).unwrap();
            assert!((total - 1000.0).abs() < 1e-6, "sample {i}: {total}");
        }
    }

    #[test]
    fn peak_time_is_where_infected_is_largest() {
        let env = Seir.evaluate(&params(), &EvalOptions::default()).unwrap();
        let t = env.series.times();
        let infected = env.series.channel(Compartment::Infected).unwrap();
        let peak_value = env.highlights.get(keys::PEAK_INFECTED).unwrap();
        let peak_time = env.highlights.get(keys::PEAK_TIME).unwrap();
        let idx = t.iter().position(|&x| x == peak_time).unwrap();
        assert_eq!(infected[idx], peak_value);
        assert!(peak_time > 0.0);
    }

    #[test]
    fn rk4_and_dopri5_agree_closely() {
        let dopri = Seir.evaluate(&params(), &EvalOptions::default()).unwrap();
        let opts = EvalOptions {
            ode: GeneralOdeSolve::new(OdeMethod::Rk4),
            ..EvalOptions::default()
        };
        let rk4 = Seir.evaluate(&params(), &opts).unwrap();
        let a = dopri.highlights.get(keys::PEAK_INFECTED).unwrap();
        let b = rk4.highlights.get(keys::PEAK_INFECTED).unwrap();
        assert!((a - b).abs() < 1e-3 * a);
    }
}
