//! Logistic growth with a periodically varying rate.
//!
//! `dP/dt = r(t) P (1 - P/K)` with `r(t) = r0 (1 + alpha sin(omega t))`,
//! stepped with explicit Euler on a uniform grid.

use pd_core::{ModelId, ParameterSet, Real, TimeGrid};
use pd_results::{Channel, Compartment, Highlights, ResultEnvelope, interpolate, keys};
use pd_sim::{FixedStepEuler, OdeSystem, State};
use tracing::warn;

use crate::common::{clamp_t_eval, read_params, record_to_series};
use crate::error::ModelResult;
use crate::options::EvalOptions;
use crate::traits::{FromParameters, ModelEvaluator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticVariableRateParams {
    pub p0: Real,
    pub k: Real,
    pub r0: Real,
    pub alpha: Real,
    pub omega: Real,
    pub t_max: Real,
    pub t_eval: Real,
}

impl LogisticVariableRateParams {
    pub fn rate(&self, t: Real) -> Real {
        self.r0 * (1.0 + self.alpha * (self.omega * t).sin())
    }

    /// Initial population actually used: `P0 >= K` silently becomes `K/2`.
    pub fn effective_p0(&self) -> Real {
        if self.p0 >= self.k {
            self.k / 2.0
        } else {
            self.p0
        }
    }
}

impl FromParameters for LogisticVariableRateParams {
    fn from_parameters(set: &ParameterSet) -> ModelResult<Self> {
        let [p0, k, r0, alpha, omega, t_max, t_eval] =
            read_params(set, &["P0", "K", "r0", "alpha", "omega", "t_max", "t_eval"])?;
        Ok(Self {
            p0,
            k,
            r0,
            alpha,
            omega,
            t_max,
            t_eval,
        })
    }
}

struct VariableRateSystem {
    params: LogisticVariableRateParams,
    p0: Real,
}

impl OdeSystem<1> for VariableRateSystem {
    fn initial_state(&self) -> State<1> {
        State::<1>::new(self.p0)
    }

    fn rhs(&self, t: Real, x: &State<1>) -> State<1> {
        let p = x[0];
        State::<1>::new(self.params.rate(t) * p * (1.0 - p / self.params.k))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticVariableRate;

impl ModelEvaluator for LogisticVariableRate {
    type Params = LogisticVariableRateParams;

    fn id(&self) -> ModelId {
        ModelId::LogisticVariableRate
    }

    fn evaluate(
        &self,
        p: &LogisticVariableRateParams,
        opts: &EvalOptions,
    ) -> ModelResult<ResultEnvelope> {
        let p0 = p.effective_p0();
        if p0 != p.p0 {
            warn!(p0 = p.p0, k = p.k, "P0 >= K; starting from K/2 instead");
        }
        let t_eval = clamp_t_eval(p.t_eval, p.t_max);

        let grid = TimeGrid::uniform(p.t_max, opts.logistic_variable_samples)?;
        let system = VariableRateSystem { params: *p, p0 };
        let record = FixedStepEuler::new().integrate(&system, &grid)?;

        let rate = grid.times().iter().map(|&t| p.rate(t)).collect();
        let series = record_to_series(
            record,
            [Compartment::Population],
            vec![Channel::auxiliary(Compartment::GrowthRate, rate)],
        )?;

        let mut highlights = Highlights::new()
            .with(keys::T_EVAL, t_eval)
            .with(keys::CARRYING_CAPACITY, p.k)
            .with(keys::EFFECTIVE_P0, p0);
        // The stepped series has no closed form; read the value off the grid.
        if let Some(population) = series.channel(Compartment::Population)
            && let Some(v) = interpolate(series.times(), population, t_eval)
        {
            highlights.insert(keys::VALUE_AT_T_EVAL, v);
        }

        Ok(ResultEnvelope {
            model: self.id(),
            series,
            highlights,
        })
    }
}
