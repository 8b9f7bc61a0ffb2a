//! Logistic growth with constant net migration, `dP/dt = r P (1 - P/K) + M`.
//!
//! Grid density follows a fixed nominal step rather than a sample count, and
//! every stepped value is floored at zero.

use pd_core::{ModelId, ParameterSet, Real, TimeGrid};
use pd_results::{Compartment, Highlights, ResultEnvelope, keys, value_at_floor_index};
use pd_sim::{FixedStepEuler, OdeSystem, State};

use crate::common::{clamp_t_eval, read_params, record_to_series};
use crate::error::ModelResult;
use crate::options::EvalOptions;
use crate::traits::{FromParameters, ModelEvaluator};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticMigrationParams {
    pub p0: Real,
    pub r: Real,
    pub k: Real,
    pub m: Real,
    pub t_max: Real,
    pub t_eval: Real,
}

impl LogisticMigrationParams {
    /// Largest root of `r P (1 - P/K) + M = 0`, when it is real.
    ///
    /// Only defined for a growing population with a positive ceiling.
    pub fn equilibrium(&self) -> Option<Real> {
        if !(self.r > 0.0 && self.k > 0.0) {
            return None;
        }
        let disc = 1.0 + 4.0 * self.m / (self.r * self.k);
        (disc >= 0.0).then(|| self.k / 2.0 * (1.0 + disc.sqrt()))
    }
}

impl FromParameters for LogisticMigrationParams {
    fn from_parameters(set: &ParameterSet) -> ModelResult<Self> {
        let [p0, r, k, m, t_max, t_eval] =
            read_params(set, &["P0", "r", "K", "M", "t_max", "t_eval"])?;
        Ok(Self {
            p0,
            r,
            k,
            m,
            t_max,
            t_eval,
        })
    }
}

impl OdeSystem<1> for LogisticMigrationParams {
    fn initial_state(&self) -> State<1> {
        State::<1>::new(self.p0)
    }

    fn rhs(&self, _t: Real, x: &State<1>) -> State<1> {
        let p = x[0];
        State::<1>::new(self.r * p * (1.0 - p / self.k) + self.m)
    }

    /// Population cannot go negative.
    fn project(&self, x: State<1>) -> State<1> {
        x.map(|p| if p < 0.0 { 0.0 } else { p })
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LogisticMigration;

impl ModelEvaluator for LogisticMigration {
    type Params = LogisticMigrationParams;

    fn id(&self) -> ModelId {
        ModelId::LogisticMigration
    }

    fn evaluate(
        &self,
        p: &LogisticMigrationParams,
        opts: &EvalOptions,
    ) -> ModelResult<ResultEnvelope> {
        let t_eval = clamp_t_eval(p.t_eval, p.t_max);
        let dt = opts.migration_dt;

        let grid = TimeGrid::stepped(p.t_max, dt)?;
        let record = FixedStepEuler::with_step(dt)?.integrate(p, &grid)?;
        let series = record_to_series(record, [Compartment::Population], Vec::new())?;

        let mut highlights = Highlights::new()
            .with(keys::T_EVAL, t_eval)
            .with(keys::CARRYING_CAPACITY, p.k);
        if let Some(v) = series
            .channel(Compartment::Population)
            .and_then(|pop| value_at_floor_index(pop, t_eval, dt))
        {
            highlights.insert(keys::VALUE_AT_T_EVAL, v);
        }
        if let Some(eq) = p.equilibrium() {
            highlights.insert(keys::EQUILIBRIUM_POPULATION, eq);
        }

        Ok(ResultEnvelope {
            model: self.id(),
            series,
            highlights,
        })
    }
}
