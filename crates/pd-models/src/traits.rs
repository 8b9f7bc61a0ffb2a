//! Core traits for model evaluators and the dispatch keyed by model id.

use pd_core::{ModelId, ParameterSet};
use pd_results::ResultEnvelope;

use crate::error::ModelResult;
use crate::options::EvalOptions;
use crate::{Exponential, LogisticMigration, LogisticVariableRate, Seir, Si, Sir};

/// Typed parameters extracted from a loose [`ParameterSet`].
pub trait FromParameters: Sized {
    /// Fails with every missing name when any required field is unusable.
    fn from_parameters(set: &ParameterSet) -> ModelResult<Self>;
}

/// One model: typed parameters in, series plus highlights out.
///
/// Evaluators hold no state, so a single instance can serve any number of
/// threads.
pub trait ModelEvaluator: Send + Sync {
    type Params: FromParameters;

    fn id(&self) -> ModelId;

    fn evaluate(&self, params: &Self::Params, opts: &EvalOptions) -> ModelResult<ResultEnvelope>;
}

/// Extract typed parameters and run one evaluator.
pub fn evaluate_with<E: ModelEvaluator>(
    evaluator: &E,
    set: &ParameterSet,
    opts: &EvalOptions,
) -> ModelResult<ResultEnvelope> {
    let params = E::Params::from_parameters(set)?;
    evaluator.evaluate(&params, opts)
}

/// Evaluate `model` on `set`.
pub fn evaluate(
    model: ModelId,
    set: &ParameterSet,
    opts: &EvalOptions,
) -> ModelResult<ResultEnvelope> {
    match model {
        ModelId::Exponential => evaluate_with(&Exponential, set, opts),
        ModelId::LogisticVariableRate => evaluate_with(&LogisticVariableRate, set, opts),
        ModelId::LogisticMigration => evaluate_with(&LogisticMigration, set, opts),
        ModelId::Si => evaluate_with(&Si, set, opts),
        ModelId::Sir => evaluate_with(&Sir, set, opts),
        ModelId::Seir => evaluate_with(&Seir, set, opts),
    }
}
