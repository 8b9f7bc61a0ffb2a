//! Single entry point for front ends: model id plus parameters in, an
//! [`Outcome`] out.

use pd_core::timing::{AccumulatingTimer, Timer};
use pd_core::{ModelId, ParameterSet};
use pd_models::{EvalOptions, ModelError};
use pd_results::{EnvelopeRecord, ResultEnvelope};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::error::{AppError, AppResult};

static EVALUATIONS: AccumulatingTimer = AccumulatingTimer::new();

/// Result of one evaluation request.
///
/// Missing inputs are an expected state while a form is being filled in,
/// so they are reported here rather than as an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Ok(ResultEnvelope),
    Incomplete { missing: Vec<String> },
}

impl Outcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, Outcome::Ok(_))
    }

    pub fn is_incomplete(&self) -> bool {
        matches!(self, Outcome::Incomplete { .. })
    }

    pub fn envelope(&self) -> Option<&ResultEnvelope> {
        match self {
            Outcome::Ok(envelope) => Some(envelope),
            Outcome::Incomplete { .. } => None,
        }
    }

    pub fn into_envelope(self) -> Option<ResultEnvelope> {
        match self {
            Outcome::Ok(envelope) => Some(envelope),
            Outcome::Incomplete { .. } => None,
        }
    }

    pub fn to_record(&self) -> OutcomeRecord {
        match self {
            Outcome::Ok(envelope) => OutcomeRecord::Ok(envelope.to_record()),
            Outcome::Incomplete { missing } => OutcomeRecord::Incomplete {
                missing: missing.clone(),
            },
        }
    }
}

/// Serializable form of an [`Outcome`], tagged by `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum OutcomeRecord {
    Ok(EnvelopeRecord),
    Incomplete { missing: Vec<String> },
}

/// Stateless evaluation facade. Cheap to clone and safe to share between
/// threads; every call recomputes from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SimulationFacade {
    options: EvalOptions,
}

impl SimulationFacade {
    pub fn new(config: &EngineConfig) -> AppResult<Self> {
        config.validate()?;
        Ok(Self {
            options: config.eval_options(),
        })
    }

    pub fn with_options(options: EvalOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &EvalOptions {
        &self.options
    }

    /// Evaluate `model` on `params`.
    ///
    /// Returns `Outcome::Incomplete` listing every required name that is
    /// absent or non-finite; nothing is computed in that case.
    pub fn evaluate(&self, model: ModelId, params: &ParameterSet) -> AppResult<Outcome> {
        let missing = params.missing(model.required_params());
        if !missing.is_empty() {
            debug!(%model, ?missing, "evaluation skipped: incomplete parameters");
            return Ok(Outcome::Incomplete { missing });
        }

        if let Some(t_max) = params.get("t_max")
            && t_max < 0.0
        {
            return Err(AppError::InvalidInput(format!(
                "t_max must be non-negative (got {t_max})"
            )));
        }

        let timer = Timer::start("evaluate");
        let result = pd_models::evaluate(model, params, &self.options);
        if let Some(elapsed) = timer.stop() {
            EVALUATIONS.record(elapsed);
            info!(
                %model,
                elapsed_ms = elapsed * 1e3,
                calls = EVALUATIONS.count(),
                avg_ms = EVALUATIONS.average_seconds() * 1e3,
                "evaluation timing"
            );
        }

        match result {
            Ok(envelope) => {
                debug!(
                    %model,
                    samples = envelope.series.len(),
                    highlights = envelope.highlights.len(),
                    "evaluation complete"
                );
                Ok(Outcome::Ok(envelope))
            }
            Err(ModelError::Incomplete { names }) => Ok(Outcome::Incomplete { missing: names }),
            Err(e) => Err(e.into()),
        }
    }
}

/// Evaluate with the default engine configuration.
pub fn evaluate(model: ModelId, params: &ParameterSet) -> AppResult<Outcome> {
    SimulationFacade::default().evaluate(model, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_names_reported_without_computing() {
        let params = ModelId::Sir.default_params().without("gamma");
        let outcome = evaluate(ModelId::Sir, &params).unwrap();
        assert_eq!(
            outcome,
            Outcome::Incomplete {
                missing: vec!["gamma".to_string()]
            }
        );
        assert!(outcome.envelope().is_none());
    }

    #[test]
    fn negative_t_max_is_invalid_input() {
        for model in ModelId::all() {
            let params = model.default_params().with("t_max", -1.0);
            let err = evaluate(model, &params).unwrap_err();
            assert!(matches!(err, AppError::InvalidInput(_)), "{model}: {err:?}");
        }
    }

    #[test]
    fn incomplete_record_serializes_with_status() {
        let outcome = Outcome::Incomplete {
            missing: vec!["r".to_string(), "K".to_string()],
        };
        let json = serde_json::to_value(outcome.to_record()).unwrap();
        assert_eq!(json["status"], "incomplete");
        assert_eq!(json["missing"][1], "K");
    }

    #[test]
    fn ok_record_serializes_with_status() {
        let outcome = evaluate(ModelId::Si, &ModelId::Si.default_params()).unwrap();
        let json = serde_json::to_value(outcome.to_record()).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["model"], "si");
        assert!(json["series"].as_array().unwrap().len() > 1);
        assert!(json["highlights"]["total_population"].is_number());
    }

    #[test]
    fn invalid_config_rejected_by_constructor() {
        let mut config = EngineConfig::default();
        config.sampling.sir = 0;
        assert!(SimulationFacade::new(&config).is_err());
    }
}
