//! Engine configuration: grid sizes, ODE method and tolerances.
//!
//! Every field has a default, so an empty YAML document (or no file at all)
//! yields the stock engine.

use std::path::Path;

use pd_core::Real;
use pd_models::EvalOptions;
use pd_sim::{GeneralOdeSolve, OdeMethod, ode::DEFAULT_TOLERANCE};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SamplingConfig {
    pub exponential: usize,
    pub logistic_variable_rate: usize,
    /// Nominal Euler step for the migration model (grid size is t_max / dt).
    pub logistic_migration_dt: Real,
    pub si: usize,
    pub sir: usize,
    pub seir: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        let opts = EvalOptions::default();
        Self {
            exponential: opts.exponential_samples,
            logistic_variable_rate: opts.logistic_variable_samples,
            logistic_migration_dt: opts.migration_dt,
            si: opts.si_samples,
            sir: opts.sir_samples,
            seir: opts.seir_samples,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OdeMethodConfig {
    #[default]
    Dopri5,
    Rk4,
}

impl From<OdeMethodConfig> for OdeMethod {
    fn from(m: OdeMethodConfig) -> Self {
        match m {
            OdeMethodConfig::Dopri5 => OdeMethod::Dopri5,
            OdeMethodConfig::Rk4 => OdeMethod::Rk4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OdeConfig {
    pub method: OdeMethodConfig,
    pub rtol: Real,
    pub atol: Real,
    pub rk4_substeps: usize,
}

impl Default for OdeConfig {
    fn default() -> Self {
        Self {
            method: OdeMethodConfig::default(),
            rtol: DEFAULT_TOLERANCE,
            atol: DEFAULT_TOLERANCE,
            rk4_substeps: GeneralOdeSolve::default().substeps,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    pub sampling: SamplingConfig,
    pub ode: OdeConfig,
    /// Log wall time of every evaluation.
    pub timing: bool,
}

impl EngineConfig {
    pub fn validate(&self) -> AppResult<()> {
        let s = &self.sampling;
        for (name, n) in [
            ("sampling.exponential", s.exponential),
            ("sampling.logistic_variable_rate", s.logistic_variable_rate),
            ("sampling.si", s.si),
            ("sampling.sir", s.sir),
            ("sampling.seir", s.seir),
        ] {
            if n < 2 {
                return Err(AppError::Config(format!(
                    "{name} must be at least 2 (got {n})"
                )));
            }
        }
        if !(s.logistic_migration_dt.is_finite() && s.logistic_migration_dt > 0.0) {
            return Err(AppError::Config(format!(
                "sampling.logistic_migration_dt must be positive (got {})",
                s.logistic_migration_dt
            )));
        }
        for (name, tol) in [("ode.rtol", self.ode.rtol), ("ode.atol", self.ode.atol)] {
            if !(tol.is_finite() && tol > 0.0) {
                return Err(AppError::Config(format!(
                    "{name} must be positive (got {tol})"
                )));
            }
        }
        if self.ode.rk4_substeps == 0 {
            return Err(AppError::Config(
                "ode.rk4_substeps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn eval_options(&self) -> EvalOptions {
        EvalOptions {
            exponential_samples: self.sampling.exponential,
            logistic_variable_samples: self.sampling.logistic_variable_rate,
            migration_dt: self.sampling.logistic_migration_dt,
            si_samples: self.sampling.si,
            sir_samples: self.sampling.sir,
            seir_samples: self.sampling.seir,
            ode: GeneralOdeSolve {
                method: self.ode.method.into(),
                rtol: self.ode.rtol,
                atol: self.ode.atol,
                substeps: self.ode.rk4_substeps,
            },
        }
    }
}

pub fn parse_config(yaml: &str) -> AppResult<EngineConfig> {
    if yaml.trim().is_empty() {
        return Ok(EngineConfig::default());
    }
    let config: EngineConfig = serde_yaml::from_str(yaml)
        .map_err(|e| AppError::Config(format!("Failed to parse config YAML: {}", e)))?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a YAML file.
pub fn load_config(path: &Path) -> AppResult<EngineConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        what: "config",
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        assert_eq!(parse_config("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn defaults_match_engine_defaults() {
        let opts = EngineConfig::default().eval_options();
        assert_eq!(opts.exponential_samples, 200);
        assert_eq!(opts.logistic_variable_samples, 400);
        assert_eq!(opts.migration_dt, 0.1);
        assert_eq!(opts.si_samples, 300);
        assert_eq!(opts.sir_samples, 400);
        assert_eq!(opts.seir_samples, 500);
        assert_eq!(opts.ode.method, OdeMethod::Dopri5);
    }

    #[test]
    fn partial_document_keeps_other_defaults() {
        let config = parse_config("sampling:\n  sir: 1000\node:\n  method: rk4\n").unwrap();
        assert_eq!(config.sampling.sir, 1000);
        assert_eq!(config.sampling.seir, 500);
        assert_eq!(config.ode.method, OdeMethodConfig::Rk4);
        assert_eq!(config.eval_options().ode.method, OdeMethod::Rk4);
    }

    #[test]
    fn invalid_values_rejected() {
        assert!(parse_config("sampling:\n  si: 1\n").is_err());
        assert!(parse_config("sampling:\n  logistic_migration_dt: 0\n").is_err());
        assert!(parse_config("ode:\n  rtol: -1\n").is_err());
        assert!(parse_config("ode:\n  rk4_substeps: 0\n").is_err());
    }

    #[test]
    fn unknown_keys_rejected() {
        let err = parse_config("samplng:\n  si: 10\n").unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }
}
