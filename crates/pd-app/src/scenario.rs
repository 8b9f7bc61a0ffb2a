//! Scenario files: a model id with its parameter values, stored as YAML.
//!
//! ```yaml
//! model: sir
//! params:
//!   S0: 990
//!   I0: 10
//!   R0: 0
//!   beta: 0.3
//!   gamma: 0.1
//!   t_max: 160
//! ```
//!
//! A `null` value is kept as an explicitly absent parameter.

use std::path::Path;

use pd_core::{ModelId, ParameterSet};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scenario {
    pub model: ModelId,
    #[serde(default)]
    pub params: ParameterSet,
}

impl Scenario {
    pub fn new(model: ModelId, params: ParameterSet) -> Self {
        Self { model, params }
    }

    /// Scenario pre-filled with the catalogue defaults for `model`.
    pub fn with_defaults(model: ModelId) -> Self {
        Self::new(model, model.default_params())
    }
}

pub fn parse_scenario(yaml: &str) -> AppResult<Scenario> {
    serde_yaml::from_str(yaml)
        .map_err(|e| AppError::Scenario(format!("Failed to parse scenario YAML: {}", e)))
}

pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let content = std::fs::read_to_string(path).map_err(|e| AppError::FileRead {
        what: "scenario",
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_scenario(&content)
}

pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    let yaml = serde_yaml::to_string(scenario)
        .map_err(|e| AppError::Scenario(format!("Failed to serialize scenario: {}", e)))?;
    std::fs::write(path, yaml)?;
    Ok(())
}
