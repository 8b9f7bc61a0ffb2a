//! Model identifiers and their parameter catalogue.

use core::fmt;
use core::str::FromStr;

use crate::params::ParameterSet;
use crate::{PdError, PdResult};

/// The population/epidemic models the engine knows how to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum ModelId {
    Exponential,
    LogisticVariableRate,
    LogisticMigration,
    Si,
    Sir,
    Seir,
}

impl ModelId {
    pub const fn all() -> [ModelId; 6] {
        [
            ModelId::Exponential,
            ModelId::LogisticVariableRate,
            ModelId::LogisticMigration,
            ModelId::Si,
            ModelId::Sir,
            ModelId::Seir,
        ]
    }

    /// Stable machine name (used on the command line and in serialized output).
    pub const fn name(self) -> &'static str {
        match self {
            ModelId::Exponential => "exponential",
            ModelId::LogisticVariableRate => "logistic_variable_rate",
            ModelId::LogisticMigration => "logistic_migration",
            ModelId::Si => "si",
            ModelId::Sir => "sir",
            ModelId::Seir => "seir",
        }
    }

    pub const fn display_name(self) -> &'static str {
        match self {
            ModelId::Exponential => "Exponential growth",
            ModelId::LogisticVariableRate => "Logistic growth with variable rate",
            ModelId::LogisticMigration => "Logistic growth with migration",
            ModelId::Si => "SI epidemic",
            ModelId::Sir => "SIR epidemic",
            ModelId::Seir => "SEIR epidemic",
        }
    }

    pub const fn equation(self) -> &'static str {
        match self {
            ModelId::Exponential => "dP/dt = r*P",
            ModelId::LogisticVariableRate => {
                "dP/dt = r(t)*P*(1 - P/K), r(t) = r0*(1 + alpha*sin(omega*t))"
            }
            ModelId::LogisticMigration => "dP/dt = r*P*(1 - P/K) + M",
            ModelId::Si => "dS/dt = -beta*S*I, dI/dt = beta*S*I",
            ModelId::Sir => "dS/dt = -beta*S*I, dI/dt = beta*S*I - gamma*I, dR/dt = gamma*I",
            ModelId::Seir => {
                "dS/dt = -beta*S*I, dE/dt = beta*S*I - sigma*E, dI/dt = sigma*E - gamma*I, dR/dt = gamma*I"
            }
        }
    }

    /// Parameter names that must all be present before evaluation runs.
    pub const fn required_params(self) -> &'static [&'static str] {
        match self {
            ModelId::Exponential => &["P0", "r", "t_max", "t_eval"],
            ModelId::LogisticVariableRate => &["P0", "K", "r0", "alpha", "omega", "t_max", "t_eval"],
            ModelId::LogisticMigration => &["P0", "r", "K", "M", "t_max", "t_eval"],
            ModelId::Si => &["S0", "I0", "beta", "t_max"],
            ModelId::Sir => &["S0", "I0", "R0", "beta", "gamma", "t_max"],
            ModelId::Seir => &["S0", "E0", "I0", "R0", "beta", "sigma", "gamma", "t_max"],
        }
    }

    /// Starting values offered to a user before they edit anything.
    pub fn default_params(self) -> ParameterSet {
        let pairs: &[(&str, f64)] = match self {
            ModelId::Exponential => &[("P0", 10.0), ("r", 0.2), ("t_max", 10.0), ("t_eval", 5.0)],
            ModelId::LogisticVariableRate => &[
                ("P0", 10.0),
                ("K", 150.0),
                ("r0", 0.15),
                ("alpha", 0.5),
                ("omega", 0.2),
                ("t_max", 60.0),
                ("t_eval", 20.0),
            ],
            ModelId::LogisticMigration => &[
                ("P0", 20.0),
                ("r", 0.15),
                ("K", 150.0),
                ("M", 5.0),
                ("t_max", 60.0),
                ("t_eval", 20.0),
            ],
            ModelId::Si => &[("S0", 90.0), ("I0", 10.0), ("beta", 0.002), ("t_max", 50.0)],
            ModelId::Sir => &[
                ("S0", 990.0),
                ("I0", 10.0),
                ("R0", 0.0),
                ("beta", 0.002),
                ("gamma", 0.5),
                ("t_max", 60.0),
            ],
            ModelId::Seir => &[
                ("S0", 990.0),
                ("E0", 5.0),
                ("I0", 5.0),
                ("R0", 0.0),
                ("beta", 0.002),
                ("sigma", 0.3),
                ("gamma", 0.5),
                ("t_max", 80.0),
            ],
        };
        pairs
            .iter()
            .fold(ParameterSet::new(), |set, &(name, value)| set.with(name, value))
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelId {
    type Err = PdError;

    fn from_str(s: &str) -> PdResult<Self> {
        let key = s.trim().to_ascii_lowercase().replace('-', "_");
        ModelId::all()
            .into_iter()
            .find(|m| m.name() == key)
            .or_else(|| match key.as_str() {
                "logistic_variable" | "logvar" => Some(ModelId::LogisticVariableRate),
                "logistic_migration_rate" | "logmig" => Some(ModelId::LogisticMigration),
                _ => None,
            })
            .ok_or_else(|| PdError::UnknownModel {
                name: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for model in ModelId::all() {
            assert_eq!(model.name().parse::<ModelId>().unwrap(), model);
        }
    }

    #[test]
    fn parse_is_lenient_about_case_and_dashes() {
        assert_eq!("SEIR".parse::<ModelId>().unwrap(), ModelId::Seir);
        assert_eq!(
            "logistic-migration".parse::<ModelId>().unwrap(),
            ModelId::LogisticMigration
        );
        assert_eq!(
            "logvar".parse::<ModelId>().unwrap(),
            ModelId::LogisticVariableRate
        );
    }

    #[test]
    fn unknown_model_is_reported() {
        let err = "gompertz".parse::<ModelId>().unwrap_err();
        assert_eq!(
            err,
            PdError::UnknownModel {
                name: "gompertz".to_string()
            }
        );
    }

    #[test]
    fn defaults_cover_required_params() {
        for model in ModelId::all() {
            let defaults = model.default_params();
            assert!(
                defaults.missing(model.required_params()).is_empty(),
                "{model} defaults incomplete"
            );
        }
    }
}
