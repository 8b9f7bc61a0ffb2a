//! Named numeric inputs for one evaluation.
//!
//! A value may be explicitly absent (`None`), which is how an unfinished
//! form field arrives from a front end.

use std::collections::BTreeMap;

use crate::numeric::Real;
use crate::{PdError, PdResult};

/// Mapping from parameter name to an optional value.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ParameterSet {
    values: BTreeMap<String, Option<Real>>,
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert of a present value.
    pub fn with(mut self, name: &str, value: Real) -> Self {
        self.set(name, Some(value));
        self
    }

    /// Builder-style insert of an explicitly absent value.
    pub fn without(mut self, name: &str) -> Self {
        self.set(name, None);
        self
    }

    pub fn set(&mut self, name: &str, value: Option<Real>) {
        self.values.insert(canonical_name(name).to_string(), value);
    }

    /// Usable value for `name`: present, not `None` and finite.
    pub fn get(&self, name: &str) -> Option<Real> {
        self.values
            .get(canonical_name(name))
            .copied()
            .flatten()
            .filter(|v| v.is_finite())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Names from `required` without a usable value, in the order given.
    pub fn missing(&self, required: &[&str]) -> Vec<String> {
        required
            .iter()
            .filter(|name| !self.contains(name))
            .map(|name| (*name).to_string())
            .collect()
    }

    /// Fail with every missing name at once, not just the first.
    pub fn require_all(&self, required: &[&str]) -> PdResult<()> {
        let names = self.missing(required);
        if names.is_empty() {
            Ok(())
        } else {
            Err(PdError::MissingParameter { names })
        }
    }

    pub fn require(&self, name: &str) -> PdResult<Real> {
        self.get(name).ok_or_else(|| PdError::MissingParameter {
            names: vec![name.to_string()],
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<Real>)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Overlay `other` on top of `self`; `other` wins on conflicts.
    pub fn merged(mut self, other: &ParameterSet) -> Self {
        for (name, value) in other.iter() {
            self.set(name, value);
        }
        self
    }

    /// Parse `NAME=VALUE`. An empty value or `none` means explicitly absent.
    pub fn parse_assignment(input: &str) -> PdResult<(String, Option<Real>)> {
        let malformed = || PdError::ParseParam {
            input: input.to_string(),
        };
        let (name, raw) = input.split_once('=').ok_or_else(malformed)?;
        let name = name.trim();
        if name.is_empty() {
            return Err(malformed());
        }
        let raw = raw.trim();
        let value = if raw.is_empty() || raw.eq_ignore_ascii_case("none") {
            None
        } else {
            Some(raw.parse::<Real>().map_err(|_| malformed())?)
        };
        Ok((canonical_name(name).to_string(), value))
    }
}

impl FromIterator<(String, Option<Real>)> for ParameterSet {
    fn from_iter<I: IntoIterator<Item = (String, Option<Real>)>>(iter: I) -> Self {
        let mut set = ParameterSet::new();
        for (name, value) in iter {
            set.set(&name, value);
        }
        set
    }
}

/// Spelling variants accepted for the time parameters.
fn canonical_name(name: &str) -> &str {
    match name {
        "tmax" | "tMax" | "t_end" => "t_max",
        "teval" | "tEval" => "t_eval",
        other => other,
    }
}
