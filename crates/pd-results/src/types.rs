//! Result data types.

use std::collections::BTreeMap;

use pd_core::{ModelId, Real};
use serde::{Deserialize, Serialize};

use crate::{ResultsError, ResultsResult};

/// Named quantity carried by a series channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Compartment {
    /// Single-population size.
    #[serde(rename = "P")]
    Population,
    #[serde(rename = "S")]
    Susceptible,
    #[serde(rename = "E")]
    Exposed,
    #[serde(rename = "I")]
    Infected,
    #[serde(rename = "R")]
    Recovered,
    /// Sampled time-varying growth rate r(t).
    #[serde(rename = "r")]
    GrowthRate,
}

impl Compartment {
    pub const fn symbol(self) -> &'static str {
        match self {
            Compartment::Population => "P",
            Compartment::Susceptible => "S",
            Compartment::Exposed => "E",
            Compartment::Infected => "I",
            Compartment::Recovered => "R",
            Compartment::GrowthRate => "r",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Compartment::Population => "Population",
            Compartment::Susceptible => "Susceptible",
            Compartment::Exposed => "Exposed",
            Compartment::Infected => "Infected",
            Compartment::Recovered => "Recovered",
            Compartment::GrowthRate => "Growth rate",
        }
    }
}

/// Whether a channel is integrated state or a derived side curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    State,
    Auxiliary,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Channel {
    pub compartment: Compartment,
    pub kind: ChannelKind,
    pub values: Vec<Real>,
}

impl Channel {
    pub fn state(compartment: Compartment, values: Vec<Real>) -> Self {
        Self {
            compartment,
            kind: ChannelKind::State,
            values,
        }
    }

    pub fn auxiliary(compartment: Compartment, values: Vec<Real>) -> Self {
        Self {
            compartment,
            kind: ChannelKind::Auxiliary,
            values,
        }
    }
}

/// Column-oriented samples over `[0, t_max]`. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeries {
    t: Vec<Real>,
    channels: Vec<Channel>,
}

impl TimeSeries {
    pub fn new(t: Vec<Real>, channels: Vec<Channel>) -> ResultsResult<Self> {
        for (i, channel) in channels.iter().enumerate() {
            if channel.values.len() != t.len() {
                return Err(ResultsError::LengthMismatch {
                    channel: channel.compartment.symbol().to_string(),
                    expected: t.len(),
                    actual: channel.values.len(),
                });
            }
            if channels[..i]
                .iter()
                .any(|c| c.compartment == channel.compartment)
            {
                return Err(ResultsError::DuplicateChannel(
                    channel.compartment.symbol().to_string(),
                ));
            }
        }
        Ok(Self { t, channels })
    }

    pub fn times(&self) -> &[Real] {
        &self.t
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    pub fn channel(&self, compartment: Compartment) -> Option<&[Real]> {
        self.channels
            .iter()
            .find(|c| c.compartment == compartment)
            .map(|c| c.values.as_slice())
    }

    /// Integrated compartments only, in declaration order.
    pub fn state_compartments(&self) -> Vec<Compartment> {
        self.channels
            .iter()
            .filter(|c| c.kind == ChannelKind::State)
            .map(|c| c.compartment)
            .collect()
    }

    /// Sum of all state channels at sample `i`.
    pub fn state_total(&self, i: usize) -> Option<Real> {
        if i >= self.t.len() {
            return None;
        }
        Some(
            self.channels
                .iter()
                .filter(|c| c.kind == ChannelKind::State)
                .map(|c| c.values[i])
                .sum(),
        )
    }

    /// Row-oriented view: one record per time point.
    pub fn samples(&self) -> Vec<Sample> {
        self.t
            .iter()
            .enumerate()
            .map(|(i, &t)| Sample {
                t,
                values: self
                    .channels
                    .iter()
                    .map(|c| (c.compartment.symbol().to_string(), c.values[i]))
                    .collect(),
            })
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub t: Real,
    pub values: BTreeMap<String, Real>,
}

/// Well-known highlight names.
pub mod keys {
    pub const VALUE_AT_T_EVAL: &str = "value_at_t_eval";
    pub const T_EVAL: &str = "t_eval";
    pub const PEAK_INFECTED: &str = "peak_infected";
    pub const PEAK_TIME: &str = "peak_time";
    pub const FINAL_INFECTED: &str = "final_infected";
    pub const CARRYING_CAPACITY: &str = "carrying_capacity";
    pub const EFFECTIVE_P0: &str = "effective_p0";
    pub const TOTAL_POPULATION: &str = "total_population";
    pub const EQUILIBRIUM_POPULATION: &str = "equilibrium_population";
}

/// Named scalar summaries derived from a series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Highlights(BTreeMap<String, Real>);

impl Highlights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: &str, value: Real) {
        self.0.insert(key.to_string(), value);
    }

    pub fn with(mut self, key: &str, value: Real) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<Real> {
        self.0.get(key).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Real)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Series plus highlights for one evaluation.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEnvelope {
    pub model: ModelId,
    pub series: TimeSeries,
    pub highlights: Highlights,
}

impl ResultEnvelope {
    pub fn to_record(&self) -> EnvelopeRecord {
        EnvelopeRecord {
            model: self.model,
            series: self.series.samples(),
            highlights: self.highlights.clone(),
        }
    }
}

/// Serializable, row-oriented form of a [`ResultEnvelope`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnvelopeRecord {
    pub model: ModelId,
    pub series: Vec<Sample>,
    pub highlights: Highlights,
}
