//! Query helpers for pulling data out of an evaluated envelope.

use pd_core::Real;
use pd_results::{ChannelKind, Compartment, ResultEnvelope};

use crate::error::{AppError, AppResult};

/// Summary of an envelope's time range and channels.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub time_range: (Real, Real),
    pub sample_count: usize,
    pub state_channels: usize,
    pub auxiliary_channels: usize,
}

pub fn get_run_summary(envelope: &ResultEnvelope) -> AppResult<RunSummary> {
    let t = envelope.series.times();
    let (Some(&t_min), Some(&t_max)) = (t.first(), t.last()) else {
        return Err(AppError::InvalidInput("Empty series".to_string()));
    };
    let channels = envelope.series.channels();
    let state_channels = channels
        .iter()
        .filter(|c| c.kind == ChannelKind::State)
        .count();

    Ok(RunSummary {
        time_range: (t_min, t_max),
        sample_count: t.len(),
        state_channels,
        auxiliary_channels: channels.len() - state_channels,
    })
}

/// Channel symbols in series order.
pub fn list_channels(envelope: &ResultEnvelope) -> Vec<&'static str> {
    envelope
        .series
        .channels()
        .iter()
        .map(|c| c.compartment.symbol())
        .collect()
}

/// Extract `(t, value)` pairs for the channel with the given symbol
/// (`"P"`, `"S"`, `"I"`, ...).
pub fn extract_series(envelope: &ResultEnvelope, symbol: &str) -> AppResult<Vec<(Real, Real)>> {
    let compartment = envelope
        .series
        .channels()
        .iter()
        .map(|c| c.compartment)
        .find(|c: &Compartment| c.symbol() == symbol)
        .ok_or_else(|| {
            AppError::InvalidInput(format!(
                "Unknown channel '{}' (available: {})",
                symbol,
                list_channels(envelope).join(", ")
            ))
        })?;
    let values = envelope
        .series
        .channel(compartment)
        .ok_or_else(|| AppError::InvalidInput(format!("Unknown channel '{}'", symbol)))?;

    Ok(envelope
        .series
        .times()
        .iter()
        .copied()
        .zip(values.iter().copied())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::evaluate;
    use pd_core::ModelId;

    fn logistic_envelope() -> ResultEnvelope {
        let model = ModelId::LogisticVariableRate;
        evaluate(model, &model.default_params())
            .unwrap()
            .into_envelope()
            .unwrap()
    }

    #[test]
    fn summary_counts_auxiliary_channel() {
        let summary = get_run_summary(&logistic_envelope()).unwrap();
        assert_eq!(summary.state_channels, 1);
        assert_eq!(summary.auxiliary_channels, 1);
        assert_eq!(summary.sample_count, 400);
        assert_eq!(summary.time_range.0, 0.0);
    }

    #[test]
    fn extract_known_and_unknown_channel() {
        let envelope = logistic_envelope();
        assert_eq!(list_channels(&envelope), vec!["P", "r"]);
        let p = extract_series(&envelope, "P").unwrap();
        assert_eq!(p.len(), envelope.series.len());
        let err = extract_series(&envelope, "I").unwrap_err();
        assert!(err.to_string().contains("available: P, r"));
    }
}
