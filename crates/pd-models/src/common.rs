//! Helpers shared by the model evaluators.

use pd_core::{ParameterSet, Real};
use pd_results::{Channel, Compartment, TimeSeries};
use pd_sim::SimRecord;
use tracing::warn;

use crate::error::ModelResult;

/// Check presence of every name, then read them in order.
pub fn read_params<const K: usize>(
    set: &ParameterSet,
    names: &[&str; K],
) -> ModelResult<[Real; K]> {
    set.require_all(names)?;
    let mut out = [0.0; K];
    for (slot, name) in out.iter_mut().zip(names) {
        *slot = set.require(name)?;
    }
    Ok(out)
}

/// `min(t_eval, t_max)`: evaluation times past the horizon snap to it.
pub fn clamp_t_eval(t_eval: Real, t_max: Real) -> Real {
    if t_eval > t_max {
        warn!(t_eval, t_max, "t_eval beyond t_max; clamping");
        t_max
    } else {
        t_eval
    }
}

/// Turn an integration record into a series with one state channel per
/// compartment, followed by any auxiliary channels.
pub fn record_to_series<const N: usize>(
    record: SimRecord<N>,
    compartments: [Compartment; N],
    auxiliary: Vec<Channel>,
) -> ModelResult<TimeSeries> {
    let channels = compartments
        .iter()
        .enumerate()
        .map(|(i, &c)| Channel::state(c, record.component(i)))
        .chain(auxiliary)
        .collect();
    Ok(TimeSeries::new(record.t, channels)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ModelError;
    use pd_sim::State;

    #[test]
    fn read_params_reports_all_missing() {
        let set = ParameterSet::new().with("a", 1.0);
        let err = read_params(&set, &["a", "b", "c"]).unwrap_err();
        assert!(matches!(err, ModelError::Incomplete { names } if names == ["b", "c"]));
    }

    #[test]
    fn read_params_preserves_order() {
        let set = ParameterSet::new().with("b", 2.0).with("a", 1.0);
        assert_eq!(read_params(&set, &["a", "b"]).unwrap(), [1.0, 2.0]);
    }

    #[test]
    fn clamp_only_lowers() {
        assert_eq!(clamp_t_eval(5.0, 10.0), 5.0);
        assert_eq!(clamp_t_eval(15.0, 10.0), 10.0);
        assert_eq!(clamp_t_eval(-1.0, 10.0), -1.0);
    }

    #[test]
    fn record_to_series_orders_channels() {
        let mut record = SimRecord::<2>::with_capacity(1);
        record.push(0.0, State::<2>::new(3.0, 4.0));
        let series = record_to_series(
            record,
            [Compartment::Susceptible, Compartment::Infected],
            vec![Channel::auxiliary(Compartment::GrowthRate, vec![0.1])],
        )
        .unwrap();
        assert_eq!(series.channel(Compartment::Infected), Some(&[4.0][..]));
        assert_eq!(series.channels().len(), 3);
        assert_eq!(series.state_total(0), Some(7.0));
    }
}
