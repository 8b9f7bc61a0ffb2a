//! Writers for rendering collaborators that want files instead of structs.

use std::io::Write;

use crate::ResultsResult;
use crate::types::{ResultEnvelope, TimeSeries};

/// Write `t,<symbol>...` CSV, one row per sample.
pub fn write_csv<W: Write>(series: &TimeSeries, mut out: W) -> ResultsResult<()> {
    let header: Vec<&str> = std::iter::once("t")
        .chain(series.channels().iter().map(|c| c.compartment.symbol()))
        .collect();
    writeln!(out, "{}", header.join(","))?;

    for (i, t) in series.times().iter().enumerate() {
        write!(out, "{t}")?;
        for channel in series.channels() {
            write!(out, ",{}", channel.values[i])?;
        }
        writeln!(out)?;
    }
    Ok(())
}

pub fn to_json(envelope: &ResultEnvelope) -> ResultsResult<String> {
    Ok(serde_json::to_string_pretty(&envelope.to_record())?)
}
