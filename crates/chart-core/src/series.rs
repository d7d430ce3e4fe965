// File: crates/chart-core/src/series.rs
// Summary: Sample model for a single metric series plus JSON/CSV loaders.
// Notes:
// - Wire format is `[unixSeconds, number | null]`; `null` is a missing value.
// - Loaders reject malformed input as a whole; they never return partial data.

use std::io::Read;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// One observation of the metric. `value == None` marks a missing sample.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "(i64, Option<f64>)", into = "(i64, Option<f64>)")]
pub struct Sample {
    pub timestamp: DateTime<Utc>,
    pub value: Option<f64>,
}

impl Sample {
    pub fn new(timestamp: DateTime<Utc>, value: Option<f64>) -> Self {
        Self { timestamp, value }
    }

    /// Build from Unix seconds; `None` when the instant is not representable.
    pub fn from_unix(secs: i64, value: Option<f64>) -> Option<Self> {
        DateTime::from_timestamp(secs, 0).map(|timestamp| Self { timestamp, value })
    }

    #[inline]
    pub fn unix_seconds(&self) -> i64 { self.timestamp.timestamp() }
}

impl TryFrom<(i64, Option<f64>)> for Sample {
    type Error = String;

    fn try_from((secs, value): (i64, Option<f64>)) -> Result<Self, Self::Error> {
        Sample::from_unix(secs, value).ok_or_else(|| format!("timestamp {secs} is out of range"))
    }
}

impl From<Sample> for (i64, Option<f64>) {
    fn from(s: Sample) -> Self {
        (s.unix_seconds(), s.value)
    }
}

/// Default "defined" predicate: the value is present and a finite number.
pub fn is_defined(sample: &Sample) -> bool {
    sample.value.is_some_and(f64::is_finite)
}

/// Parse a JSON array of `[seconds, value|null]` pairs, keeping the given order.
pub fn parse_json(text: &str) -> Result<Vec<Sample>, ChartError> {
    Ok(serde_json::from_str(text)?)
}

/// Parse a newest-first payload (as served by the hub) into chronological order.
pub fn parse_json_newest_first(text: &str) -> Result<Vec<Sample>, ChartError> {
    let mut samples = parse_json(text)?;
    samples.reverse();
    Ok(samples)
}

/// Load `timestamp,value` CSV with a header row. An empty value cell (or `null`)
/// is a missing sample.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<Sample>, ChartError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut out = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.map_err(|e| ChartError::InvalidInput(e.to_string()))?;
        if rec.len() != 2 {
            return Err(ChartError::InvalidSample {
                row,
                reason: format!("expected 2 fields, found {}", rec.len()),
            });
        }
        let secs = rec[0].parse::<i64>().map_err(|e| ChartError::InvalidSample {
            row,
            reason: format!("timestamp '{}': {e}", &rec[0]),
        })?;
        let value = match &rec[1] {
            "" | "null" => None,
            s => Some(s.parse::<f64>().map_err(|e| ChartError::InvalidSample {
                row,
                reason: format!("value '{s}': {e}"),
            })?),
        };
        let sample = Sample::from_unix(secs, value).ok_or_else(|| ChartError::InvalidSample {
            row,
            reason: format!("timestamp {secs} is out of range"),
        })?;
        out.push(sample);
    }
    Ok(out)
}

/// True when timestamps never decrease.
pub fn is_chronological(samples: &[Sample]) -> bool {
    samples.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}

/// First and last timestamps, in sequence order (not min/max).
pub fn time_extent(samples: &[Sample]) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    Some((samples.first()?.timestamp, samples.last()?.timestamp))
}
