//! Benchmark execution results

use crate::error::SeriesError;
use crate::series_core::{MetricSeries, TimeWindow};
use serde::{Deserialize, Serialize};

/// Trade logs produced by a benchmark run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkOutput {
    #[serde(default)]
    pub buys: MetricSeries,
    #[serde(default)]
    pub sells: MetricSeries,
    #[serde(default)]
    pub assets: MetricSeries,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Benchmark {
    #[serde(rename = "_id")]
    pub id: String,
    pub output: BenchmarkOutput,
}

impl BenchmarkOutput {
    pub fn from_json(json: &str) -> Result<Self, SeriesError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Earliest to latest trade across buys and sells, or None with no trades
    pub fn trade_span(&self) -> Option<TimeWindow> {
        let timestamps = self.buys.iter().chain(self.sells.iter()).map(|p| p.timestamp);
        let (first, last) = timestamps.fold(None, |span: Option<(i64, i64)>, ts| match span {
            Some((first, last)) => Some((first.min(ts), last.max(ts))),
            None => Some((ts, ts)),
        })?;
        Some(TimeWindow::between(first, last))
    }
}

impl Benchmark {
    pub fn from_json(json: &str) -> Result<Self, SeriesError> {
        Ok(serde_json::from_str(json)?)
    }
}
