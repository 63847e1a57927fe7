//! Timestamped samples and inclusive time windows

use serde::{Deserialize, Serialize};

/// Ordered run of samples, ascending by timestamp once normalized
pub type MetricSeries = Vec<MetricPoint>;

/// One chart sample: epoch milliseconds (UTC) and its value
///
/// Serialized as a two-element array `[timestamp, value]`, which is the shape
/// both the upstream API and the chart layer use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "(i64, f64)", into = "(i64, f64)")]
pub struct MetricPoint {
    pub timestamp: i64,
    pub value: f64,
}

impl MetricPoint {
    pub fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

impl From<(i64, f64)> for MetricPoint {
    fn from((timestamp, value): (i64, f64)) -> Self {
        Self { timestamp, value }
    }
}

impl From<MetricPoint> for (i64, f64) {
    fn from(point: MetricPoint) -> Self {
        (point.timestamp, point.value)
    }
}

/// Build a series from `(timestamp, value)` pairs
pub fn series_from_pairs(pairs: &[(i64, f64)]) -> MetricSeries {
    pairs.iter().copied().map(MetricPoint::from).collect()
}

/// Visible time range, inclusive on both ends when a bound is present
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl TimeWindow {
    pub fn new(start: Option<i64>, end: Option<i64>) -> Self {
        Self { start, end }
    }

    /// Window with both bounds present
    pub fn between(start: i64, end: i64) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn is_bounded(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}
