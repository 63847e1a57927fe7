//! Per-metric series derived from one bucket sequence

use super::metric::Metric;
use super::point::{MetricPoint, MetricSeries, TimeWindow};
use super::sorter::sort_series;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// All twenty metric series, index-aligned: position `i` in every series came
/// from the same input record.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiSeries {
    series: [MetricSeries; Metric::COUNT],
}

impl MultiSeries {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            series: std::array::from_fn(|_| Vec::with_capacity(capacity)),
        }
    }

    pub(crate) fn push(&mut self, metric: Metric, point: MetricPoint) {
        self.series[metric.index()].push(point);
    }

    pub fn get(&self, metric: Metric) -> &[MetricPoint] {
        &self.series[metric.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Metric, &[MetricPoint])> {
        Metric::all()
            .into_iter()
            .map(move |metric| (metric, self.get(metric)))
    }

    /// Number of records the series were built from
    pub fn len(&self) -> usize {
        self.series[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(|s| s.is_empty())
    }

    /// Copy with every series ordered ascending by timestamp
    pub fn sorted(&self) -> Self {
        Self {
            series: std::array::from_fn(|i| sort_series(&self.series[i])),
        }
    }

    /// First and last account-amount timestamps, assuming sorted series.
    /// Used to clamp the selectable date range.
    pub fn account_range(&self) -> Option<TimeWindow> {
        let amounts = self.get(Metric::AccountAmount);
        let first = amounts.first()?;
        let last = amounts.last()?;
        Some(TimeWindow::between(first.timestamp, last.timestamp))
    }
}

impl Default for MultiSeries {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for MultiSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Metric::COUNT))?;
        for (metric, points) in self.iter() {
            map.serialize_entry(metric.as_str(), points)?;
        }
        map.end()
    }
}
