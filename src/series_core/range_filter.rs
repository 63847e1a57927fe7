//! Inclusive time-window trimming of buy/sell logs

use super::point::{MetricPoint, MetricSeries, TimeWindow};
use serde::Serialize;

/// Windowed trade logs. A side is `None` when no valid window was found for
/// it, which is distinct from `Some(empty)`; absent sides are left out of the
/// JSON entirely.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WindowedTrades {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub buys: Option<MetricSeries>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sells: Option<MetricSeries>,
}

/// Inclusive sub-range of an ascending series
///
/// Scans forward for the first point at or after `start` and backward for the
/// last point at or before `end`. Returns None when the series is empty, when
/// either bound is missing, or when no point satisfies a bound. A window that
/// falls between two samples yields `Some` of an empty series.
pub fn window_slice(series: &[MetricPoint], window: TimeWindow) -> Option<MetricSeries> {
    if series.is_empty() {
        return None;
    }

    let start_index = window
        .start
        .and_then(|start| series.iter().position(|p| p.timestamp >= start))?;
    let end_index = window
        .end
        .and_then(|end| series.iter().rposition(|p| p.timestamp <= end))?;

    if start_index > end_index {
        return Some(Vec::new());
    }

    Some(series[start_index..=end_index].to_vec())
}

/// Apply `window_slice` to both trade sides
pub fn filter_by_time(
    buys: &[MetricPoint],
    sells: &[MetricPoint],
    window: TimeWindow,
) -> WindowedTrades {
    let windowed = WindowedTrades {
        buys: window_slice(buys, window),
        sells: window_slice(sells, window),
    };

    if !window.is_bounded() {
        log::debug!("Window {:?} is missing a bound, omitting both trade sides", window);
    }

    windowed
}
