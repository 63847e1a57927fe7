//! Point-to-point derivative with dead-band down-sampling

use super::point::{MetricPoint, MetricSeries};

/// Points whose change from the last emitted point stays strictly inside
/// (-DEAD_BAND_CHANGE, DEAD_BAND_CHANGE) are candidates for suppression
pub const DEAD_BAND_CHANGE: f64 = 20.0;

const MS_PER_MINUTE: i64 = 60_000;

/// Discrete derivative of an ascending series
///
/// Emits `(t[i], v[i] - v[i-1])` for i in 1..n. The first delta is always
/// emitted. A later point is dropped when `minutes_between_points > 0`, it is
/// less than that many minutes after the last emitted point, and its change
/// lies inside the dead band. Dropped points do not move the reference point.
///
/// The change is measured as the current raw value minus the last emitted
/// delta value, not between two raw values or two deltas.
///
/// Series with fewer than two points are returned unchanged.
pub fn derivate(series: &[MetricPoint], minutes_between_points: u64) -> MetricSeries {
    if series.len() < 2 {
        return series.to_vec();
    }

    let min_gap_ms = i64::try_from(minutes_between_points)
        .unwrap_or(i64::MAX)
        .saturating_mul(MS_PER_MINUTE);
    let mut derived: MetricSeries = Vec::with_capacity(series.len() - 1);

    for (previous, current) in series.iter().zip(series.iter().skip(1)) {
        if let Some(last) = derived.last() {
            let gap = current.timestamp.saturating_sub(last.timestamp);
            let change = current.value - last.value;

            if minutes_between_points > 0
                && gap < min_gap_ms
                && change > -DEAD_BAND_CHANGE
                && change < DEAD_BAND_CHANGE
            {
                continue;
            }
        }

        derived.push(MetricPoint::new(
            current.timestamp,
            current.value - previous.value,
        ));
    }

    log::debug!(
        "Derived {} points from {} (min gap {}m)",
        derived.len(),
        series.len(),
        minutes_between_points
    );
    derived
}
