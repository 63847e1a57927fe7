//! Timestamp ordering for series handed to the chart

use super::point::{MetricPoint, MetricSeries};

/// Return a new series ordered ascending by timestamp; the input is left as is.
///
/// The sort is stable, but callers should not depend on the relative order of
/// points sharing a timestamp.
pub fn sort_series(series: &[MetricPoint]) -> MetricSeries {
    if is_sorted(series) {
        return series.to_vec();
    }

    let mut sorted = series.to_vec();
    sorted.sort_by_key(|point| point.timestamp);
    sorted
}

/// True when timestamps never decrease
pub fn is_sorted(series: &[MetricPoint]) -> bool {
    series.windows(2).all(|w| w[0].timestamp <= w[1].timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series_core::point::series_from_pairs;

    #[test]
    fn test_sort_series() {
        let series = series_from_pairs(&[(5, 1.0), (1, 2.0), (3, 3.0)]);
        let sorted = sort_series(&series);

        assert_eq!(sorted, series_from_pairs(&[(1, 2.0), (3, 3.0), (5, 1.0)]));
        assert!(is_sorted(&sorted));
        assert!(!is_sorted(&series));
    }

    #[test]
    fn test_sort_empty_and_duplicates() {
        assert!(sort_series(&[]).is_empty());

        let series = series_from_pairs(&[(2, 1.0), (1, 0.0), (2, 2.0)]);
        let sorted = sort_series(&series);
        assert_eq!(sorted.len(), 3);
        assert_eq!(sorted[0], MetricPoint::new(1, 0.0));
        assert!(is_sorted(&sorted));
    }

    #[test]
    fn test_sorted_input_passes_through() {
        let series = series_from_pairs(&[(1, 5.0), (1, 4.0), (3, 3.0)]);
        assert_eq!(sort_series(&series), series);
    }
}
