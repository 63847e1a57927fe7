//! Chart Pipeline - composes the series transforms for the chart layer
//!
//! ## Architecture
//!
//! ```text
//! state records ──→ ChartPipeline::application_state() ──→ sorted MultiSeries
//!                                                         └→ state_range()
//!
//! benchmark output ──→ sort_series() ──→ derivate() (derive_trades only)
//!                         ├─ no window: full logs, listener gets trade span
//!                         └─ window:    filter_by_time()
//!
//! chart zoom ──→ ChartPipeline::zoom(min, max) ──→ listener
//! ```
//!
//! Nothing is cached between calls: callers re-invoke when their inputs change.

use super::config::PipelineConfig;
use crate::benchmark::BenchmarkOutput;
use crate::error::SeriesError;
use crate::series_core::{
    aggregate, derivate, filter_by_time, sort_series, AggregatedRecord, MetricPoint,
    MetricSeries, MultiSeries, TimeWindow, WindowedTrades,
};
use serde::Serialize;

/// Trade logs prepared for display
///
/// Serializes flat as `{buys, sells, assets}`; see `WindowedTrades` for when a
/// side is left out.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BenchmarkView {
    #[serde(flatten)]
    pub trades: WindowedTrades,
    pub assets: MetricSeries,
}

pub struct ChartPipeline {
    config: PipelineConfig,
}

impl ChartPipeline {
    pub fn new(config: PipelineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Aggregate bucketed state records and sort every metric series
    pub fn application_state(
        &self,
        records: Option<&[AggregatedRecord]>,
    ) -> Result<MultiSeries, SeriesError> {
        let state = aggregate(records)?.sorted();
        log::debug!("Prepared application state with {} buckets", state.len());
        Ok(state)
    }

    /// Selectable date range for a prepared state (first/last account amount)
    pub fn state_range(&self, state: &MultiSeries) -> Option<TimeWindow> {
        state.account_range()
    }

    /// Sorted, down-sampled derivative of any series
    pub fn rate_of_change(&self, series: &[MetricPoint]) -> MetricSeries {
        derivate(&sort_series(series), self.config.minutes_between_points)
    }

    /// Prepare benchmark trade logs for the chart
    ///
    /// Logs are sorted, then derived when `derive_trades` is set, then
    /// windowed. Without a window the full logs are returned and the listener
    /// is told the trade span, so the caller can come back with a window.
    pub fn benchmark_view(
        &self,
        output: &BenchmarkOutput,
        window: Option<TimeWindow>,
    ) -> BenchmarkView {
        let mut buys = sort_series(&output.buys);
        let mut sells = sort_series(&output.sells);

        if self.config.derive_trades {
            buys = derivate(&buys, self.config.minutes_between_points);
            sells = derivate(&sells, self.config.minutes_between_points);
        }

        let trades = match window {
            Some(window) => filter_by_time(&buys, &sells, window),
            None => {
                if let Some(span) = output.trade_span() {
                    self.notify(span);
                }
                WindowedTrades {
                    buys: Some(buys),
                    sells: Some(sells),
                }
            }
        };

        BenchmarkView {
            trades,
            assets: output.assets.clone(),
        }
    }

    /// Chart zoom selection → new visible window
    pub fn zoom(&self, min: i64, max: i64) -> TimeWindow {
        let window = TimeWindow::between(min, max);
        self.notify(window);
        window
    }

    fn notify(&self, window: TimeWindow) {
        match &self.config.on_window_change {
            Some(listener) => listener(window),
            None => log::debug!("No window listener configured, dropping {:?}", window),
        }
    }
}

impl Default for ChartPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series_core::{series_from_pairs, BucketKey, Metric};
    use std::sync::{Arc, Mutex};

    fn recording_pipeline(config: PipelineConfig) -> (ChartPipeline, Arc<Mutex<Vec<TimeWindow>>>) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        let config = config.with_window_listener(move |w| sink.lock().unwrap().push(w));
        (ChartPipeline::new(config), seen)
    }

    fn create_test_output() -> BenchmarkOutput {
        BenchmarkOutput {
            buys: series_from_pairs(&[(9, 30.0), (1, 10.0), (5, 20.0)]),
            sells: series_from_pairs(&[(12, 40.0), (3, 15.0)]),
            assets: series_from_pairs(&[(1, 100.0)]),
        }
    }

    #[test]
    fn test_application_state_sorted() {
        let records = vec![
            AggregatedRecord::uniform(BucketKey::day(2021, 3, 7), 3.0),
            AggregatedRecord::uniform(BucketKey::day(2021, 3, 5), 1.0),
            AggregatedRecord::uniform(BucketKey::day(2021, 3, 6), 2.0),
        ];

        let pipeline = ChartPipeline::default();
        let state = pipeline.application_state(Some(records.as_slice())).unwrap();

        for (_, points) in state.iter() {
            let values: Vec<f64> = points.iter().map(|p| p.value).collect();
            assert_eq!(values, vec![1.0, 2.0, 3.0]);
        }

        let range = pipeline.state_range(&state).unwrap();
        assert_eq!(range.start, Some(1_614_902_400_000));
        assert_eq!(range.end, Some(1_615_075_200_000));
        assert_eq!(state.get(Metric::Volume).len(), 3);
    }

    #[test]
    fn test_view_without_window_reports_span() {
        let (pipeline, seen) = recording_pipeline(PipelineConfig::default());
        let view = pipeline.benchmark_view(&create_test_output(), None);

        assert_eq!(
            view.trades.buys,
            Some(series_from_pairs(&[(1, 10.0), (5, 20.0), (9, 30.0)]))
        );
        assert_eq!(view.trades.sells, Some(series_from_pairs(&[(3, 15.0), (12, 40.0)])));
        assert_eq!(view.assets.len(), 1);
        assert_eq!(*seen.lock().unwrap(), vec![TimeWindow::between(1, 12)]);
    }

    #[test]
    fn test_view_with_window_filters() {
        let (pipeline, seen) = recording_pipeline(PipelineConfig::default());
        let view = pipeline.benchmark_view(&create_test_output(), Some(TimeWindow::between(5, 9)));

        assert_eq!(view.trades.buys, Some(series_from_pairs(&[(5, 20.0), (9, 30.0)])));
        // sells at 3 and 12 straddle the window
        assert_eq!(view.trades.sells, Some(Vec::new()));
        assert!(seen.lock().unwrap().is_empty());
    }

    #[test]
    fn test_view_with_derived_trades() {
        let config = PipelineConfig {
            derive_trades: true,
            ..PipelineConfig::default()
        };
        let pipeline = ChartPipeline::new(config);
        let view = pipeline.benchmark_view(&create_test_output(), None);

        assert_eq!(view.trades.buys, Some(series_from_pairs(&[(5, 10.0), (9, 10.0)])));
        assert_eq!(view.trades.sells, Some(series_from_pairs(&[(12, 25.0)])));
    }

    #[test]
    fn test_window_applies_to_derived_trades() {
        let config = PipelineConfig {
            derive_trades: true,
            ..PipelineConfig::default()
        };
        let pipeline = ChartPipeline::new(config);
        let view = pipeline.benchmark_view(&create_test_output(), Some(TimeWindow::between(5, 9)));

        // the delta at 5 still sees its predecessor at 1
        assert_eq!(
            view.trades.buys,
            Some(series_from_pairs(&[(5, 10.0), (9, 10.0)]))
        );
        // the only sell delta sits at 12, past the window end
        assert_eq!(view.trades.sells, None);
    }

    #[test]
    fn test_view_json_is_flat() {
        let pipeline = ChartPipeline::default();
        let view = pipeline.benchmark_view(&create_test_output(), Some(TimeWindow::between(5, 9)));
        let json = serde_json::to_value(&view).unwrap();

        assert_eq!(json["buys"], serde_json::json!([[5, 20.0], [9, 30.0]]));
        assert_eq!(json["sells"], serde_json::json!([]));
        assert_eq!(json["assets"], serde_json::json!([[1, 100.0]]));
        assert!(json.get("trades").is_none());
    }

    #[test]
    fn test_rate_of_change_sorts_first() {
        let pipeline = ChartPipeline::default();
        let series = series_from_pairs(&[(2, 12.0), (0, 10.0), (1, 15.0)]);
        assert_eq!(
            pipeline.rate_of_change(&series),
            series_from_pairs(&[(1, 5.0), (2, -3.0)])
        );
    }

    #[test]
    fn test_zoom_notifies_listener() {
        let (pipeline, seen) = recording_pipeline(PipelineConfig::default());
        let window = pipeline.zoom(1_000, 2_000);

        assert_eq!(window, TimeWindow::between(1_000, 2_000));
        assert_eq!(*seen.lock().unwrap(), vec![window]);

        // no listener is fine
        assert_eq!(ChartPipeline::default().zoom(1, 2), TimeWindow::between(1, 2));
    }
}
