//! Chart pipeline configuration

use crate::series_core::TimeWindow;
use std::env;
use std::sync::Arc;

/// Callback invoked when the visible window should change (initial trade span
/// or a chart zoom)
pub type WindowListener = Arc<dyn Fn(TimeWindow) + Send + Sync>;

/// Configuration for the chart pipeline
#[derive(Clone)]
pub struct PipelineConfig {
    /// Dead-band gap for derived series, in minutes (0 = emit every delta)
    pub minutes_between_points: u64,

    /// Replace buys/sells with their derivative in benchmark views
    pub derive_trades: bool,

    /// Base URL of the state API, used when building state queries
    pub api_base_url: String,

    /// Window change notification
    pub on_window_change: Option<WindowListener>,
}

impl PipelineConfig {
    /// Load configuration from environment variables
    ///
    /// Environment variables:
    /// - `CHART_MINUTES_BETWEEN_POINTS` (default: 0)
    /// - `CHART_DERIVE_TRADES` (default: false)
    /// - `CHART_API_BASE_URL` (default: http://localhost:3000)
    ///
    /// The window listener cannot come from the environment; attach one with
    /// `with_window_listener`.
    pub fn from_env() -> Self {
        Self {
            minutes_between_points: env::var("CHART_MINUTES_BETWEEN_POINTS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(0),

            derive_trades: env::var("CHART_DERIVE_TRADES")
                .ok()
                .and_then(|s| s.to_lowercase().parse().ok())
                .unwrap_or(false),

            api_base_url: env::var("CHART_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),

            on_window_change: None,
        }
    }

    pub fn with_window_listener<F>(mut self, listener: F) -> Self
    where
        F: Fn(TimeWindow) + Send + Sync + 'static,
    {
        self.on_window_change = Some(Arc::new(listener));
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            minutes_between_points: 0,
            derive_trades: false,
            api_base_url: "http://localhost:3000".to_string(),
            on_window_change: None,
        }
    }
}

impl std::fmt::Debug for PipelineConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineConfig")
            .field("minutes_between_points", &self.minutes_between_points)
            .field("derive_trades", &self.derive_trades)
            .field("api_base_url", &self.api_base_url)
            .field("on_window_change", &self.on_window_change.is_some())
            .finish()
    }
}
