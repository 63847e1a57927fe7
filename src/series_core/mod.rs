//! Series Core - chart-ready time-series transforms
//!
//! Pure, synchronous transforms from fetched state records and trade logs
//! into ascending `[timestamp, value]` series.
//!
//! # Architecture
//!
//! ```text
//! AggregatedRecord[] (bucketed state query)
//!     ↓
//! aggregate() → MultiSeries (20 index-aligned metric series)
//!     ↓
//! sort_series() / MultiSeries::sorted()
//!     ↓
//! derivate() (optional rate-of-change, dead-band down-sampled)
//!     ↓
//! filter_by_time() (inclusive visible window on buys/sells)
//! ```

pub mod aggregator;
pub mod derivator;
pub mod metric;
pub mod multi_series;
pub mod point;
pub mod range_filter;
pub mod record;
pub mod sorter;

pub use aggregator::aggregate;
pub use derivator::{derivate, DEAD_BAND_CHANGE};
pub use metric::{Metric, MetricFamily};
pub use multi_series::MultiSeries;
pub use point::{series_from_pairs, MetricPoint, MetricSeries, TimeWindow};
pub use range_filter::{filter_by_time, window_slice, WindowedTrades};
pub use record::{AggregatedRecord, BucketKey};
pub use sorter::{is_sorted, sort_series};
