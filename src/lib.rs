//! tradeseries - chart-ready series from bucketed state records and
//! benchmark trade logs.


pub mod benchmark;
pub mod error;
pub mod loader;
pub mod pipeline;
pub mod query;
pub mod series_core;

pub use benchmark::{Benchmark, BenchmarkOutput};
pub use error::SeriesError;
pub use pipeline::{BenchmarkView, ChartPipeline, PipelineConfig};
pub use query::{StateQuery, StateSource};
