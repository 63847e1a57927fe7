//! # Chart Pipeline
//!
//! Explicit composition of the series transforms for the charting layer:
//! callers pass records, trade logs and windows in, and get new values back.
//!
//! ## Module Organization
//!
//! - `config` - Environment-driven settings and the window listener
//! - `engine` - `ChartPipeline` orchestration and `BenchmarkView`

pub mod config;
pub mod engine;

pub use config::{PipelineConfig, WindowListener};
pub use engine::{BenchmarkView, ChartPipeline};
