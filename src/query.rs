//! State query URLs for the time-bucketed aggregation endpoint
//!
//! Endpoint: `{base}/api/{applications|benchmark}/{id}/state?startDate=..&endDate=..`
//!
//! Dates are UTC, formatted `%Y-%m-%d %H:%M:%S`. Only the URL is built here;
//! fetching it is up to the caller.

use crate::benchmark::Benchmark;
use crate::error::SeriesError;
use chrono::{DateTime, Utc};
use url::{ParseError, Url};

pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateSource {
    Application(String),
    Benchmark(String),
}

impl StateSource {
    fn path_segment(&self) -> &'static str {
        match self {
            StateSource::Application(_) => "applications",
            StateSource::Benchmark(_) => "benchmark",
        }
    }

    fn id(&self) -> &str {
        match self {
            StateSource::Application(id) | StateSource::Benchmark(id) => id,
        }
    }

    pub fn from_kind(kind: &str, id: &str) -> Option<Self> {
        match kind {
            "application" | "applications" => Some(StateSource::Application(id.to_string())),
            "benchmark" => Some(StateSource::Benchmark(id.to_string())),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateQuery {
    pub source: StateSource,
    pub start_ms: i64,
    pub end_ms: i64,
}

impl StateQuery {
    pub fn new(source: StateSource, start_ms: i64, end_ms: i64) -> Self {
        Self {
            source,
            start_ms,
            end_ms,
        }
    }

    pub fn for_benchmark(benchmark: &Benchmark, start_ms: i64, end_ms: i64) -> Self {
        Self::new(StateSource::Benchmark(benchmark.id.clone()), start_ms, end_ms)
    }

    /// Full request URL against `base_url`
    pub fn url(&self, base_url: &str) -> Result<Url, SeriesError> {
        let start_date = format_query_date(self.start_ms)?;
        let end_date = format_query_date(self.end_ms)?;

        let mut request = Url::parse(base_url)?;
        request
            .path_segments_mut()
            .map_err(|_| ParseError::RelativeUrlWithCannotBeABaseBase)?
            .pop_if_empty()
            .extend(["api", self.source.path_segment(), self.source.id(), "state"]);

        request
            .query_pairs_mut()
            .append_pair("startDate", &start_date)
            .append_pair("endDate", &end_date);

        Ok(request)
    }
}

/// Format epoch milliseconds as the fixed date-time string the API expects
pub fn format_query_date(ms: i64) -> Result<String, SeriesError> {
    let datetime = DateTime::<Utc>::from_timestamp_millis(ms).ok_or(SeriesError::InvalidTimestamp(ms))?;
    Ok(datetime.format(QUERY_DATE_FORMAT).to_string())
}
