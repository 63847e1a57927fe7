//! Bucketed state records as returned by the time-bucketed aggregation query

use crate::error::SeriesError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar bucket (UTC, month 1-based). Hour and minute are absent for
/// day-level buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketKey {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hour: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minute: Option<u32>,
}

impl BucketKey {
    pub fn day(year: i32, month: u32, day: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: None,
            minute: None,
        }
    }

    pub fn minute(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour: Some(hour),
            minute: Some(minute),
        }
    }

    /// Start of the bucket in epoch milliseconds (UTC)
    ///
    /// Missing hour/minute count as 0; seconds are always 0. Returns None when
    /// the fields do not name a real calendar minute.
    pub fn timestamp_ms(&self) -> Option<i64> {
        let datetime = NaiveDate::from_ymd_opt(self.year, self.month, self.day)?
            .and_hms_opt(self.hour.unwrap_or(0), self.minute.unwrap_or(0), 0)?;
        Some(datetime.and_utc().timestamp_millis())
    }
}

impl std::fmt::Display for BucketKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}",
            self.year,
            self.month,
            self.day,
            self.hour.unwrap_or(0),
            self.minute.unwrap_or(0)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AggregatedRecord {
    #[serde(rename = "_id")]
    pub bucket: BucketKey,

    pub price: f64,
    pub price_average: f64,
    pub price_standard_deviation: f64,
    pub price_upper_limit: f64,
    pub price_lower_limit: f64,

    pub change: f64,
    pub change_average: f64,
    pub change_standard_deviation: f64,
    pub change_upper_limit: f64,
    pub change_lower_limit: f64,

    pub acceleration: f64,
    pub acceleration_average: f64,
    pub acceleration_standard_deviation: f64,
    pub acceleration_upper_limit: f64,
    pub acceleration_lower_limit: f64,

    pub volume: f64,
    pub volume_average: f64,
    pub volume_upper_limit: f64,
    pub volume_lower_limit: f64,

    pub account_amount: f64,
}

impl AggregatedRecord {
    /// Record with every metric set to `value`
    pub fn uniform(bucket: BucketKey, value: f64) -> Self {
        Self {
            bucket,
            price: value,
            price_average: value,
            price_standard_deviation: value,
            price_upper_limit: value,
            price_lower_limit: value,
            change: value,
            change_average: value,
            change_standard_deviation: value,
            change_upper_limit: value,
            change_lower_limit: value,
            acceleration: value,
            acceleration_average: value,
            acceleration_standard_deviation: value,
            acceleration_upper_limit: value,
            acceleration_lower_limit: value,
            volume: value,
            volume_average: value,
            volume_upper_limit: value,
            volume_lower_limit: value,
            account_amount: value,
        }
    }

    /// Parse the API payload. `null` yields None, which aggregates to an
    /// empty MultiSeries.
    pub fn list_from_json(json: &str) -> Result<Option<Vec<Self>>, SeriesError> {
        let records: Option<Vec<AggregatedRecord>> = serde_json::from_str(json)?;
        Ok(records)
    }
}
