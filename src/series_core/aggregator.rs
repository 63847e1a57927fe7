//! Bucketed records → per-metric series

use super::metric::Metric;
use super::multi_series::MultiSeries;
use super::point::MetricPoint;
use super::record::AggregatedRecord;
use crate::error::SeriesError;

/// Turn bucketed records into the twenty metric series
///
/// Each record contributes exactly one `(bucket start, value)` point to every
/// series, in input order (no sorting here). `None` or an empty slice yields
/// twenty empty series.
///
/// # Errors
/// `SeriesError::InvalidRecord` when a bucket key is not a real calendar
/// minute (month 13, February 30th, hour 24...).
pub fn aggregate(records: Option<&[AggregatedRecord]>) -> Result<MultiSeries, SeriesError> {
    let records = match records {
        Some(records) => records,
        None => {
            log::warn!("No state records supplied, returning empty series");
            return Ok(MultiSeries::new());
        }
    };

    let mut multi = MultiSeries::with_capacity(records.len());

    for (index, record) in records.iter().enumerate() {
        let timestamp = record
            .bucket
            .timestamp_ms()
            .ok_or_else(|| SeriesError::InvalidRecord {
                index,
                reason: format!("bucket {} is not a valid UTC date-time", record.bucket),
            })?;

        for metric in Metric::all() {
            multi.push(metric, MetricPoint::new(timestamp, metric.value_of(record)));
        }
    }

    log::debug!("Aggregated {} records into {} series", records.len(), Metric::COUNT);
    Ok(multi)
}
