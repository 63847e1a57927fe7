use {
    crate::{
        benchmark::{Benchmark, BenchmarkOutput},
        error::SeriesError,
        series_core::{AggregatedRecord, MetricSeries},
    },
    serde::Serialize,
    std::{fs, path::Path},
};

/// Load bucketed state records from a JSON file
///
/// A file containing `null` loads as None (the API's "no data" answer).
pub fn load_records(file_path: &Path) -> Result<Option<Vec<AggregatedRecord>>, SeriesError> {
    let json = fs::read_to_string(file_path)?;
    let records = AggregatedRecord::list_from_json(&json)?;

    match &records {
        Some(records) => log::info!("Loaded {} state records from {}", records.len(), file_path.display()),
        None => log::info!("No state records in {}", file_path.display()),
    }
    Ok(records)
}

/// Load a benchmark output (`{buys, sells, assets}`) from a JSON file
pub fn load_benchmark_output(file_path: &Path) -> Result<BenchmarkOutput, SeriesError> {
    let json = fs::read_to_string(file_path)?;
    let output = BenchmarkOutput::from_json(&json)?;

    log::info!(
        "Loaded benchmark output from {} ({} buys, {} sells, {} assets)",
        file_path.display(),
        output.buys.len(),
        output.sells.len(),
        output.assets.len()
    );
    Ok(output)
}

/// Load a stored benchmark document (`{_id, output}`)
pub fn load_benchmark(file_path: &Path) -> Result<Benchmark, SeriesError> {
    let json = fs::read_to_string(file_path)?;
    let benchmark = Benchmark::from_json(&json)?;

    log::info!("Loaded benchmark {} from {}", benchmark.id, file_path.display());
    Ok(benchmark)
}

/// Load a single `[[timestamp, value], ...]` series from a JSON file
pub fn load_series(file_path: &Path) -> Result<MetricSeries, SeriesError> {
    let json = fs::read_to_string(file_path)?;
    let series: MetricSeries = serde_json::from_str(&json)?;

    log::debug!("Loaded {} points from {}", series.len(), file_path.display());
    Ok(series)
}

/// Write any result as pretty JSON
pub fn save_json<T: Serialize>(value: &T, file_path: &Path) -> Result<(), SeriesError> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(file_path, json)?;

    log::debug!("Saved JSON to {}", file_path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series_core::{series_from_pairs, BucketKey};

    #[test]
    fn test_records_roundtrip_through_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("state.json");

        let records = vec![AggregatedRecord::uniform(BucketKey::day(2021, 3, 5), 2.0)];
        save_json(&records, &file_path).unwrap();

        let loaded = load_records(&file_path).unwrap().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_null_records_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("state.json");
        fs::write(&file_path, "null").unwrap();

        assert_eq!(load_records(&file_path).unwrap(), None);
    }

    #[test]
    fn test_load_benchmark_and_series() {
        let temp_dir = tempfile::tempdir().unwrap();
        let output_path = temp_dir.path().join("output.json");
        let series_path = temp_dir.path().join("series.json");
        fs::write(&output_path, r#"{"buys":[[1,2.0]],"sells":[],"assets":[[1,50.0]]}"#).unwrap();
        fs::write(&series_path, "[[0,10],[1,15]]").unwrap();

        let output = load_benchmark_output(&output_path).unwrap();
        assert_eq!(output.buys, series_from_pairs(&[(1, 2.0)]));
        assert_eq!(load_series(&series_path).unwrap(), series_from_pairs(&[(0, 10.0), (1, 15.0)]));
    }

    #[test]
    fn test_load_benchmark_document() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("benchmark.json");
        fs::write(&file_path, r#"{"_id":"60a1f","output":{"buys":[[1,2.0]]}}"#).unwrap();

        let benchmark = load_benchmark(&file_path).unwrap();
        assert_eq!(benchmark.id, "60a1f");
        assert_eq!(benchmark.output.buys, series_from_pairs(&[(1, 2.0)]));
        assert!(benchmark.output.sells.is_empty());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = load_series(&temp_dir.path().join("absent.json"));
        assert!(matches!(result, Err(SeriesError::Io(_))));
    }
}
