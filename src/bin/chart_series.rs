//! Chart Series Binary - fetched JSON in, chart-ready series out
//!
//! ## Usage
//!
//! ```bash
//! cargo run --bin chart_series -- state streams/state.json
//! cargo run --bin chart_series -- benchmark output.json --start 1614902400000 --end 1614988800000
//! cargo run --bin chart_series -- derive prices.json --minutes 5
//! cargo run --bin chart_series -- query benchmark 60a1f --start 1614902400000 --end 1614988800000
//! cargo run --bin chart_series -- query --file benchmark.json --start 1614902400000 --end 1614988800000
//! ```
//!
//! Results are printed to stdout as JSON (`--out <path>` writes a file instead).
//!
//! ## Environment Variables
//!
//! - CHART_MINUTES_BETWEEN_POINTS - Dead-band gap for derived series (default: 0)
//! - CHART_DERIVE_TRADES - Derive buys/sells in benchmark views (default: false)
//! - CHART_API_BASE_URL - Base URL for state queries (default: http://localhost:3000)
//! - RUST_LOG - Logging level (optional, default: info)

use serde::Serialize;
use std::env;
use std::path::PathBuf;
use tradeseries::loader;
use tradeseries::pipeline::{ChartPipeline, PipelineConfig};
use tradeseries::series_core::TimeWindow;
use tradeseries::{StateQuery, StateSource};

const USAGE: &str = "usage: chart_series <state|benchmark|derive|query> <args...> \
    [--start MS] [--end MS] [--minutes N] [--derive N] [--file PATH] [--out PATH]";

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|idx| args.get(idx + 1))
        .cloned()
}

fn parse_flag<T: std::str::FromStr>(
    args: &[String],
    flag: &str,
) -> Result<Option<T>, Box<dyn std::error::Error>> {
    match flag_value(args, flag) {
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|_| format!("invalid value for {}: {}", flag, raw).into()),
        None => Ok(None),
    }
}

fn emit<T: Serialize>(value: &T, out: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    match out {
        Some(path) => {
            loader::save_json(value, &path)?;
            log::info!("✅ Wrote {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(value)?),
    }
    Ok(())
}

fn run(args: &[String], mut config: PipelineConfig) -> Result<(), Box<dyn std::error::Error>> {
    let command = args.first().ok_or(USAGE)?;
    let out = flag_value(args, "--out").map(PathBuf::from);

    match command.as_str() {
        "state" => {
            let path = PathBuf::from(args.get(1).ok_or(USAGE)?);
            let records = loader::load_records(&path)?;

            let pipeline = ChartPipeline::new(config);
            let state = pipeline.application_state(records.as_deref())?;

            match pipeline.state_range(&state) {
                Some(range) => log::info!(
                    "📊 {} buckets, account range {:?}..{:?}",
                    state.len(),
                    range.start,
                    range.end
                ),
                None => log::info!("📊 No account data in range"),
            }
            for (metric, points) in state.iter() {
                log::debug!(
                    "   {} ({}, axis {}): {} points",
                    metric.label(),
                    metric.as_str(),
                    metric.axis(),
                    points.len()
                );
            }
            emit(&state, out)
        }
        "benchmark" => {
            let path = PathBuf::from(args.get(1).ok_or(USAGE)?);
            let output = loader::load_benchmark_output(&path)?;

            if let Some(minutes) = parse_flag::<u64>(args, "--derive")? {
                config.derive_trades = true;
                config.minutes_between_points = minutes;
            }

            let start = parse_flag::<i64>(args, "--start")?;
            let end = parse_flag::<i64>(args, "--end")?;
            let window = if start.is_some() || end.is_some() {
                Some(TimeWindow::new(start, end))
            } else {
                None
            };

            let config = config.with_window_listener(|span| {
                log::info!("📅 Trade span: {:?}..{:?}", span.start, span.end);
            });
            let view = ChartPipeline::new(config).benchmark_view(&output, window);

            if view.trades.buys.is_none() {
                log::warn!("⚠️  No buys inside the requested window");
            }
            if view.trades.sells.is_none() {
                log::warn!("⚠️  No sells inside the requested window");
            }
            emit(&view, out)
        }
        "derive" => {
            let path = PathBuf::from(args.get(1).ok_or(USAGE)?);
            let series = loader::load_series(&path)?;

            if let Some(minutes) = parse_flag::<u64>(args, "--minutes")? {
                config.minutes_between_points = minutes;
            }

            let derived = ChartPipeline::new(config).rate_of_change(&series);
            log::info!("📉 {} points → {} derived", series.len(), derived.len());
            emit(&derived, out)
        }
        "query" => {
            let start = parse_flag::<i64>(args, "--start")?.ok_or("--start is required")?;
            let end = parse_flag::<i64>(args, "--end")?.ok_or("--end is required")?;

            let query = match flag_value(args, "--file") {
                Some(path) => {
                    let benchmark = loader::load_benchmark(&PathBuf::from(path))?;
                    StateQuery::for_benchmark(&benchmark, start, end)
                }
                None => {
                    let kind = args.get(1).ok_or(USAGE)?;
                    let id = args.get(2).ok_or(USAGE)?;
                    let source = StateSource::from_kind(kind, id)
                        .ok_or_else(|| format!("unknown state source: {}", kind))?;
                    StateQuery::new(source, start, end)
                }
            };

            let url = query.url(&config.api_base_url)?;
            println!("{}", url);
            Ok(())
        }
        _ => Err(USAGE.into()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Stderr)
        .init();

    dotenv::dotenv().ok();

    let config = PipelineConfig::from_env();
    log::info!("🚀 Starting chart_series");
    log::info!("   Minutes between points: {}", config.minutes_between_points);
    log::info!("   Derive trades: {}", config.derive_trades);

    let args: Vec<String> = env::args().skip(1).collect();
    if let Err(e) = run(&args, config) {
        log::error!("❌ {}", e);
        return Err(e);
    }
    Ok(())
}
