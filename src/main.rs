//! CLI entry point for the course rater.
//!
//! Reads the single survey export from the data directory and writes the
//! ranked course table as CSV plus a bar chart.

use anyhow::{Context, Result};
use clap::Parser;
use course_rater::config::{
    DEFAULT_CSV_NAME, DEFAULT_DATA_DIR, DEFAULT_OUTPUT_DIR, DEFAULT_PNG_NAME, DEFAULT_TITLE,
    ReportConfig,
};
use course_rater::pipeline::run;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "course_rater")]
#[command(about = "Rank courses by average survey rating", long_about = None)]
struct Cli {
    /// Directory holding exactly one .xlsx survey export
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,

    /// Directory the CSV and chart are written to
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    /// File name of the ranking CSV
    #[arg(long, default_value = DEFAULT_CSV_NAME)]
    csv_name: String,

    /// File name of the ranking chart
    #[arg(long, default_value = DEFAULT_PNG_NAME)]
    png_name: String,

    /// Chart title
    #[arg(long, default_value = DEFAULT_TITLE)]
    title: String,

    /// Only write the CSV
    #[arg(long, default_value_t = false)]
    no_chart: bool,
}

impl From<Cli> for ReportConfig {
    fn from(cli: Cli) -> Self {
        Self {
            data_dir: cli.data_dir,
            output_dir: cli.output_dir,
            csv_name: cli.csv_name,
            png_name: cli.png_name,
            chart_title: cli.title,
            render_chart: !cli.no_chart,
        }
    }
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/course_rater.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("course_rater.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let config = ReportConfig::from(Cli::parse());

    let report = run(&config).with_context(|| {
        format!(
            "course ranking failed for input directory {}",
            config.data_dir.display()
        )
    })?;

    info!(
        courses = report.ranking.len(),
        csv = %config.csv_path().display(),
        "Finished"
    );
    Ok(())
}
