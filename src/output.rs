//! Output formatting and persistence for the course ranking.
//!
//! Supports log rendering (pretty and JSON) and the CSV artifact.

use csv::WriterBuilder;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::analyzers::types::RankedCourse;
use crate::error::Result;
use crate::stats::ExtractionStats;

pub const CSV_HEADER: [&str; 4] = ["rank", "course_name", "mean_rating", "response_count"];

/// Logs the ranking using Rust's debug pretty-print format.
pub fn print_pretty(ranking: &[RankedCourse]) {
    debug!("{:#?}", ranking);
}

/// Logs extraction counters as pretty-printed JSON.
pub fn print_json(stats: &ExtractionStats) -> serde_json::Result<()> {
    info!("{}", serde_json::to_string_pretty(stats)?);
    Ok(())
}

/// Serializes the ranking as CSV into any writer.
///
/// The header is always written, so an empty ranking still yields a valid table.
pub fn write_csv<W: Write>(writer: W, ranking: &[RankedCourse]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);

    writer.write_record(CSV_HEADER)?;
    for course in ranking {
        writer.serialize(course)?;
    }
    writer.flush()?;

    Ok(())
}

/// Writes the ranking to `path`, replacing any previous file and creating
/// parent directories as needed.
pub fn write_ranking(path: &Path, ranking: &[RankedCourse]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    debug!(path = %path.display(), rows = ranking.len(), "Writing ranking CSV");

    let file = fs::File::create(path)?;
    write_csv(file, ranking)
}
