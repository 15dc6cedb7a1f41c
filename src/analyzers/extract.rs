//! Wide-to-long reshape of the survey sheet.
//!
//! Rating columns are recognised by the [`RATING_PREFIX`] on their header.
//! Each header is turned into a course name in two stages:
//! [`match_course_code`] looks for an `ACC<digits>` course code followed by
//! its description, and [`course_name_from_suffix`] falls back to the text
//! after the last `" - "`.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, info, warn};

use crate::analyzers::types::LongRecord;
use crate::error::{RaterError, Result};
use crate::stats::ExtractionStats;
use crate::table::RawTable;

/// Header prefix that marks an overall course rating column.
pub const RATING_PREFIX: &str = "Rate ACC";

const SUFFIX_SEPARATOR: &str = " - ";

static COURSE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"ACC\s*\d+[A-Z]*\s+[^\-\n]+").unwrap());

/// A selected rating column and the course it reports on.
#[derive(Debug, Clone, PartialEq)]
pub struct RatingColumn {
    pub index: usize,
    pub header: String,
    pub course_name: String,
    pub source: NameSource,
}

/// Long records plus the counters gathered while producing them.
#[derive(Debug)]
pub struct Extraction {
    pub records: Vec<LongRecord>,
    pub stats: ExtractionStats,
}

/// Collapses whitespace runs to single spaces and trims both ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First stage: the `ACC <number><letters> <description>` span, up to the
/// next hyphen or newline.
pub fn match_course_code(column_name: &str) -> Option<String> {
    COURSE_PATTERN
        .find(column_name)
        .map(|m| normalize_whitespace(m.as_str()))
}

/// Second stage: the text after the last `" - "`, or the whole name if the
/// separator is absent.
pub fn course_name_from_suffix(column_name: &str) -> String {
    let trailing = column_name
        .rsplit(SUFFIX_SEPARATOR)
        .next()
        .unwrap_or(column_name);
    normalize_whitespace(trailing)
}

/// Which stage produced a course name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameSource {
    CourseCode,
    Suffix,
}

/// Course name for a rating column header, trying the course code first and
/// the `" - "` suffix second.
pub fn extract_course_name(column_name: &str) -> (String, NameSource) {
    match match_course_code(column_name) {
        Some(name) => (name, NameSource::CourseCode),
        None => (course_name_from_suffix(column_name), NameSource::Suffix),
    }
}

/// Columns whose textual header starts with [`RATING_PREFIX`], in sheet order.
pub fn rating_columns(table: &RawTable) -> Vec<RatingColumn> {
    (0..table.column_count())
        .filter_map(|index| {
            let header = table.column_name(index)?;
            if !header.starts_with(RATING_PREFIX) {
                return None;
            }

            let (course_name, source) = extract_course_name(header);
            if source == NameSource::Suffix {
                warn!(header, course_name = %course_name, "No course code in header, using suffix");
            }
            debug!(index, header, course_name = %course_name, "Rating column");

            Some(RatingColumn {
                index,
                header: header.to_string(),
                course_name,
                source,
            })
        })
        .collect()
}

/// Reshapes the sheet into one [`LongRecord`] per valid rating.
///
/// Metadata rows are removed first. Records are emitted column by column,
/// rows in sheet order within each column. Cells that are empty or not
/// numeric are skipped and counted in [`ExtractionStats::records_dropped`].
///
/// # Errors
///
/// [`RaterError::Configuration`] when no column header starts with
/// [`RATING_PREFIX`].
#[tracing::instrument(skip_all, fields(rows = table.row_count(), columns = table.column_count()))]
pub fn extract(mut table: RawTable) -> Result<Extraction> {
    let mut stats = ExtractionStats {
        rows_loaded: table.row_count(),
        ..Default::default()
    };
    stats.metadata_rows_dropped = table.drop_metadata_rows();

    let columns = rating_columns(&table);
    if columns.is_empty() {
        return Err(RaterError::Configuration(format!(
            "no overall course rating columns found; expected columns starting with \"{}\"",
            RATING_PREFIX
        )));
    }
    stats.rating_columns = columns.len();
    stats.fallback_names = columns
        .iter()
        .filter(|c| c.source == NameSource::Suffix)
        .count();

    let mut records = Vec::new();
    for column in &columns {
        for row in 0..table.row_count() {
            match table.cell(row, column.index).as_rating() {
                Some(rating) => records.push(LongRecord::new(column.course_name.clone(), rating)),
                None => stats.records_dropped += 1,
            }
        }
    }
    stats.records_kept = records.len();

    info!(
        rating_columns = stats.rating_columns,
        records_kept = stats.records_kept,
        records_dropped = stats.records_dropped,
        dropped_pct = stats.dropped_pct(),
        "Extraction complete"
    );

    Ok(Extraction { records, stats })
}
