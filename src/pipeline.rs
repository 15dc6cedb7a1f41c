//! End-to-end run: locate → load → extract → aggregate → persist.

use tracing::info;

use crate::analyzers::aggregate::rank_courses;
use crate::analyzers::extract::extract;
use crate::analyzers::types::RankedCourse;
use crate::chart::render_chart;
use crate::config::ReportConfig;
use crate::discovery::find_excel_file;
use crate::error::Result;
use crate::output::{print_json, print_pretty, write_ranking};
use crate::parser::load_workbook;
use crate::stats::ExtractionStats;
use crate::table::RawTable;

/// Result of the in-memory stages, before anything touches disk.
#[derive(Debug)]
pub struct Report {
    pub ranking: Vec<RankedCourse>,
    pub stats: ExtractionStats,
}

/// Extracts and ranks an already-loaded sheet.
pub fn build_report(table: RawTable) -> Result<Report> {
    let extraction = extract(table)?;
    let ranking = rank_courses(&extraction.records);

    info!(courses = ranking.len(), "Ranking computed");
    Ok(Report {
        ranking,
        stats: extraction.stats,
    })
}

/// Writes the CSV and, unless disabled, the chart.
pub fn persist_report(config: &ReportConfig, report: &Report) -> Result<()> {
    let csv_path = config.csv_path();
    write_ranking(&csv_path, &report.ranking)?;
    info!(path = %csv_path.display(), "Ranking CSV written");

    if config.render_chart {
        let png_path = config.png_path();
        render_chart(&png_path, &report.ranking, &config.chart_title)?;
        info!(path = %png_path.display(), "Ranking chart written");
    }

    Ok(())
}

/// Runs the whole pipeline. Nothing is written unless every in-memory stage
/// succeeds.
#[tracing::instrument(skip_all, fields(data_dir = %config.data_dir.display()))]
pub fn run(config: &ReportConfig) -> Result<Report> {
    let input = find_excel_file(config.data_dir())?;
    let table = load_workbook(&input)?;
    let report = build_report(table)?;

    print_pretty(&report.ranking);
    if let Err(e) = print_json(&report.stats) {
        tracing::warn!(error = %e, "Failed to render extraction stats");
    }

    persist_report(config, &report)?;
    Ok(report)
}
