//! Horizontal bar chart of the ranking, rendered to PNG via plotters.

use plotters::coord::ranged1d::SegmentValue;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::{debug, warn};

use crate::analyzers::types::RankedCourse;
use crate::error::{RaterError, Result};

const BAR_COLOR: RGBColor = RGBColor(0x4C, 0x78, 0xA8);
const X_MAX: f64 = 5.0;
const LABEL_OFFSET: f64 = 0.03;

// 12in wide, max(4, 0.55 * n)in tall, at 200 dpi
const WIDTH_PX: u32 = 2400;
const MIN_HEIGHT_PX: u32 = 800;
const ROW_HEIGHT_PX: u32 = 110;

/// Pixel dimensions for a chart of `rows` bars.
pub fn figure_size(rows: usize) -> (u32, u32) {
    let height = (rows as u32).saturating_mul(ROW_HEIGHT_PX).max(MIN_HEIGHT_PX);
    (WIDTH_PX, height)
}

/// Bars in drawing order: index 0 is the bottom bar, so the lowest rating
/// sits at the bottom and the top-ranked course at the top.
pub fn chart_rows(ranking: &[RankedCourse]) -> Vec<(&str, f64)> {
    ranking
        .iter()
        .rev()
        .map(|c| (c.course_name.as_str(), c.mean_rating))
        .collect()
}

fn chart_err<E: std::fmt::Display>(e: E) -> RaterError {
    RaterError::Chart(e.to_string())
}

/// Renders the ranking to `path`.
///
/// An empty ranking draws nothing and removes any chart left at `path` by an
/// earlier run, so the PNG never disagrees with the CSV.
#[tracing::instrument(skip(ranking, path), fields(path = %path.display(), courses = ranking.len()))]
pub fn render_chart(path: &Path, ranking: &[RankedCourse], title: &str) -> Result<()> {
    let rows = chart_rows(ranking);
    if rows.is_empty() {
        warn!("No ranked courses, skipping chart");
        match std::fs::remove_file(path) {
            Ok(()) => debug!("Removed stale chart"),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        return Ok(());
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }

    let (width, height) = figure_size(rows.len());
    let longest_name = rows.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
    let y_label_area = (longest_name as u32 * 15).clamp(200, 1200);

    let root = BitMapBackend::new(path, (width, height)).into_drawing_area();
    root.fill(&WHITE).map_err(chart_err)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(title, ("sans-serif", 48))
        .margin(30)
        .x_label_area_size(90)
        .y_label_area_size(y_label_area)
        .build_cartesian_2d(0f64..X_MAX, (0..rows.len()).into_segmented())
        .map_err(chart_err)?;

    let name_of = |v: &SegmentValue<usize>| match v {
        SegmentValue::CenterOf(i) => rows.get(*i).map(|(n, _)| n.to_string()).unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Average Course Rating (1-5)")
        .y_desc("Course")
        .y_labels(rows.len())
        .y_label_formatter(&name_of)
        .label_style(("sans-serif", 26))
        .axis_desc_style(("sans-serif", 30))
        .draw()
        .map_err(chart_err)?;

    chart
        .draw_series(rows.iter().enumerate().map(|(i, (_, value))| {
            let mut bar = Rectangle::new(
                [(0.0, SegmentValue::Exact(i)), (*value, SegmentValue::Exact(i + 1))],
                BAR_COLOR.filled(),
            );
            bar.set_margin(12, 12, 0, 0);
            bar
        }))
        .map_err(chart_err)?;

    let annotation = TextStyle::from(("sans-serif", 24).into_font())
        .pos(Pos::new(HPos::Left, VPos::Center));
    chart
        .draw_series(rows.iter().enumerate().map(|(i, (_, value))| {
            Text::new(
                format!("{:.2}", value),
                (*value + LABEL_OFFSET, SegmentValue::CenterOf(i)),
                annotation.clone(),
            )
        }))
        .map_err(chart_err)?;

    root.present().map_err(chart_err)?;
    debug!(width, height, "Chart written");

    Ok(())
}
