//! Spreadsheet loader for survey exports.

use calamine::{Data, Reader, Xlsx, open_workbook};
use std::path::Path;
use tracing::debug;

use crate::error::{RaterError, Result};
use crate::table::{Cell, RawTable};

/// Reads the first worksheet of an `.xlsx` file into a [`RawTable`].
///
/// # Errors
///
/// Returns [`RaterError::Workbook`] if the file cannot be opened or has no
/// worksheet, and [`RaterError::Configuration`] if the sheet is too short to
/// carry a header row.
#[tracing::instrument(skip(path), fields(path = %path.display()))]
pub fn load_workbook(path: &Path) -> Result<RawTable> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .map_err(|e| RaterError::Workbook(format!("failed to open {}: {}", path.display(), e)))?;

    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| RaterError::Workbook(format!("no worksheet in {}", path.display())))?
        .map_err(|e| RaterError::Workbook(format!("failed to read {}: {}", path.display(), e)))?;

    // calamine trims leading empty rows/columns; pad them back so the header
    // stays on its absolute row.
    let (row_offset, col_offset) = range
        .start()
        .map(|(r, c)| (r as usize, c as usize))
        .unwrap_or((0, 0));

    let mut rows: Vec<Vec<Cell>> = vec![Vec::new(); row_offset];
    for row in range.rows() {
        let mut cells = vec![Cell::Empty; col_offset];
        cells.extend(row.iter().map(cell_from_data));
        rows.push(cells);
    }

    debug!(
        rows = rows.len(),
        row_offset, col_offset, "Worksheet loaded"
    );

    RawTable::from_sheet_rows(rows)
}

/// Maps a calamine cell onto the pipeline's [`Cell`].
pub fn cell_from_data(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Bool(b) => Cell::Bool(*b),
        other => Cell::Other(other.to_string()),
    }
}
