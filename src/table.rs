//! In-memory survey sheet: a header row plus the response rows beneath it.

use tracing::debug;

use crate::error::{RaterError, Result};

/// Sheet row holding the human-readable question text. Row 0 carries
/// machine question codes and is ignored.
pub const HEADER_ROW: usize = 1;

/// Identifier column used to spot export metadata rows.
pub const RESPONSE_ID_COLUMN: &str = "Response ID";

/// Prefix of the identifier value on injected metadata rows.
pub const METADATA_SENTINEL: &str = "{\"ImportId\"";

/// A single spreadsheet cell, reduced to the kinds the pipeline cares about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Number(f64),
    Text(String),
    Bool(bool),
    /// Dates, durations and spreadsheet error values, kept as display text.
    Other(String),
}

impl Cell {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Coerces the cell to a rating.
    ///
    /// Numbers pass through, text is trimmed and parsed. Everything else,
    /// including NaN and infinities, is `None`.
    pub fn as_rating(&self) -> Option<f64> {
        let value = match self {
            Cell::Number(n) => *n,
            Cell::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        value.is_finite().then_some(value)
    }
}

#[derive(Debug, Clone, Default)]
pub struct RawTable {
    header: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
}

impl RawTable {
    /// Builds a table from every row of a sheet, taking [`HEADER_ROW`] as the
    /// column names and the rows after it as data.
    ///
    /// # Errors
    ///
    /// [`RaterError::Configuration`] if the sheet is too short to have a header row.
    pub fn from_sheet_rows(mut rows: Vec<Vec<Cell>>) -> Result<Self> {
        if rows.len() <= HEADER_ROW {
            return Err(RaterError::Configuration(format!(
                "sheet has {} row(s); expected a header on row {}",
                rows.len(),
                HEADER_ROW + 1
            )));
        }

        let data = rows.split_off(HEADER_ROW + 1);
        let header = rows.pop().unwrap_or_default();
        Ok(Self::new(header, data))
    }

    pub fn new(header: Vec<Cell>, rows: Vec<Vec<Cell>>) -> Self {
        Self { header, rows }
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Column name when the header cell is textual.
    pub fn column_name(&self, col: usize) -> Option<&str> {
        self.header.get(col).and_then(Cell::as_text)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        (0..self.column_count()).find(|&col| self.column_name(col) == Some(name))
    }

    /// Cell at `(row, col)`; short rows read as empty.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(&Cell::Empty)
    }

    /// Removes rows whose `Response ID` starts with the import metadata
    /// sentinel. Returns how many rows were removed.
    pub fn drop_metadata_rows(&mut self) -> usize {
        let Some(id_col) = self.column_index(RESPONSE_ID_COLUMN) else {
            return 0;
        };

        let before = self.rows.len();
        self.rows.retain(|row| {
            !row.get(id_col)
                .and_then(Cell::as_text)
                .is_some_and(|id| id.starts_with(METADATA_SENTINEL))
        });

        let dropped = before - self.rows.len();
        if dropped > 0 {
            debug!(dropped, "Removed export metadata rows");
        }
        dropped
    }
}
