use serde::Serialize;

/// Counters collected while reshaping one survey sheet.
#[derive(Debug, Default, Clone, PartialEq, Serialize)]
pub struct ExtractionStats {
    pub rows_loaded: usize,
    pub metadata_rows_dropped: usize,
    pub rating_columns: usize,

    // course names that needed the " - " suffix fallback
    pub fallback_names: usize,

    pub records_kept: usize,
    pub records_dropped: usize,
}

impl ExtractionStats {
    pub fn pct(part: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            (part as f64 / total as f64) * 100.0
        }
    }

    /// Share of (row, column) cells that failed numeric coercion or were empty.
    pub fn dropped_pct(&self) -> f64 {
        Self::pct(
            self.records_dropped,
            self.records_kept + self.records_dropped,
        )
    }
}
