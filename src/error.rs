//! Error taxonomy for the ranking pipeline.

use std::path::PathBuf;

/// Fatal failures that abort a run before any output is written.
#[derive(Debug, thiserror::Error)]
pub enum RaterError {
    /// Zero or more than one `.xlsx` candidate in the input directory.
    #[error("expected exactly one .xlsx file in {}, found {found}", .dir.display())]
    InputDiscovery { dir: PathBuf, found: usize },

    /// The sheet does not have the shape of the expected survey export.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("workbook error: {0}")]
    Workbook(String),

    #[error("chart rendering failed: {0}")]
    Chart(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Glob(#[from] glob::PatternError),
}

pub type Result<T> = std::result::Result<T, RaterError>;
