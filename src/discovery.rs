//! Locates the survey export in the input directory.

use glob::{Pattern, glob};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::{RaterError, Result};

/// Returns the single `.xlsx` file directly inside `data_dir`.
///
/// # Errors
///
/// [`RaterError::InputDiscovery`] when the directory holds zero or several
/// `.xlsx` files. A missing directory counts as zero.
#[tracing::instrument(skip(data_dir), fields(data_dir = %data_dir.display()))]
pub fn find_excel_file(data_dir: &Path) -> Result<PathBuf> {
    let pattern = format!("{}/*.xlsx", Pattern::escape(&data_dir.to_string_lossy()));

    let mut files: Vec<PathBuf> = glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();

    debug!(candidates = files.len(), "Scanned input directory");

    if files.len() != 1 {
        let dir = data_dir
            .canonicalize()
            .unwrap_or_else(|_| data_dir.to_path_buf());
        return Err(RaterError::InputDiscovery {
            dir,
            found: files.len(),
        });
    }

    let file = files.remove(0);
    info!(file = %file.display(), "Input workbook located");
    Ok(file)
}
