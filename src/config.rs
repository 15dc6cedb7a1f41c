use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_OUTPUT_DIR: &str = "outputs";
pub const DEFAULT_CSV_NAME: &str = "macc_course_ranking_2024.csv";
pub const DEFAULT_PNG_NAME: &str = "macc_course_ranking_2024.png";
pub const DEFAULT_TITLE: &str = "2024 MAcc Course Ratings Ranked by Average Score";

/// Where the pipeline reads its input and writes its two artifacts.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory scanned for the single survey export.
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
    pub csv_name: String,
    pub png_name: String,
    pub chart_title: String,
    /// When false only the CSV is produced.
    pub render_chart: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            csv_name: DEFAULT_CSV_NAME.to_string(),
            png_name: DEFAULT_PNG_NAME.to_string(),
            chart_title: DEFAULT_TITLE.to_string(),
            render_chart: true,
        }
    }
}

impl ReportConfig {
    pub fn csv_path(&self) -> PathBuf {
        self.output_dir.join(&self.csv_name)
    }

    pub fn png_path(&self) -> PathBuf {
        self.output_dir.join(&self.png_name)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
