//! Study configuration.

use std::path::PathBuf;

/// Configuration for a housing study.
#[derive(Debug, Clone)]
pub struct StudyConfig {
    /// Path to the housing CSV
    pub data_path: PathBuf,

    /// Rows shown in previews (the conversion preview and query listings)
    pub preview_rows: usize,
}

impl StudyConfig {
    /// Configuration for a dataset at the given path, default preview size.
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            preview_rows: 5,
        }
    }

    /// Override the preview row count.
    pub fn with_preview_rows(mut self, rows: usize) -> Self {
        self.preview_rows = rows;
        self
    }
}

impl Default for StudyConfig {
    fn default() -> Self {
        Self::new("data/house_data.csv")
    }
}
