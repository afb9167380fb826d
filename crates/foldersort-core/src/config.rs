/// Settings for a single pipeline run.
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name the summary report is written to when no path is configured.
pub const DEFAULT_REPORT_FILE: &str = "report.txt";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortConfig {
    /// Where the summary report is written. Relative paths resolve against
    /// the process working directory. The file is overwritten on every run.
    pub report_path: PathBuf,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
        }
    }
}

impl SortConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the report output path.
    pub fn with_report_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.report_path = path.into();
        self
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }
}
