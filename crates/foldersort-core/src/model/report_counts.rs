/// Aggregate counts for the summary report.
use serde::Serialize;

/// Invariant: `documents + images + videos <= total`. Files matching no
/// category only increment `total`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReportCounts {
    pub total: u64,
    pub documents: u64,
    pub images: u64,
    pub videos: u64,
}

impl ReportCounts {
    /// Files counted in none of the three categories.
    pub fn uncategorised(&self) -> u64 {
        self.total - (self.documents + self.images + self.videos)
    }
}
