/// Summary report — category counts, the fixed template and persistence.
///
/// Counting uses its own suffix rules on the lower-cased full name. These are
/// independent of [`classify`](crate::analysis::classify): a `.jpeg` file is
/// labelled `jpeg` by the classifier but is not counted as an image here.
use crate::error::{Result, SortError};
use crate::model::{ReportCounts, ScannedFile};
use std::fs;
use std::path::Path;
use tracing::info;

/// Report category of a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReportCategory {
    Document,
    Image,
    Video,
}

impl ReportCategory {
    /// Suffixes per category, checked in this order. First match wins.
    const RULES: [(ReportCategory, &'static [&'static str]); 3] = [
        (ReportCategory::Document, &[".docx", ".pdf"]),
        (ReportCategory::Image, &[".jpg", ".png"]),
        (ReportCategory::Video, &[".mp4", ".avi"]),
    ];
}

/// Category of a file name for counting purposes, if any.
pub fn report_category(file_name: &str) -> Option<ReportCategory> {
    let lower = file_name.to_lowercase();
    ReportCategory::RULES
        .iter()
        .find(|(_, suffixes)| suffixes.iter().any(|s| lower.ends_with(s)))
        .map(|&(category, _)| category)
}

/// Count files into the report buckets.
pub fn aggregate<'a, I>(names: I) -> ReportCounts
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = ReportCounts::default();
    for name in names {
        counts.total += 1;
        match report_category(name) {
            Some(ReportCategory::Document) => counts.documents += 1,
            Some(ReportCategory::Image) => counts.images += 1,
            Some(ReportCategory::Video) => counts.videos += 1,
            None => {}
        }
    }
    counts
}

/// Count a scan result.
pub fn aggregate_files(files: &[ScannedFile]) -> ReportCounts {
    aggregate(files.iter().map(|f| f.name.as_str()))
}

/// Render the fixed report template. Contains no timestamps, so identical
/// counts always render identically.
pub fn render_report(counts: &ReportCounts) -> String {
    format!(
        "Summary report:\nTotal files: {}\nDocuments: {}\nImages: {}\nVideos: {}\n",
        counts.total, counts.documents, counts.images, counts.videos
    )
}

/// Overwrite `path` with the report text.
pub fn write_report(text: &str, path: &Path) -> Result<()> {
    fs::write(path, text).map_err(|source| SortError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Report written to {}", path.display());
    Ok(())
}
