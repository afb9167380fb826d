/// The end-to-end sorting pass behind the "sort" action.
///
/// Two independent stages run back to back:
///
/// 1. **Classification** — scan, group by extension label, read metadata.
///    Input and scan errors abort the whole invocation.
/// 2. **Report** — a fresh scan, category counts, then the report file is
///    overwritten. Failures here only affect the report panel.
use crate::analysis::{self, aggregate_files, render_report, write_report};
use crate::config::SortConfig;
use crate::error::{Result, SortError, MSG_REPORT_FAILED};
use crate::model::{Grouping, ReportCounts};
use crate::scanner::{resolve_folder, scan};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Classification panel text when no file survives the scan filters.
pub const MSG_EMPTY_FOLDER: &str = "Folder is empty or contains no matching files.";

/// Result of the classification stage.
#[derive(Debug)]
pub enum ClassificationOutcome {
    /// The folder holds no matching files.
    Empty,
    Grouped {
        grouping: Grouping,
        /// Rendered classification panel.
        listing: String,
        /// Rendered metadata panel.
        metadata: String,
    },
}

/// Result of the report stage.
#[derive(Debug)]
pub struct ReportOutcome {
    pub counts: ReportCounts,
    /// Rendered report panel, also the file content.
    pub text: String,
    /// Set when the report could not be saved. The in-memory report is
    /// still valid.
    pub write_error: Option<SortError>,
}

/// Everything a frontend needs to fill its panels.
#[derive(Debug)]
pub struct SortOutcome {
    pub folder: PathBuf,
    pub classification: ClassificationOutcome,
    pub report: Result<ReportOutcome>,
}

impl SortOutcome {
    pub fn classification_panel(&self) -> &str {
        match &self.classification {
            ClassificationOutcome::Empty => MSG_EMPTY_FOLDER,
            ClassificationOutcome::Grouped { listing, .. } => listing.as_str(),
        }
    }

    /// Metadata panel text; empty when the folder had no matching files.
    pub fn metadata_panel(&self) -> &str {
        match &self.classification {
            ClassificationOutcome::Empty => "",
            ClassificationOutcome::Grouped { metadata, .. } => metadata.as_str(),
        }
    }

    /// The report text, or the fixed failure message if the report could not
    /// be produced or saved.
    pub fn report_panel(&self) -> &str {
        match &self.report {
            Ok(report) if report.write_error.is_none() => report.text.as_str(),
            _ => MSG_REPORT_FAILED,
        }
    }
}

/// Run both stages for the folder named by `input`.
///
/// Returns `Err` only when the classification stage cannot run at all:
/// empty input, a path that is not a directory, or an unreadable listing.
pub fn sort_folder(input: &str, config: &SortConfig) -> Result<SortOutcome> {
    let folder = resolve_folder(input)?;
    info!("Sorting {}", folder.display());

    let classification = classify_folder(&folder)?;
    let report = build_report(&folder, config.report_path());

    Ok(SortOutcome {
        folder,
        classification,
        report,
    })
}

/// Classification stage: scan, group and describe each file.
pub fn classify_folder(folder: &Path) -> Result<ClassificationOutcome> {
    let files = scan(folder)?;
    if files.is_empty() {
        info!("No matching files in {}", folder.display());
        return Ok(ClassificationOutcome::Empty);
    }

    let grouping = analysis::group(files);
    info!(
        "Classified {} files into {} groups",
        grouping.file_count(),
        grouping.len()
    );
    let listing = analysis::render_grouping(&grouping);
    let metadata = analysis::render_metadata(&grouping);

    Ok(ClassificationOutcome::Grouped {
        grouping,
        listing,
        metadata,
    })
}

/// Report stage: re-scan, count and persist.
///
/// A scan failure is returned as `Err`. A write failure is recorded on the
/// outcome instead, so the caller still receives the counts.
pub fn build_report(folder: &Path, report_path: &Path) -> Result<ReportOutcome> {
    let files = scan(folder).inspect_err(|err| warn!("Report scan failed: {err}"))?;
    let counts = aggregate_files(&files);
    info!(
        "Counted {} files ({} uncategorised)",
        counts.total,
        counts.uncategorised()
    );
    let text = render_report(&counts);

    let write_error = write_report(&text, report_path)
        .inspect_err(|err| warn!("{err}"))
        .err();

    Ok(ReportOutcome {
        counts,
        text,
        write_error,
    })
}
