/// foldersort Core — scanning, classification, metadata and reporting.
///
/// This crate contains all business logic with zero UI dependencies.
/// Frontends hand it a folder path and render the returned text panels.
///
/// # Modules
///
/// - [`model`] — Scanned files, classified records, grouping and counts.
/// - [`scanner`] — Single-level directory listing with transient-file filtering.
/// - [`analysis`] — Classifier, metadata reader, content-type probe and report aggregator.
/// - [`pipeline`] — The end-to-end pass that produces all three panels.
/// - [`config`] — Output settings for a pipeline run.
/// - [`error`] — Error taxonomy and the fixed user-facing messages.
pub mod analysis;
pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod scanner;

pub use config::SortConfig;
pub use error::{Result, SortError};
pub use pipeline::{sort_folder, ClassificationOutcome, ReportOutcome, SortOutcome};
