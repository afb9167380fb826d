/// Analysis modules — everything computed from a scan result.
///
/// The classifier and the report aggregator use two independent rule sets
/// and may disagree on naming. They are kept apart on purpose.
pub mod classify;
pub mod content_type;
pub mod metadata;
pub mod report;

pub use classify::{classify, group, render_grouping, OTHER_FILES};
pub use content_type::probe_content_type;
pub use metadata::{read_metadata, render_metadata, FileMetadata, METADATA_HEADER};
pub use report::{aggregate, aggregate_files, render_report, report_category, write_report, ReportCategory};
