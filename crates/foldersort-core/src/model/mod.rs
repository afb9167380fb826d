/// Data model for a single foldersort invocation.
///
/// Nothing here outlives the invocation that created it; only the report
/// file on disk persists between runs.
pub mod file_record;
pub mod grouping;
pub mod report_counts;
pub mod size;

pub use file_record::{FileRecord, ScannedFile};
pub use grouping::Grouping;
pub use report_counts::ReportCounts;
