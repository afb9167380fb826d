/// Per-file metadata and the metadata panel.
///
/// A file that vanishes or becomes unreadable between the scan and the read
/// degrades to a one-line diagnostic in its slot; the rest of the batch is
/// still processed.
use crate::analysis::content_type::probe_content_type;
use crate::error::{Result, SortError, MSG_METADATA_FAILED};
use crate::model::size::format_kib;
use crate::model::{FileRecord, Grouping};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Header line of the metadata panel.
pub const METADATA_HEADER: &str = "File metadata analysis:";

/// Label shown when the content-type probe gives up.
pub const UNKNOWN_CONTENT_TYPE: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileMetadata {
    pub size_bytes: u64,
    pub modified: DateTime<Utc>,
    /// `None` when the probe could not determine a type.
    pub content_type: Option<String>,
}

impl FileMetadata {
    pub fn content_type_label(&self) -> &str {
        self.content_type.as_deref().unwrap_or(UNKNOWN_CONTENT_TYPE)
    }
}

/// Read size, modification time and a content-type guess for one file.
pub fn read_metadata(path: &Path) -> Result<FileMetadata> {
    let meta_error = |source| SortError::Metadata {
        name: display_name(path),
        source,
    };

    let meta = fs::metadata(path).map_err(meta_error)?;
    let modified = meta.modified().map_err(meta_error)?;

    Ok(FileMetadata {
        size_bytes: meta.len(),
        modified: DateTime::<Utc>::from(modified),
        content_type: probe_content_type(path).map(str::to_owned),
    })
}

/// Render the paragraph for one file.
pub fn render_entry(name: &str, meta: &FileMetadata) -> String {
    format!(
        "File: {name}\n  Size: {}\n  Last modified: {}\n  Content type: {}\n\n",
        format_kib(meta.size_bytes),
        format_timestamp(&meta.modified),
        meta.content_type_label(),
    )
}

/// Inline replacement for a file whose metadata could not be read.
pub fn render_failure(name: &str) -> String {
    format!("{MSG_METADATA_FAILED} {name}\n")
}

/// Read and render metadata for one record, degrading failures in place.
pub fn describe(record: &FileRecord) -> String {
    match read_metadata(record.path()) {
        Ok(meta) => render_entry(record.name(), &meta),
        Err(err) => {
            warn!("{err}");
            render_failure(record.name())
        }
    }
}

/// Render the metadata panel: the header, then one paragraph per file in
/// grouped order.
pub fn render_metadata(grouping: &Grouping) -> String {
    let mut out = format!("{METADATA_HEADER}\n");
    for record in grouping.iter_files() {
        out.push_str(&describe(record));
    }
    out
}

/// RFC 3339 in UTC with whole seconds, e.g. `2024-03-01T09:30:00Z`.
pub fn format_timestamp(ts: &DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ScannedFile;
    use chrono::TimeZone;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn read_reports_size_and_type() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("clip.mp4");
        fs::write(&path, vec![0u8; 3000]).unwrap();

        let meta = read_metadata(&path).unwrap();
        assert_eq!(meta.size_bytes, 3000);
        assert_eq!(meta.content_type.as_deref(), Some("video/mp4"));
    }

    #[test]
    fn read_missing_file_is_metadata_error() {
        let tmp = TempDir::new().unwrap();
        let err = read_metadata(&tmp.path().join("gone.pdf")).unwrap_err();
        assert!(matches!(err, SortError::Metadata { ref name, .. } if name == "gone.pdf"));
    }

    #[test]
    fn entry_format_truncates_to_kib() {
        let meta = FileMetadata {
            size_bytes: 2047,
            modified: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            content_type: None,
        };
        assert_eq!(
            render_entry("a.bin", &meta),
            "File: a.bin\n  Size: 1 KB\n  Last modified: 2024-03-01T09:30:00Z\n  Content type: unknown\n\n"
        );
    }

    /// One unreadable file must not stop the rest of the panel.
    #[test]
    fn panel_isolates_per_file_failures() {
        let tmp = TempDir::new().unwrap();
        let present = tmp.path().join("here.txt");
        fs::write(&present, b"hello").unwrap();

        let grouping: Grouping = [
            ScannedFile::new("gone.txt", tmp.path().join("gone.txt")),
            ScannedFile::new("here.txt", present),
        ]
        .into_iter()
        .map(FileRecord::from_scanned)
        .collect();

        let panel = render_metadata(&grouping);
        assert!(panel.starts_with("File metadata analysis:\n"));
        assert!(panel.contains("Could not read metadata for file: gone.txt\n"));
        assert!(panel.contains("File: here.txt\n  Size: 0 KB\n"));
        assert!(panel.contains("Content type: text/plain"));
    }

    #[test]
    fn empty_grouping_renders_header_only() {
        assert_eq!(render_metadata(&Grouping::new()), "File metadata analysis:\n");
    }

    #[test]
    fn display_name_falls_back_to_path() {
        assert_eq!(display_name(Path::new("/x/y.txt")), "y.txt");
        assert_eq!(display_name(&PathBuf::from("/")), "/");
    }
}
