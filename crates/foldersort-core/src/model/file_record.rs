/// Per-file values produced by the scanner and the classifier.
use compact_str::CompactString;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// A regular file that survived the scanner's filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScannedFile {
    /// File name only, lossily converted to UTF-8.
    pub name: CompactString,
    /// Full path, used for metadata reads.
    pub path: PathBuf,
}

impl ScannedFile {
    pub fn new(name: impl Into<CompactString>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }
}

/// A scanned file together with its extension label.
///
/// The label is fixed at construction and always equals
/// [`classify`](crate::analysis::classify)`(name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    name: CompactString,
    #[serde(rename = "type")]
    kind: String,
    path: PathBuf,
}

impl FileRecord {
    /// Classify a scanned file.
    pub fn from_scanned(file: ScannedFile) -> Self {
        let kind = crate::analysis::classify(&file.name);
        Self {
            name: file.name,
            kind,
            path: file.path,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Lower-cased extension, `""` for a trailing dot, or the
    /// [`OTHER_FILES`](crate::analysis::OTHER_FILES) sentinel.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
