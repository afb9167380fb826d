/// Extension-label classification and the grouped listing panel.
use crate::model::{FileRecord, Grouping, ScannedFile};

/// Label for names without a usable extension.
pub const OTHER_FILES: &str = "other files";

/// Derive a file's type label from its name.
///
/// The label is the lower-cased text after the last `.`, provided that dot
/// is not the first character. Otherwise the name has no extension and gets
/// [`OTHER_FILES`].
///
/// A trailing dot (`"name."`) yields an empty label, not the sentinel.
pub fn classify(file_name: &str) -> String {
    match file_name.rfind('.') {
        Some(idx) if idx > 0 => file_name[idx + 1..].to_lowercase(),
        _ => OTHER_FILES.to_string(),
    }
}

/// Classify scanned files and group them by label, preserving scan order.
pub fn group(files: Vec<ScannedFile>) -> Grouping {
    files.into_iter().map(FileRecord::from_scanned).collect()
}

/// Render the classification panel: one block per label, an indented line
/// per file, blocks separated by a blank line.
pub fn render_grouping(grouping: &Grouping) -> String {
    let mut out = String::new();
    for group in grouping.groups() {
        out.push_str(&group.label);
        out.push_str(":\n");
        for file in &group.files {
            out.push_str("  ");
            out.push_str(file.name());
            out.push('\n');
        }
        out.push('\n');
    }
    out
}
