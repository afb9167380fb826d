/// Size formatting for the metadata panel.
///
/// All internal sizes are `u64` bytes.

const KIB: u64 = 1024;

/// Whole kibibytes, truncating. A 1023-byte file reports as `0`.
pub fn to_kib(bytes: u64) -> u64 {
    bytes / KIB
}

/// `"<n> KB"` using truncating kibibytes. Labelled KB because that is what
/// users expect to read.
pub fn format_kib(bytes: u64) -> String {
    format!("{} KB", to_kib(bytes))
}
