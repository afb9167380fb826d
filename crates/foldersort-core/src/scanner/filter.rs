/// Transient-file naming rules.
///
/// Editors and office suites leave `~`-prefixed lock files and `.tmp`
/// scratch files next to real documents. Both are skipped.

/// Leading marker of lock files (e.g. `~$report.docx`).
pub const TRANSIENT_PREFIX: char = '~';

/// Literal, case-sensitive suffix of scratch files. `.TMP` is not matched.
pub const TRANSIENT_SUFFIX: &str = ".tmp";

/// Why a regular file was left out of the scan result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exclusion {
    /// Name starts with [`TRANSIENT_PREFIX`].
    LockFile,
    /// Name ends with [`TRANSIENT_SUFFIX`].
    TempFile,
}

/// Apply the name rules in order: prefix first, then suffix.
pub fn exclusion_for(name: &str) -> Option<Exclusion> {
    if name.starts_with(TRANSIENT_PREFIX) {
        Some(Exclusion::LockFile)
    } else if name.ends_with(TRANSIENT_SUFFIX) {
        Some(Exclusion::TempFile)
    } else {
        None
    }
}
