/// Error types for foldersort operations.
///
/// `Display` carries the technical detail for logs. [`SortError::user_message`]
/// gives the fixed text shown in place of a panel's normal output.
use std::path::PathBuf;
use thiserror::Error;

/// Message shown when the input field is empty.
pub const MSG_EMPTY_INPUT: &str = "Input field is empty. Enter a folder path.";
/// Message shown when the input does not name a directory.
pub const MSG_NOT_A_DIRECTORY: &str = "The specified path is not a folder.";
/// Message shown when the folder listing fails.
pub const MSG_SCAN_FAILED: &str = "Error reading folder. Check the path and try again.";
/// Prefix of the inline line that replaces an unreadable file's metadata.
pub const MSG_METADATA_FAILED: &str = "Could not read metadata for file:";
/// Message shown when the report cannot be produced or saved.
pub const MSG_REPORT_FAILED: &str = "Error while creating the report. Check file access.";

#[derive(Error, Debug)]
pub enum SortError {
    #[error("input path is empty")]
    EmptyInput,

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("failed to list {}: {source}", .path.display())]
    ScanIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Non-fatal: one file's metadata could not be read.
    #[error("failed to read metadata for {name}: {source}")]
    Metadata {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to {}: {source}", .path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SortError {
    /// Fixed human-readable message for the panel this error replaces.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => MSG_EMPTY_INPUT,
            Self::NotADirectory(_) => MSG_NOT_A_DIRECTORY,
            Self::ScanIo { .. } => MSG_SCAN_FAILED,
            Self::Metadata { .. } => MSG_METADATA_FAILED,
            Self::ReportWrite { .. } => MSG_REPORT_FAILED,
        }
    }
}

/// Result type for foldersort operations.
pub type Result<T> = std::result::Result<T, SortError>;
