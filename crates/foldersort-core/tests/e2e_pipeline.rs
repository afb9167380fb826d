/// End-to-end pipeline tests.
///
/// These exercise `scanner::scan`, the classifier, the metadata reader and
/// the report writer against real temporary folders, with no mocking.
use foldersort_core::analysis::aggregate_files;
use foldersort_core::error::MSG_REPORT_FAILED;
use foldersort_core::pipeline::MSG_EMPTY_FOLDER;
use foldersort_core::scanner::scan;
use foldersort_core::{sort_folder, ClassificationOutcome, SortConfig, SortError};
use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ──────────────────────────────────────────────────────────────────

fn write_bytes(path: &Path, n: usize) {
    let mut f = fs::File::create(path).unwrap();
    f.write_all(&vec![0u8; n]).unwrap();
}

/// Build the reference folder:
///
/// ```text
/// root/
///   a.pdf   (2 048 bytes)
///   b.jpg   (100 bytes)
///   c.mp4   (100 bytes)
///   d.txt   (100 bytes)
///   ~temp   (lock file, excluded)
///   e.tmp   (scratch file, excluded)
///   sub/    (directory, excluded)
///     f.pdf
/// ```
fn build_scenario(root: &Path) {
    write_bytes(&root.join("a.pdf"), 2_048);
    write_bytes(&root.join("b.jpg"), 100);
    write_bytes(&root.join("c.mp4"), 100);
    write_bytes(&root.join("d.txt"), 100);
    write_bytes(&root.join("~temp"), 10);
    write_bytes(&root.join("e.tmp"), 10);
    fs::create_dir(root.join("sub")).unwrap();
    write_bytes(&root.join("sub").join("f.pdf"), 10);
}

fn report_config(dir: &Path) -> SortConfig {
    SortConfig::new().with_report_path(dir.join("report.txt"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// Scan keeps regular files and drops transient names and directories.
#[test]
fn scan_matches_scenario() {
    let tmp = TempDir::new().unwrap();
    build_scenario(tmp.path());

    let names: BTreeSet<String> = scan(tmp.path())
        .unwrap()
        .into_iter()
        .map(|f| f.name.to_string())
        .collect();
    let expected: BTreeSet<String> = ["a.pdf", "b.jpg", "c.mp4", "d.txt"]
        .into_iter()
        .map(String::from)
        .collect();
    assert_eq!(names, expected);
}

/// Upper-case `.TMP` is not a scratch file.
#[test]
fn scan_keeps_uppercase_tmp() {
    let tmp = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("A.TMP"), 1);
    write_bytes(&tmp.path().join("b.tmp"), 1);

    let files = scan(tmp.path()).unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name.as_str(), "A.TMP");
}

#[test]
fn scan_of_file_is_not_a_directory() {
    let tmp = TempDir::new().unwrap();
    let file = tmp.path().join("a.pdf");
    write_bytes(&file, 1);
    assert!(matches!(scan(&file), Err(SortError::NotADirectory(_))));
}

/// Full run over the scenario: panels and report file.
#[test]
fn sort_folder_scenario() {
    let tmp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    build_scenario(tmp.path());

    let outcome = sort_folder(&tmp.path().to_string_lossy(), &report_config(out.path())).unwrap();

    let ClassificationOutcome::Grouped { grouping, .. } = &outcome.classification else {
        panic!("expected grouped classification");
    };
    assert_eq!(grouping.file_count(), 4);
    for label in ["pdf", "jpg", "mp4", "txt"] {
        let group = grouping
            .groups()
            .iter()
            .find(|g| g.label == label)
            .expect("group missing");
        assert_eq!(group.files.len(), 1, "one file labelled {label}");
    }

    let listing = outcome.classification_panel();
    assert!(listing.contains("pdf:\n  a.pdf\n\n"));
    assert!(!listing.contains("~temp"));
    assert!(!listing.contains("e.tmp"));

    let metadata = outcome.metadata_panel();
    assert!(metadata.starts_with("File metadata analysis:\n"));
    assert!(metadata.contains("File: a.pdf\n  Size: 2 KB\n"));
    assert!(metadata.contains("Content type: application/pdf"));
    assert_eq!(metadata.matches("File: ").count(), 4);

    let report = outcome.report.as_ref().unwrap();
    assert_eq!(report.counts.total, 4);
    assert_eq!(report.counts.documents, 1);
    assert_eq!(report.counts.images, 1);
    assert_eq!(report.counts.videos, 1);
    assert_eq!(
        outcome.report_panel(),
        "Summary report:\nTotal files: 4\nDocuments: 1\nImages: 1\nVideos: 1\n"
    );
    assert_eq!(
        fs::read_to_string(out.path().join("report.txt")).unwrap(),
        report.text
    );
}

/// Two runs over an unchanged folder write byte-identical reports.
#[test]
fn report_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    build_scenario(tmp.path());
    let config = report_config(out.path());
    let input = tmp.path().to_string_lossy().to_string();

    sort_folder(&input, &config).unwrap();
    let first = fs::read(out.path().join("report.txt")).unwrap();
    sort_folder(&input, &config).unwrap();
    let second = fs::read(out.path().join("report.txt")).unwrap();
    assert_eq!(first, second);
}

/// Permuting the scan result does not change the counts.
#[test]
fn aggregation_ignores_scan_order() {
    let tmp = TempDir::new().unwrap();
    build_scenario(tmp.path());

    let mut files = scan(tmp.path()).unwrap();
    let forward = aggregate_files(&files);
    files.reverse();
    assert_eq!(forward, aggregate_files(&files));
}

#[test]
fn empty_folder_reports_zeros() {
    let tmp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();

    let outcome = sort_folder(&tmp.path().to_string_lossy(), &report_config(out.path())).unwrap();
    assert_eq!(outcome.classification_panel(), MSG_EMPTY_FOLDER);
    assert_eq!(
        fs::read_to_string(out.path().join("report.txt")).unwrap(),
        "Summary report:\nTotal files: 0\nDocuments: 0\nImages: 0\nVideos: 0\n"
    );
}

/// A folder holding only transient files behaves like an empty one.
#[test]
fn only_transient_files_is_empty() {
    let tmp = TempDir::new().unwrap();
    let out = TempDir::new().unwrap();
    write_bytes(&tmp.path().join("~$lock.docx"), 1);
    write_bytes(&tmp.path().join("autosave.tmp"), 1);

    let outcome = sort_folder(&tmp.path().to_string_lossy(), &report_config(out.path())).unwrap();
    assert!(matches!(outcome.classification, ClassificationOutcome::Empty));
    assert_eq!(outcome.report.unwrap().counts.total, 0);
}

/// A report that cannot be written leaves the classification intact.
#[test]
fn unwritable_report_is_recoverable() {
    let tmp = TempDir::new().unwrap();
    build_scenario(tmp.path());
    let config = SortConfig::new().with_report_path(tmp.path().join("absent").join("r.txt"));

    let outcome = sort_folder(&tmp.path().to_string_lossy(), &config).unwrap();
    assert!(outcome.classification_panel().contains("a.pdf"));
    assert_eq!(outcome.report_panel(), MSG_REPORT_FAILED);
    let report = outcome.report.as_ref().unwrap();
    assert_eq!(report.counts.total, 4);
}
