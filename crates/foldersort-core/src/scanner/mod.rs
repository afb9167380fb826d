/// Scanner module — lists the regular files directly inside one folder.
///
/// Filtering is applied in a fixed order:
/// 1. Regular files only. Symlinks count when their target is a regular file.
/// 2. Names starting with `~` are dropped and logged.
/// 3. Names ending with `.tmp` are dropped.
///
/// Result order mirrors directory enumeration order. No sort is applied.
pub mod filter;

use crate::error::{Result, SortError};
use crate::model::ScannedFile;
use filter::{exclusion_for, Exclusion};

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Resolve caller input into a directory path.
///
/// Rejects empty input and anything that is not an existing directory
/// before any listing is attempted.
pub fn resolve_folder(input: &str) -> Result<PathBuf> {
    if input.is_empty() {
        return Err(SortError::EmptyInput);
    }
    let folder = PathBuf::from(input);
    if !folder.is_dir() {
        return Err(SortError::NotADirectory(folder));
    }
    Ok(folder)
}

/// List the regular, non-transient files directly inside `folder`.
///
/// Fails with `NotADirectory` if `folder` is not a directory and with
/// `ScanIo` if the listing itself cannot be read.
pub fn scan(folder: &Path) -> Result<Vec<ScannedFile>> {
    if !folder.is_dir() {
        return Err(SortError::NotADirectory(folder.to_path_buf()));
    }

    // Depth 1 only: the folder's immediate children. Serial parallelism keeps
    // the listing on the calling thread.
    let walker = jwalk::WalkDir::new(folder)
        .skip_hidden(false)
        .follow_links(false)
        .max_depth(1)
        .parallelism(jwalk::Parallelism::Serial);

    let mut files = Vec::new();
    for entry_result in walker {
        let mut entry = entry_result.map_err(|err| scan_io(folder, err))?;

        // Depth 0 is the folder itself. jwalk yields it as `Ok` even when its
        // listing failed and parks the failure on the entry instead.
        if entry.depth() == 0 {
            if let Some(err) = entry.read_children_error.take() {
                return Err(scan_io(folder, err));
            }
            continue;
        }

        let path = entry.path();

        if !is_regular_file(&entry.file_type(), &path) {
            debug!("Skipping non-regular entry {}", path.display());
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        match exclusion_for(&name) {
            Some(Exclusion::LockFile) => {
                info!("Temporary file excluded: {name}");
                continue;
            }
            Some(Exclusion::TempFile) => {
                debug!("Scratch file excluded: {name}");
                continue;
            }
            None => {}
        }

        files.push(ScannedFile::new(&*name, path));
    }

    debug!("Scanned {} files in {}", files.len(), folder.display());
    Ok(files)
}

fn scan_io(folder: &Path, err: jwalk::Error) -> SortError {
    SortError::ScanIo {
        path: folder.to_path_buf(),
        source: io::Error::from(err),
    }
}

/// Regular files, plus symlinks that resolve to one. Broken links and links
/// to directories are not regular.
fn is_regular_file(file_type: &fs::FileType, path: &Path) -> bool {
    if file_type.is_file() {
        return true;
    }
    if file_type.is_symlink() {
        return fs::metadata(path).map(|m| m.is_file()).unwrap_or(false);
    }
    false
}
