//! Candidate file discovery
//!
//! Every regular file below the root is a candidate. Extensions are not
//! used to filter: DICOM files often have none, so the loader decides.

use crate::error::{DicomSheetError, Result};
use log::{debug, warn};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Recursively lists regular files under `root`
///
/// Entries are sorted by file name at each directory level so repeated scans
/// of an unchanged tree yield the same order. Directory symlinks are not
/// followed; a symlink to a regular file is a candidate.
///
/// A root that does not exist yields an empty list. A root that is not a
/// directory, or that cannot be read at all, is an error. Unreadable entries
/// below the root are logged and skipped.
pub fn discover_files(root: &Path) -> Result<Vec<PathBuf>> {
    if !root.exists() {
        warn!("Scan root does not exist: {}", root.display());
        return Ok(Vec::new());
    }

    if !root.is_dir() {
        return Err(DicomSheetError::NotADirectory(root.to_path_buf()));
    }

    let mut files = Vec::new();
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                } else if entry.path_is_symlink() {
                    if entry.path().is_file() {
                        files.push(entry.into_path());
                    } else {
                        debug!("Skipping symlink: {}", entry.path().display());
                    }
                }
            }
            Err(e) if e.depth() == 0 => {
                return Err(DicomSheetError::Traversal {
                    path: root.to_path_buf(),
                    reason: e.to_string(),
                });
            }
            Err(e) => {
                warn!("Error accessing entry: {}", e);
            }
        }
    }

    debug!(
        "Discovered {} candidate files under {}",
        files.len(),
        root.display()
    );

    Ok(files)
}
