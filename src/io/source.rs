//! Discovery and loading of candidate image files.
//!
//! The decoder works on one in-memory buffer per image. This module finds
//! the files (explicit paths and directory listings filtered by extension)
//! and performs the single whole-file read that precedes decoding.

use std::fs;
use std::path::{Path, PathBuf};

use bytes::Bytes;
use tracing::{trace, warn};
use walkdir::WalkDir;

use crate::error::IoError;

/// Extensions accepted when none are configured.
pub const DEFAULT_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Check whether a path ends in one of `extensions` (case-insensitive,
/// leading dots in the configured list are ignored).
pub fn has_image_extension<S: AsRef<str>>(path: &Path, extensions: &[S]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            extensions
                .iter()
                .any(|allowed| allowed.as_ref().trim_start_matches('.').eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

/// Expand a list of files and directories into image file paths.
///
/// Paths given explicitly are kept whatever their extension. Directory
/// entries are filtered by `extensions` and visited in file-name order;
/// sub-directories are only descended into when `recursive` is set.
/// Symbolic links are followed. Link cycles and unreadable entries below a
/// root are logged and skipped.
pub fn collect_image_paths<S: AsRef<str>>(
    roots: &[PathBuf],
    recursive: bool,
    extensions: &[S],
) -> Result<Vec<PathBuf>, IoError> {
    let mut found = Vec::new();

    for root in roots {
        let metadata = fs::metadata(root).map_err(|e| IoError::from_std(root, e))?;
        if metadata.is_dir() {
            collect_from_dir(root, recursive, extensions, &mut found)?;
        } else {
            found.push(root.clone());
        }
    }

    Ok(found)
}

fn collect_from_dir<S: AsRef<str>>(
    root: &Path,
    recursive: bool,
    extensions: &[S],
    found: &mut Vec<PathBuf>,
) -> Result<(), IoError> {
    let mut walker = WalkDir::new(root).follow_links(true).sort_by_file_name();
    if !recursive {
        walker = walker.max_depth(1);
    }

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(walk_error(root, e)),
            Err(e) => {
                warn!(
                    path = %e.path().unwrap_or(root).display(),
                    "Skipping directory entry: {}",
                    e
                );
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }
        if has_image_extension(entry.path(), extensions) {
            found.push(entry.into_path());
        } else {
            trace!("Skipping {} (extension not accepted)", entry.path().display());
        }
    }

    Ok(())
}

fn walk_error(root: &Path, err: walkdir::Error) -> IoError {
    let path = err.path().unwrap_or(root).to_path_buf();
    let message = err.to_string();
    match err.into_io_error() {
        Some(io) => IoError::from_std(&path, io),
        None => IoError::Read {
            path: path.display().to_string(),
            message,
        },
    }
}

/// Read a whole file into memory.
pub fn read_image(path: &Path) -> Result<Bytes, IoError> {
    fs::read(path)
        .map(Bytes::from)
        .map_err(|e| IoError::from_std(path, e))
}

// =============================================================================
// Tests
// =============================================================================
