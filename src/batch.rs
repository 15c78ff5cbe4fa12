//! Metadata extraction over many files.
//!
//! Every image is decoded on its own. A file that cannot be read or decoded
//! produces a failed [`ImageReport`]; the rest of the batch is unaffected.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::ExifError;
use crate::format::{scan, MetadataSet};
use crate::io::read_image;

/// Outcome of decoding one image.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageReport {
    pub path: PathBuf,
    pub result: Result<MetadataSet, ExifError>,
}

impl ImageReport {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Success and failure counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub decoded: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[ImageReport]) -> Self {
        let decoded = reports.iter().filter(|r| r.is_ok()).count();
        BatchSummary {
            decoded,
            failed: reports.len() - decoded,
        }
    }

    pub fn total(&self) -> usize {
        self.decoded + self.failed
    }
}

/// Read a file from disk and decode its metadata.
pub fn extract_file(path: &Path) -> Result<MetadataSet, ExifError> {
    let data = read_image(path)?;
    debug!("Read {} bytes from {}", data.len(), path.display());
    scan(data)
}

/// Decode every path, in order, returning one report per path.
pub fn extract_batch(paths: &[PathBuf]) -> Vec<ImageReport> {
    paths
        .iter()
        .map(|path| {
            let result = extract_file(path);
            if let Err(ref e) = result {
                warn!(
                    error_type = error_kind(e),
                    path = %path.display(),
                    "Failed to decode image: {}",
                    e
                );
            }
            ImageReport {
                path: path.clone(),
                result,
            }
        })
        .collect()
}

fn error_kind(error: &ExifError) -> &'static str {
    match error {
        ExifError::Io(_) => "io",
        ExifError::TruncatedData { .. } => "truncated",
        ExifError::InvalidMarker { .. } | ExifError::InvalidSegmentLength { .. } => "jpeg",
        ExifError::InvalidByteOrder(_)
        | ExifError::InvalidMagicNumber(_)
        | ExifError::UnknownType(_)
        | ExifError::InvalidOffset(_) => "tiff",
    }
}

// =============================================================================
// Tests
// =============================================================================
