//! Command-line configuration.
//!
//! Options can be given as flags or through environment variables with the
//! `EXIF_` prefix:
//!
//! - `EXIF_RECURSIVE` - Descend into sub-directories (default: false)
//! - `EXIF_EXTENSIONS` - Comma-separated file extensions (default: jpg,jpeg)
//! - `EXIF_FORMAT` - Output format, `text` or `json` (default: text)

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::io::DEFAULT_EXTENSIONS;

// =============================================================================
// Output Format
// =============================================================================

/// How decoded metadata is written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One line per tag, grouped by file
    #[default]
    Text,
    /// A JSON array with one object per file
    Json,
}

// =============================================================================
// CLI Arguments
// =============================================================================

/// Exif Extractor - Print Exif metadata from JPEG files.
///
/// Decodes the Exif APP1 segment of each image, including the Exif, GPS and
/// Interoperability sub-directories.
#[derive(Parser, Debug, Clone)]
#[command(name = "exif-extractor")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// Image files or directories to scan.
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Descend into sub-directories.
    #[arg(short, long, default_value_t = false, env = "EXIF_RECURSIVE")]
    pub recursive: bool,

    /// File extensions to pick up from directories (comma-separated,
    /// case-insensitive). Files named explicitly are always decoded.
    #[arg(
        long,
        env = "EXIF_EXTENSIONS",
        value_delimiter = ',',
        default_values_t = DEFAULT_EXTENSIONS.iter().map(|s| s.to_string())
    )]
    pub extensions: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "EXIF_FORMAT")]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.paths.is_empty() {
            return Err("At least one file or directory is required".to_string());
        }

        if self
            .extensions
            .iter()
            .all(|ext| ext.trim().trim_start_matches('.').is_empty())
        {
            return Err(
                "At least one file extension is required. Set --extensions or EXIF_EXTENSIONS"
                    .to_string(),
            );
        }

        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
