//! # Exif Extractor
//!
//! Decodes Exif metadata embedded in JPEG files.
//!
//! The JPEG stream is scanned marker by marker until the first APP1 segment
//! carrying the `Exif\0\0` identifier. Its payload is a small TIFF structure
//! whose directories are decoded into typed tag values.
//!
//! ## Architecture
//!
//! - [`io`] - Byte order helpers, a bounds-checked byte cursor, and file loading
//! - [`mod@format`] - JPEG marker scanning, JFIF, and the TIFF/IFD decoder
//! - [`batch`] - Per-file extraction over many paths
//! - [`config`] - CLI configuration
//!
//! ## Example
//!
//! ```rust,no_run
//! use exif_extractor::{extract_file, IfdKind};
//! use std::path::Path;
//!
//! let metadata = extract_file(Path::new("photo.jpg")).unwrap();
//! for (kind, tag) in metadata.iter() {
//!     println!("{} {:#06x} {}", kind.name(), tag.id, tag.to_display_string());
//! }
//! if let Some(model) = metadata.get(IfdKind::Main, 0x0110) {
//!     println!("Camera: {}", model.to_display_string());
//! }
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod format;
pub mod io;

// Re-export commonly used types
pub use batch::{extract_batch, extract_file, BatchSummary, ImageReport};
pub use config::{Config, OutputFormat};
pub use error::{ExifError, IoError};
pub use format::tiff::{
    decode_ifd, decode_tiff, decode_value, tag_name, type_size, DecodedValue, FieldType,
    IfdEntry, IfdKind, Rational, SRational, Tag, TiffHeader,
};
pub use format::{scan, DensityUnits, JfifHeader, MetadataSet};
pub use io::{collect_image_paths, read_image, ByteCursor, ByteOrder};
