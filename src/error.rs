use thiserror::Error;

/// I/O errors that can occur when loading image files from disk
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IoError {
    /// Path does not exist
    #[error("File not found: {0}")]
    NotFound(String),

    /// Reading a file or listing a directory failed
    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },
}

impl IoError {
    /// Build an error from a `std::io::Error`, mapping `NotFound` to its own variant.
    pub fn from_std(path: &std::path::Path, err: std::io::Error) -> Self {
        let path = path.display().to_string();
        if err.kind() == std::io::ErrorKind::NotFound {
            IoError::NotFound(path)
        } else {
            IoError::Read {
                path,
                message: err.to_string(),
            }
        }
    }
}

/// Errors that can occur while decoding JPEG/TIFF metadata
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExifError {
    /// I/O error while loading the source bytes
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Fewer bytes available than a read required
    #[error("Truncated data: need {requested} bytes at offset {offset}, {available} available")]
    TruncatedData {
        offset: u64,
        requested: u64,
        available: u64,
    },

    /// Unexpected bytes where a JPEG marker was expected
    #[error("Invalid JPEG marker 0x{first:02X}{second:02X} at offset {offset}")]
    InvalidMarker { offset: u64, first: u8, second: u8 },

    /// JPEG segment length field smaller than the field itself
    #[error("Invalid length {length} for segment 0xFF{marker:02X}")]
    InvalidSegmentLength { marker: u8, length: u16 },

    /// TIFF byte-order bytes are neither II nor MM
    #[error("Invalid TIFF byte order: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    InvalidByteOrder(u16),

    /// TIFF magic number is not 42
    #[error("Invalid TIFF magic number: expected 42, got {0}")]
    InvalidMagicNumber(u16),

    /// Unknown field type in IFD entry
    #[error("Unknown field type: {0}")]
    UnknownType(u16),

    /// Seek target is negative
    #[error("Invalid offset: {0}")]
    InvalidOffset(i64),
}
