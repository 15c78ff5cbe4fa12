//! JPEG marker scanning.
//!
//! Only the segments that can precede the Exif data are understood: the scan
//! walks the stream from SOI, parses JFIF out of APP0, and hands the first
//! Exif APP1 segment to the TIFF decoder. Scanning stops at the first Exif
//! segment, at SOS, or at EOI.
//!
//! # Segment Layout
//!
//! ```text
//! 0xFF <marker> <length: u16 BE, includes itself> <payload: length - 2 bytes>
//! ```
//!
//! SOI and EOI carry no length or payload.

use bytes::Bytes;
use tracing::debug;

use crate::error::ExifError;
use crate::io::{ByteCursor, ByteOrder};

use super::jfif::JfifHeader;
use super::metadata::MetadataSet;
use super::tiff::decode_tiff;

// =============================================================================
// JPEG Markers
// =============================================================================

/// Start Of Image marker
pub const SOI: [u8; 2] = [0xFF, 0xD8];

/// End Of Image marker
pub const EOI: [u8; 2] = [0xFF, 0xD9];

/// Start Of Scan marker
pub const SOS: [u8; 2] = [0xFF, 0xDA];

/// Application segment 0 (JFIF) marker
pub const APP0: [u8; 2] = [0xFF, 0xE0];

/// Application segment 1 (Exif, XMP) marker
pub const APP1: [u8; 2] = [0xFF, 0xE1];

/// Identifier at the start of an Exif APP1 payload. The TIFF header follows it.
pub const EXIF_IDENTIFIER: &[u8] = b"Exif\0\0";

// =============================================================================
// Scanning
// =============================================================================

/// Decode the metadata of a JPEG stream.
///
/// Returns the tags of the first Exif APP1 segment, together with the JFIF
/// header if an APP0 segment came before it. A stream that reaches SOS or EOI
/// without an Exif segment yields a set with no tags.
///
/// # Errors
/// - `InvalidMarker` if the stream does not start with SOI, or a marker other
///   than SOI, EOI, SOS, APP0 or APP1 appears before the Exif segment
/// - `InvalidSegmentLength` if a segment length is below 2
/// - `TruncatedData` if the stream ends inside a marker or segment
/// - any TIFF decoding error from the Exif segment
pub fn scan(data: impl Into<Bytes>) -> Result<MetadataSet, ExifError> {
    let mut cursor = ByteCursor::new(data, ByteOrder::BigEndian);

    let (offset, marker) = read_marker(&mut cursor)?;
    if marker != SOI {
        return Err(invalid_marker(offset, marker));
    }

    let mut jfif: Option<JfifHeader> = None;

    loop {
        let (offset, marker) = read_marker(&mut cursor)?;

        match marker {
            SOI => continue,
            EOI | SOS => {
                debug!(
                    "Reached marker 0x{:02X} at offset {} without Exif data",
                    marker[1], offset
                );
                let mut metadata = MetadataSet::new();
                metadata.set_jfif(jfif);
                return Ok(metadata);
            }
            APP0 => {
                let payload = read_segment(&mut cursor, marker)?;
                jfif = parse_jfif(payload, offset);
            }
            APP1 => {
                let payload = read_segment(&mut cursor, marker)?;
                if !payload.starts_with(EXIF_IDENTIFIER) {
                    debug!("Skipping non-Exif APP1 segment at offset {}", offset);
                    continue;
                }

                debug!(
                    "Exif APP1 segment at offset {} ({} bytes)",
                    offset,
                    payload.len()
                );
                let mut metadata = decode_tiff(payload, EXIF_IDENTIFIER.len() as u64)?;
                metadata.set_jfif(jfif);
                return Ok(metadata);
            }
            _ => return Err(invalid_marker(offset, marker)),
        }
    }
}

fn read_marker(cursor: &mut ByteCursor) -> Result<(u64, [u8; 2]), ExifError> {
    let offset = cursor.position();
    let first = cursor.read_u8()?;
    let second = cursor.read_u8()?;
    Ok((offset, [first, second]))
}

fn invalid_marker(offset: u64, marker: [u8; 2]) -> ExifError {
    ExifError::InvalidMarker {
        offset,
        first: marker[0],
        second: marker[1],
    }
}

/// Read a segment's length field and return its payload.
fn read_segment(cursor: &mut ByteCursor, marker: [u8; 2]) -> Result<Bytes, ExifError> {
    let length = cursor.read_u16()?;
    if length < 2 {
        return Err(ExifError::InvalidSegmentLength {
            marker: marker[1],
            length,
        });
    }
    cursor.read_exact(length as usize - 2)
}

/// JFIF parsing never fails the scan: a malformed APP0 is logged and dropped.
fn parse_jfif(payload: Bytes, offset: u64) -> Option<JfifHeader> {
    match JfifHeader::parse(payload) {
        Ok(header) => header,
        Err(e) => {
            debug!("Ignoring malformed APP0 segment at offset {}: {}", offset, e);
            None
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
