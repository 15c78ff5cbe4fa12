//! TIFF structure decoding with sub-IFD chaining.
//!
//! IFD0 is always decoded. Pointer tags found there (and in the Exif IFD)
//! lead to the Exif, GPS and Interoperability directories:
//!
//! ```text
//! IFD0 --0x8769--> Exif IFD --0xA005--> Interop IFD
//!      \-0x8825--> GPS IFD
//! ```
//!
//! The next-IFD link after IFD0 (the thumbnail directory) is not followed.

use bytes::Bytes;
use tracing::debug;

use crate::error::ExifError;
use crate::format::metadata::MetadataSet;
use crate::io::{ByteCursor, ByteOrder};

use super::header::TiffHeader;
use super::ifd::{decode_ifd, Tag};
use super::tags::{IfdKind, TAG_EXIF_IFD_POINTER, TAG_GPS_IFD_POINTER, TAG_INTEROP_IFD_POINTER};

/// Decode the TIFF structure starting at `tiff_header_start` within `segment`.
///
/// `segment` is typically an APP1 payload with `tiff_header_start == 6`,
/// skipping the `Exif\0\0` identifier. All IFD and value offsets are taken
/// relative to `tiff_header_start`.
///
/// # Errors
/// Any failure in the header or in any reachable directory fails the whole
/// decode; no partial metadata is returned.
pub fn decode_tiff(
    segment: impl Into<Bytes>,
    tiff_header_start: u64,
) -> Result<MetadataSet, ExifError> {
    let mut cursor = ByteCursor::new(segment, ByteOrder::BigEndian);
    cursor.seek(to_offset(tiff_header_start))?;

    let header = TiffHeader::read(&mut cursor)?;
    let byte_order = header.byte_order;
    debug!(
        "TIFF header: byte order {}, first IFD at {}",
        byte_order.marker(),
        header.first_ifd_offset
    );

    let mut metadata = MetadataSet::new();

    let main = decode_ifd_at(
        &mut cursor,
        tiff_header_start,
        header.first_ifd_offset,
        IfdKind::Main,
        byte_order,
    )?;
    let exif_pointer = find_pointer(&main, TAG_EXIF_IFD_POINTER);
    let gps_pointer = find_pointer(&main, TAG_GPS_IFD_POINTER);
    metadata.insert(IfdKind::Main, main);

    if let Some(offset) = exif_pointer {
        let exif = decode_ifd_at(
            &mut cursor,
            tiff_header_start,
            offset,
            IfdKind::Exif,
            byte_order,
        )?;
        let interop_pointer = find_pointer(&exif, TAG_INTEROP_IFD_POINTER);
        metadata.insert(IfdKind::Exif, exif);

        if let Some(offset) = interop_pointer {
            let interop = decode_ifd_at(
                &mut cursor,
                tiff_header_start,
                offset,
                IfdKind::Interop,
                byte_order,
            )?;
            metadata.insert(IfdKind::Interop, interop);
        }
    }

    if let Some(offset) = gps_pointer {
        let gps = decode_ifd_at(
            &mut cursor,
            tiff_header_start,
            offset,
            IfdKind::Gps,
            byte_order,
        )?;
        metadata.insert(IfdKind::Gps, gps);
    }

    Ok(metadata)
}

fn decode_ifd_at(
    cursor: &mut ByteCursor,
    tiff_header_start: u64,
    offset: u32,
    kind: IfdKind,
    byte_order: ByteOrder,
) -> Result<Vec<Tag>, ExifError> {
    let absolute = tiff_header_start.saturating_add(offset as u64);
    debug!("Following {} IFD at offset {}", kind.name(), offset);

    cursor.seek(to_offset(absolute))?;
    decode_ifd(cursor, tiff_header_start, kind, byte_order)
}

/// Offset stored in a pointer tag, if present and integer-typed.
fn find_pointer(tags: &[Tag], id: u16) -> Option<u32> {
    tags.iter()
        .find(|tag| tag.id == id)
        .and_then(|tag| tag.value.first_u32())
}

fn to_offset(position: u64) -> i64 {
    i64::try_from(position).unwrap_or(i64::MAX)
}

// =============================================================================
// Tests
// =============================================================================
