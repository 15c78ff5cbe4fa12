//! Image File Directory decoding.
//!
//! # IFD Structure
//! ```text
//! Bytes 0-1:   Entry count N
//! Bytes 2-...: N entries of 12 bytes each
//!   Bytes 0-1: Tag id
//!   Bytes 2-3: Field type code
//!   Bytes 4-7: Element count
//!   Bytes 8-11: Value (if it fits in 4 bytes) or offset to the value
//! ```
//!
//! Offsets are relative to the TIFF header start, not to the enclosing
//! segment or file.

use serde::Serialize;
use tracing::trace;

use crate::error::ExifError;
use crate::io::{ByteCursor, ByteOrder};

use super::tags::{tag_name, FieldType, IfdKind};
use super::values::{decode_value, DecodedValue};

/// Size of one IFD entry in bytes.
pub const IFD_ENTRY_SIZE: usize = 12;

// =============================================================================
// IfdEntry
// =============================================================================

/// A raw IFD entry, before its value is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IfdEntry {
    pub tag_id: u16,
    pub field_type: FieldType,
    pub count: u32,
    /// The 4-byte value/offset field, as stored
    pub value_offset_bytes: [u8; 4],
}

impl IfdEntry {
    /// Read one 12-byte entry at the cursor position.
    ///
    /// # Errors
    /// `TruncatedData` on short input, `UnknownType` for an undefined type code.
    pub fn read(cursor: &mut ByteCursor) -> Result<Self, ExifError> {
        let tag_id = cursor.read_u16()?;
        let field_type = FieldType::from_code(cursor.read_u16()?)?;
        let count = cursor.read_u32()?;

        let mut value_offset_bytes = [0u8; 4];
        value_offset_bytes.copy_from_slice(&cursor.read_exact(4)?);

        Ok(IfdEntry {
            tag_id,
            field_type,
            count,
            value_offset_bytes,
        })
    }

    /// Total byte size of the value.
    #[inline]
    pub fn value_byte_size(&self) -> u64 {
        self.field_type.total_size(self.count)
    }

    /// Whether the value is stored in the entry itself.
    #[inline]
    pub fn is_inline(&self) -> bool {
        self.field_type.fits_inline(self.count)
    }

    /// The value field interpreted as an offset.
    #[inline]
    pub fn value_offset(&self, byte_order: ByteOrder) -> u32 {
        byte_order.read_u32(&self.value_offset_bytes)
    }
}

// =============================================================================
// Tag
// =============================================================================

/// A decoded IFD entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tag {
    pub id: u16,
    /// Display name from the IFD kind's table, `None` if unknown
    pub name: Option<&'static str>,
    pub field_type: FieldType,
    pub count: u32,
    pub value: DecodedValue,
}

impl Tag {
    /// Render the value for display (see [`DecodedValue`]'s `Display`).
    pub fn to_display_string(&self) -> String {
        self.value.to_string()
    }

    /// Name, or an empty string for unknown tags.
    pub fn name_or_empty(&self) -> &'static str {
        self.name.unwrap_or("")
    }
}

// =============================================================================
// IFD Decoding
// =============================================================================

/// Decode the IFD at the cursor position.
///
/// Offset-indirected values are read by seeking to
/// `tiff_header_start + offset`; the cursor is then restored to just after
/// the entry, so after a successful call it sits on the IFD's trailing
/// next-IFD offset.
///
/// # Errors
/// Any read failure aborts the whole directory; no partial list is returned.
pub fn decode_ifd(
    cursor: &mut ByteCursor,
    tiff_header_start: u64,
    kind: IfdKind,
    byte_order: ByteOrder,
) -> Result<Vec<Tag>, ExifError> {
    cursor.set_byte_order(byte_order);

    let ifd_offset = cursor.position();
    let entry_count = cursor.read_u16()?;
    trace!(
        "Decoding {} IFD at offset {} ({} entries)",
        kind.name(),
        ifd_offset,
        entry_count
    );

    let mut tags = Vec::with_capacity(entry_count as usize);
    for _ in 0..entry_count {
        let entry = IfdEntry::read(cursor)?;
        let value = resolve_value(cursor, &entry, tiff_header_start, byte_order)?;

        tags.push(Tag {
            id: entry.tag_id,
            name: tag_name(kind, entry.tag_id),
            field_type: entry.field_type,
            count: entry.count,
            value,
        });
    }

    Ok(tags)
}

/// Decode an entry's value, following the offset when it is not inline.
fn resolve_value(
    cursor: &mut ByteCursor,
    entry: &IfdEntry,
    tiff_header_start: u64,
    byte_order: ByteOrder,
) -> Result<DecodedValue, ExifError> {
    let size = entry.value_byte_size();

    if entry.is_inline() {
        return decode_value(
            &entry.value_offset_bytes[..size as usize],
            entry.field_type,
            entry.count,
            byte_order,
        );
    }

    let target = tiff_header_start.saturating_add(entry.value_offset(byte_order) as u64);
    let len = usize::try_from(size).map_err(|_| ExifError::TruncatedData {
        offset: target,
        requested: size,
        available: cursor.remaining(),
    })?;

    let resume_at = cursor.position();
    cursor.seek(i64::try_from(target).unwrap_or(i64::MAX))?;
    let data = cursor.read_exact(len);
    cursor.seek(resume_at as i64)?;

    decode_value(&data?, entry.field_type, entry.count, byte_order)
}

// =============================================================================
// Tests
// =============================================================================
