//! TIFF header parsing.
//!
//! Inside an Exif APP1 segment the TIFF header follows the `Exif\0\0`
//! identifier. Every offset in the structure is relative to the first byte
//! of this header.
//!
//! # TIFF Header Structure (8 bytes)
//! ```text
//! Bytes 0-1: Byte order (0x4949 = little-endian "II", 0x4D4D = big-endian "MM")
//! Bytes 2-3: Magic number (42 = 0x002A)
//! Bytes 4-7: Offset to first IFD (4 bytes)
//! ```

use crate::error::ExifError;
use crate::io::{ByteCursor, ByteOrder};

// =============================================================================
// Constants
// =============================================================================

/// Magic bytes indicating little-endian byte order ("II" for Intel)
const BYTE_ORDER_LITTLE_ENDIAN: u16 = 0x4949;

/// Magic bytes indicating big-endian byte order ("MM" for Motorola)
const BYTE_ORDER_BIG_ENDIAN: u16 = 0x4D4D;

/// Magic number of classic TIFF
pub const TIFF_MAGIC: u16 = 42;

// =============================================================================
// TiffHeader
// =============================================================================

/// Parsed TIFF header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TiffHeader {
    /// Byte order for all multi-byte values in the structure
    pub byte_order: ByteOrder,

    /// Offset to the first IFD, relative to the header start
    pub first_ifd_offset: u32,
}

impl TiffHeader {
    /// Read the header at the cursor position and switch the cursor to the
    /// declared byte order.
    ///
    /// # Errors
    /// - `InvalidByteOrder` if the first two bytes are not II or MM
    /// - `InvalidMagicNumber` if the magic number is not 42
    /// - `TruncatedData` if the input ends inside the header
    pub fn read(cursor: &mut ByteCursor) -> Result<Self, ExifError> {
        let order_bytes = cursor.read_exact(2)?;

        // Read as big-endian: we're matching byte patterns, not a number
        let marker = u16::from_be_bytes([order_bytes[0], order_bytes[1]]);
        let byte_order = match marker {
            BYTE_ORDER_LITTLE_ENDIAN => ByteOrder::LittleEndian,
            BYTE_ORDER_BIG_ENDIAN => ByteOrder::BigEndian,
            _ => return Err(ExifError::InvalidByteOrder(marker)),
        };
        cursor.set_byte_order(byte_order);

        let magic = cursor.read_u16()?;
        if magic != TIFF_MAGIC {
            return Err(ExifError::InvalidMagicNumber(magic));
        }

        let first_ifd_offset = cursor.read_u32()?;

        Ok(TiffHeader {
            byte_order,
            first_ifd_offset,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
