//! Seekable, byte-order-aware reader over an in-memory buffer.
//!
//! Every decoder in this crate pulls its fixed-width fields through a
//! [`ByteCursor`]. The cursor owns its buffer (a cheaply cloneable
//! [`Bytes`]), so slicing a segment payload out of a file and handing it to
//! the TIFF reader never copies.

use bytes::Bytes;

use crate::error::ExifError;
use crate::format::tiff::{Rational, SRational};

use super::byte_order::ByteOrder;

// =============================================================================
// ByteCursor
// =============================================================================

/// A read position over a fixed byte buffer.
///
/// Reads advance the position. [`ByteCursor::seek`] is the only way to move
/// backwards. Seeking past the end is allowed; the next read fails with
/// [`ExifError::TruncatedData`].
#[derive(Debug, Clone)]
pub struct ByteCursor {
    data: Bytes,
    position: u64,
    byte_order: ByteOrder,
}

impl ByteCursor {
    /// Create a cursor at position 0.
    pub fn new(data: impl Into<Bytes>, byte_order: ByteOrder) -> Self {
        Self {
            data: data.into(),
            position: 0,
            byte_order,
        }
    }

    /// Current byte order used by multi-byte reads.
    #[inline]
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Change the byte order for subsequent reads.
    #[inline]
    pub fn set_byte_order(&mut self, byte_order: ByteOrder) {
        self.byte_order = byte_order;
    }

    /// Absolute read position.
    #[inline]
    pub fn position(&self) -> u64 {
        self.position
    }

    /// Total buffer length.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Bytes left between the position and the end of the buffer.
    #[inline]
    pub fn remaining(&self) -> u64 {
        (self.data.len() as u64).saturating_sub(self.position)
    }

    /// Move to an absolute offset.
    ///
    /// # Errors
    /// `InvalidOffset` if `offset` is negative.
    pub fn seek(&mut self, offset: i64) -> Result<u64, ExifError> {
        if offset < 0 {
            return Err(ExifError::InvalidOffset(offset));
        }
        self.position = offset as u64;
        Ok(self.position)
    }

    /// Read exactly `len` bytes and advance.
    ///
    /// # Errors
    /// `TruncatedData` if fewer than `len` bytes remain. The position is left
    /// untouched on failure.
    pub fn read_exact(&mut self, len: usize) -> Result<Bytes, ExifError> {
        let available = self.remaining();
        if len as u64 > available {
            return Err(ExifError::TruncatedData {
                offset: self.position,
                requested: len as u64,
                available,
            });
        }
        if len == 0 {
            return Ok(Bytes::new());
        }

        let start = self.position as usize;
        let bytes = self.data.slice(start..start + len);
        self.position += len as u64;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], ExifError> {
        let bytes = self.read_exact(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&bytes);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, ExifError> {
        Ok(self.read_array::<1>()?[0])
    }

    pub fn read_i8(&mut self) -> Result<i8, ExifError> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, ExifError> {
        let bytes = self.read_array::<2>()?;
        Ok(self.byte_order.read_u16(&bytes))
    }

    pub fn read_i16(&mut self) -> Result<i16, ExifError> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32, ExifError> {
        let bytes = self.read_array::<4>()?;
        Ok(self.byte_order.read_u32(&bytes))
    }

    pub fn read_i32(&mut self) -> Result<i32, ExifError> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_f32(&mut self) -> Result<f32, ExifError> {
        Ok(f32::from_bits(self.read_u32()?))
    }

    pub fn read_f64(&mut self) -> Result<f64, ExifError> {
        let bytes = self.read_array::<8>()?;
        Ok(f64::from_bits(self.byte_order.read_u64(&bytes)))
    }

    /// Read numerator then denominator. A zero denominator is returned as-is.
    pub fn read_rational(&mut self) -> Result<Rational, ExifError> {
        let numerator = self.read_u32()?;
        let denominator = self.read_u32()?;
        Ok(Rational {
            numerator,
            denominator,
        })
    }

    /// Signed counterpart of [`ByteCursor::read_rational`].
    pub fn read_signed_rational(&mut self) -> Result<SRational, ExifError> {
        let numerator = self.read_i32()?;
        let denominator = self.read_i32()?;
        Ok(SRational {
            numerator,
            denominator,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
