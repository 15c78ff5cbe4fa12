//! JFIF APP0 header.
//!
//! ```text
//! "JFIF\0"          5 bytes identifier
//! version           u8 major, u8 minor
//! units             u8 (0 = none, 1 = dots/inch, 2 = dots/cm)
//! x/y density       u16 each, big-endian
//! thumbnail w/h     u8 each
//! thumbnail         w * h * 3 bytes of packed RGB
//! ```

use bytes::Bytes;
use serde::Serialize;

use crate::error::ExifError;
use crate::io::{ByteCursor, ByteOrder};

/// Identifier at the start of a JFIF APP0 payload
pub const JFIF_IDENTIFIER: &[u8] = b"JFIF\0";

/// Unit of the density fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DensityUnits {
    /// Densities only give the aspect ratio
    None,
    DotsPerInch,
    DotsPerCm,
    Unknown(u8),
}

impl From<u8> for DensityUnits {
    fn from(value: u8) -> Self {
        match value {
            0 => DensityUnits::None,
            1 => DensityUnits::DotsPerInch,
            2 => DensityUnits::DotsPerCm,
            other => DensityUnits::Unknown(other),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JfifHeader {
    pub version_major: u8,
    pub version_minor: u8,
    pub units: DensityUnits,
    pub x_density: u16,
    pub y_density: u16,
    pub thumbnail_width: u8,
    pub thumbnail_height: u8,
    #[serde(skip)]
    pub thumbnail: Bytes,
}

impl JfifHeader {
    /// Parse an APP0 payload (the bytes after the length field).
    ///
    /// Returns `Ok(None)` when the payload does not carry the JFIF identifier,
    /// e.g. a JFXX extension segment.
    ///
    /// # Errors
    /// `TruncatedData` if the payload ends before the declared thumbnail.
    pub fn parse(payload: Bytes) -> Result<Option<Self>, ExifError> {
        if !payload.starts_with(JFIF_IDENTIFIER) {
            return Ok(None);
        }

        let mut cursor = ByteCursor::new(payload, ByteOrder::BigEndian);
        cursor.seek(JFIF_IDENTIFIER.len() as i64)?;

        let version_major = cursor.read_u8()?;
        let version_minor = cursor.read_u8()?;
        let units = DensityUnits::from(cursor.read_u8()?);
        let x_density = cursor.read_u16()?;
        let y_density = cursor.read_u16()?;
        let thumbnail_width = cursor.read_u8()?;
        let thumbnail_height = cursor.read_u8()?;

        let thumbnail_len = thumbnail_width as usize * thumbnail_height as usize * 3;
        let thumbnail = cursor.read_exact(thumbnail_len)?;

        Ok(Some(JfifHeader {
            version_major,
            version_minor,
            units,
            x_density,
            y_density,
            thumbnail_width,
            thumbnail_height,
            thumbnail,
        }))
    }

    /// Version as `major.minor`, e.g. `1.02`.
    pub fn version(&self) -> String {
        format!("{}.{:02}", self.version_major, self.version_minor)
    }

    pub fn has_thumbnail(&self) -> bool {
        !self.thumbnail.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================
