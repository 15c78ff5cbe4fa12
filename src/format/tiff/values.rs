//! TIFF tag value decoding.
//!
//! An IFD entry carries a field type, an element count and a byte span
//! (inline or fetched from an offset). [`decode_value`] turns that span into
//! a [`DecodedValue`]. Numeric types always decode to a sequence of exactly
//! `count` elements, even when `count == 1`.

use std::fmt;

use bytes::Bytes;
use serde::Serialize;

use crate::error::ExifError;
use crate::io::{ByteCursor, ByteOrder};

use super::tags::FieldType;

/// Characters stripped from the right of ASCII values.
const ASCII_TRIM: &[char] = &['\0', ' ', '\t', '\r', '\n'];

// =============================================================================
// Rationals
// =============================================================================

/// Unsigned fraction. Never reduced; the denominator may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rational {
    pub numerator: u32,
    pub denominator: u32,
}

impl Rational {
    /// Floating-point value, or `None` when the denominator is zero.
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Signed fraction. Never reduced; the denominator may be zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SRational {
    pub numerator: i32,
    pub denominator: i32,
}

impl SRational {
    /// Floating-point value, or `None` when the denominator is zero.
    pub fn to_f64(self) -> Option<f64> {
        (self.denominator != 0).then(|| self.numerator as f64 / self.denominator as f64)
    }
}

impl fmt::Display for SRational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

// =============================================================================
// DecodedValue
// =============================================================================

/// A decoded tag value, one variant per TIFF field type.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum DecodedValue {
    Byte(Vec<u8>),
    /// Right-trimmed of NUL and whitespace
    Ascii(String),
    Short(Vec<u16>),
    Long(Vec<u32>),
    Rational(Vec<Rational>),
    SByte(Vec<i8>),
    /// Raw bytes, unconverted
    Undefined(Vec<u8>),
    SShort(Vec<i16>),
    SLong(Vec<i32>),
    SRational(Vec<SRational>),
    Float(Vec<f32>),
    Double(Vec<f64>),
}

impl DecodedValue {
    /// Number of elements. For ASCII this is the trimmed string length.
    pub fn len(&self) -> usize {
        match self {
            DecodedValue::Byte(v) | DecodedValue::Undefined(v) => v.len(),
            DecodedValue::Ascii(s) => s.len(),
            DecodedValue::Short(v) => v.len(),
            DecodedValue::Long(v) => v.len(),
            DecodedValue::Rational(v) => v.len(),
            DecodedValue::SByte(v) => v.len(),
            DecodedValue::SShort(v) => v.len(),
            DecodedValue::SLong(v) => v.len(),
            DecodedValue::SRational(v) => v.len(),
            DecodedValue::Float(v) => v.len(),
            DecodedValue::Double(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The string of an ASCII value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            DecodedValue::Ascii(s) => Some(s),
            _ => None,
        }
    }

    /// First element of a BYTE, SHORT or LONG value widened to u32.
    ///
    /// Convenience accessor for single-valued tags such as IFD pointers.
    pub fn first_u32(&self) -> Option<u32> {
        match self {
            DecodedValue::Byte(v) => v.first().map(|&x| x as u32),
            DecodedValue::Short(v) => v.first().map(|&x| x as u32),
            DecodedValue::Long(v) => v.first().copied(),
            _ => None,
        }
    }

    /// First element of a RATIONAL value.
    pub fn first_rational(&self) -> Option<Rational> {
        match self {
            DecodedValue::Rational(v) => v.first().copied(),
            _ => None,
        }
    }
}

fn join<T: fmt::Display>(f: &mut fmt::Formatter<'_>, values: &[T]) -> fmt::Result {
    if values.is_empty() {
        return f.write_str("N/A");
    }
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", value)?;
    }
    Ok(())
}

/// Numbers in decimal, rationals as `n/d`, sequences space-joined,
/// empty sequences as `N/A`.
impl fmt::Display for DecodedValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodedValue::Ascii(s) => f.write_str(s),
            DecodedValue::Byte(v) | DecodedValue::Undefined(v) => join(f, v),
            DecodedValue::Short(v) => join(f, v),
            DecodedValue::Long(v) => join(f, v),
            DecodedValue::Rational(v) => join(f, v),
            DecodedValue::SByte(v) => join(f, v),
            DecodedValue::SShort(v) => join(f, v),
            DecodedValue::SLong(v) => join(f, v),
            DecodedValue::SRational(v) => join(f, v),
            DecodedValue::Float(v) => join(f, v),
            DecodedValue::Double(v) => join(f, v),
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode `count` elements of `field_type` from `raw`.
///
/// Only the first `count * size` bytes are consumed; extra bytes are ignored.
///
/// # Errors
/// `TruncatedData` if `raw` is shorter than `count * size`.
pub fn decode_value(
    raw: &[u8],
    field_type: FieldType,
    count: u32,
    byte_order: ByteOrder,
) -> Result<DecodedValue, ExifError> {
    let required = field_type.total_size(count);
    if (raw.len() as u64) < required {
        return Err(ExifError::TruncatedData {
            offset: 0,
            requested: required,
            available: raw.len() as u64,
        });
    }

    let count = count as usize;
    let mut cursor = ByteCursor::new(Bytes::copy_from_slice(&raw[..required as usize]), byte_order);

    let value = match field_type {
        FieldType::Ascii => {
            let text = String::from_utf8_lossy(&raw[..count]);
            DecodedValue::Ascii(text.trim_end_matches(ASCII_TRIM).to_string())
        }
        FieldType::Undefined => DecodedValue::Undefined(raw[..count].to_vec()),
        FieldType::Byte => DecodedValue::Byte(raw[..count].to_vec()),
        FieldType::SByte => DecodedValue::SByte(read_n(&mut cursor, count, ByteCursor::read_i8)?),
        FieldType::Short => DecodedValue::Short(read_n(&mut cursor, count, ByteCursor::read_u16)?),
        FieldType::SShort => {
            DecodedValue::SShort(read_n(&mut cursor, count, ByteCursor::read_i16)?)
        }
        FieldType::Long => DecodedValue::Long(read_n(&mut cursor, count, ByteCursor::read_u32)?),
        FieldType::SLong => DecodedValue::SLong(read_n(&mut cursor, count, ByteCursor::read_i32)?),
        FieldType::Rational => {
            DecodedValue::Rational(read_n(&mut cursor, count, ByteCursor::read_rational)?)
        }
        FieldType::SRational => DecodedValue::SRational(read_n(
            &mut cursor,
            count,
            ByteCursor::read_signed_rational,
        )?),
        FieldType::Float => DecodedValue::Float(read_n(&mut cursor, count, ByteCursor::read_f32)?),
        FieldType::Double => {
            DecodedValue::Double(read_n(&mut cursor, count, ByteCursor::read_f64)?)
        }
    };

    Ok(value)
}

fn read_n<T>(
    cursor: &mut ByteCursor,
    count: usize,
    read: fn(&mut ByteCursor) -> Result<T, ExifError>,
) -> Result<Vec<T>, ExifError> {
    let mut values = Vec::with_capacity(count);
    for _ in 0..count {
        values.push(read(cursor)?);
    }
    Ok(values)
}

// =============================================================================
// Tests
// =============================================================================
