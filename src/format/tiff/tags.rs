//! TIFF field type and tag name definitions.
//!
//! This module is the vocabulary for IFD decoding:
//! - Field types that determine how values are encoded
//! - Tag names, resolved per IFD kind (main, Exif, GPS, Interop)
//!
//! All tables are `match` expressions, so they are immutable and shared by
//! every decode without initialisation.

use serde::Serialize;

use crate::error::ExifError;

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF field types that determine how values are encoded.
///
/// Each field type has a fixed per-element size in bytes, which decides
/// whether a value fits inline in an IFD entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer (1 byte)
    Byte = 1,

    /// 8-bit ASCII character (1 byte)
    Ascii = 2,

    /// Unsigned 16-bit integer (2 bytes)
    Short = 3,

    /// Unsigned 32-bit integer (4 bytes)
    Long = 4,

    /// Two LONGs: numerator, denominator (8 bytes)
    Rational = 5,

    /// Signed 8-bit integer (1 byte)
    SByte = 6,

    /// Undefined byte data (1 byte per element)
    Undefined = 7,

    /// Signed 16-bit integer (2 bytes)
    SShort = 8,

    /// Signed 32-bit integer (4 bytes)
    SLong = 9,

    /// Two SLONGs: numerator, denominator (8 bytes)
    SRational = 10,

    /// IEEE single precision float (4 bytes)
    Float = 11,

    /// IEEE double precision float (8 bytes)
    Double = 12,
}

impl FieldType {
    /// Every defined field type, in code order.
    pub const ALL: [FieldType; 12] = [
        FieldType::Byte,
        FieldType::Ascii,
        FieldType::Short,
        FieldType::Long,
        FieldType::Rational,
        FieldType::SByte,
        FieldType::Undefined,
        FieldType::SShort,
        FieldType::SLong,
        FieldType::SRational,
        FieldType::Float,
        FieldType::Double,
    ];

    /// Maximum bytes that can be stored inline in an IFD entry.
    pub const INLINE_THRESHOLD: u64 = 4;

    /// Size of a single value of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> u32 {
        match self {
            FieldType::Byte | FieldType::Ascii | FieldType::SByte | FieldType::Undefined => 1,
            FieldType::Short | FieldType::SShort => 2,
            FieldType::Long | FieldType::SLong | FieldType::Float => 4,
            FieldType::Rational | FieldType::SRational | FieldType::Double => 8,
        }
    }

    /// Create a FieldType from its numeric value.
    ///
    /// # Errors
    /// `UnknownType` when the code is not one of the 12 defined types.
    pub fn from_code(code: u16) -> Result<Self, ExifError> {
        match code {
            1 => Ok(FieldType::Byte),
            2 => Ok(FieldType::Ascii),
            3 => Ok(FieldType::Short),
            4 => Ok(FieldType::Long),
            5 => Ok(FieldType::Rational),
            6 => Ok(FieldType::SByte),
            7 => Ok(FieldType::Undefined),
            8 => Ok(FieldType::SShort),
            9 => Ok(FieldType::SLong),
            10 => Ok(FieldType::SRational),
            11 => Ok(FieldType::Float),
            12 => Ok(FieldType::Double),
            _ => Err(ExifError::UnknownType(code)),
        }
    }

    /// Get the numeric type code.
    #[inline]
    pub const fn code(self) -> u16 {
        self as u16
    }

    /// Total byte length of `count` values of this type.
    #[inline]
    pub const fn total_size(self, count: u32) -> u64 {
        self.size_in_bytes() as u64 * count as u64
    }

    /// Check if `count` values of this type fit in the 4-byte value field.
    #[inline]
    pub const fn fits_inline(self, count: u32) -> bool {
        self.total_size(count) <= Self::INLINE_THRESHOLD
    }

    /// Upper-case name as used in the TIFF 6.0 specification.
    pub const fn name(self) -> &'static str {
        match self {
            FieldType::Byte => "BYTE",
            FieldType::Ascii => "ASCII",
            FieldType::Short => "SHORT",
            FieldType::Long => "LONG",
            FieldType::Rational => "RATIONAL",
            FieldType::SByte => "SBYTE",
            FieldType::Undefined => "UNDEFINED",
            FieldType::SShort => "SSHORT",
            FieldType::SLong => "SLONG",
            FieldType::SRational => "SRATIONAL",
            FieldType::Float => "FLOAT",
            FieldType::Double => "DOUBLE",
        }
    }
}

/// Element size for a raw type code.
///
/// # Errors
/// `UnknownType` for codes outside 1..=12.
pub fn type_size(code: u16) -> Result<u32, ExifError> {
    FieldType::from_code(code).map(FieldType::size_in_bytes)
}

// =============================================================================
// IFD Kinds
// =============================================================================

/// Which directory a tag was read from. Selects the name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IfdKind {
    /// IFD0, the primary image directory
    Main,
    /// Exif sub-IFD (camera settings)
    Exif,
    /// GPS sub-IFD
    Gps,
    /// Interoperability sub-IFD
    Interop,
}

impl IfdKind {
    pub const ALL: [IfdKind; 4] = [IfdKind::Main, IfdKind::Exif, IfdKind::Gps, IfdKind::Interop];

    pub const fn name(self) -> &'static str {
        match self {
            IfdKind::Main => "Main",
            IfdKind::Exif => "Exif",
            IfdKind::Gps => "GPS",
            IfdKind::Interop => "Interop",
        }
    }
}

// =============================================================================
// Pointer Tags
// =============================================================================

/// Offset of the Exif sub-IFD (in the main IFD)
pub const TAG_EXIF_IFD_POINTER: u16 = 0x8769;

/// Offset of the GPS sub-IFD (in the main IFD)
pub const TAG_GPS_IFD_POINTER: u16 = 0x8825;

/// Offset of the Interop sub-IFD (in the Exif IFD)
pub const TAG_INTEROP_IFD_POINTER: u16 = 0xA005;

// =============================================================================
// Tag Names
// =============================================================================

/// Resolve a tag id to its display name within an IFD kind.
///
/// Returns `None` for unrecognized ids. Unknown tags are not an error;
/// they are decoded and left unnamed.
pub fn tag_name(kind: IfdKind, id: u16) -> Option<&'static str> {
    match kind {
        IfdKind::Main => main_tag_name(id),
        IfdKind::Exif => exif_tag_name(id),
        IfdKind::Gps => gps_tag_name(id),
        IfdKind::Interop => interop_tag_name(id),
    }
}

fn main_tag_name(id: u16) -> Option<&'static str> {
    let name = match id {
        // ---------------------------------------------------------------------
        // TIFF Baseline
        // ---------------------------------------------------------------------
        0x00FE => "New Subfile Type",
        0x00FF => "Subfile Type",
        0x0100 => "Image Width",
        0x0101 => "Image Length",
        0x0102 => "Bits Per Sample",
        0x0103 => "Compression",
        0x0106 => "Photometric Interpretation",
        0x0107 => "Thresholding",
        0x0108 => "Cell Width",
        0x0109 => "Cell Length",
        0x010A => "Fill Order",
        0x010D => "Document Name",
        0x010E => "Image Description",
        0x010F => "Make",
        0x0110 => "Model",
        0x0111 => "Strip Offsets",
        0x0112 => "Orientation",
        0x0115 => "Samples Per Pixel",
        0x0116 => "Rows Per Strip",
        0x0117 => "Strip Byte Counts",
        0x0118 => "Min Sample Value",
        0x0119 => "Max Sample Value",
        0x011A => "X Resolution",
        0x011B => "Y Resolution",
        0x011C => "Planar Configuration",
        0x0128 => "Resolution Unit",
        0x012D => "Transfer Function",
        0x0131 => "Software",
        0x0132 => "Date Time",
        0x013B => "Artist",
        0x013E => "White Point",
        0x013F => "Primary Chromaticities",

        // ---------------------------------------------------------------------
        // TIFF Extended
        // ---------------------------------------------------------------------
        0x011D => "Page Name",
        0x011E => "X Position",
        0x011F => "Y Position",
        0x0120 => "Free Offsets",
        0x0121 => "Free Byte Counts",
        0x0122 => "Gray Response Unit",
        0x0123 => "Gray Response Curve",
        0x0124 => "T4 Options",
        0x0125 => "T6 Options",
        0x0129 => "Page Number",
        0x013C => "Host Computer",
        0x013D => "Predictor",
        0x0140 => "Color Map",
        0x0141 => "Halftone Hints",
        0x0142 => "Tile Width",
        0x0143 => "Tile Length",
        0x0144 => "Tile Offsets",
        0x0145 => "Tile Byte Counts",
        0x014C => "Ink Set",
        0x014D => "Ink Names",
        0x014E => "Number Of Inks",
        0x0150 => "Dot Range",
        0x0151 => "Target Printer",
        0x0152 => "Extra Samples",
        0x0153 => "Sample Format",
        0x0154 => "S Min Sample Value",
        0x0155 => "S Max Sample Value",
        0x0156 => "Transfer Range",

        // ---------------------------------------------------------------------
        // JPEG and YCbCr
        // ---------------------------------------------------------------------
        0x0200 => "JPEG Proc",
        0x0201 => "JPEG Interchange Format",
        0x0202 => "JPEG Interchange Format Length",
        0x0203 => "JPEG Restart Interval",
        0x0205 => "JPEG Lossless Predictors",
        0x0206 => "JPEG Point Transforms",
        0x0207 => "JPEG Q Tables",
        0x0208 => "JPEG DC Tables",
        0x0209 => "JPEG AC Tables",
        0x0211 => "Y Cb Cr Coefficients",
        0x0212 => "Y Cb Cr Sub Sampling",
        0x0213 => "Y Cb Cr Positioning",
        0x0214 => "Reference Black White",

        // ---------------------------------------------------------------------
        // Other common IFD0 tags
        // ---------------------------------------------------------------------
        0x02BC => "Application Notes",
        0x8298 => "Copyright",
        0x83BB => "IPTC Data",
        0x8773 => "ICC Profile",
        TAG_EXIF_IFD_POINTER => "Exif IFD Pointer",
        TAG_GPS_IFD_POINTER => "GPS Info IFD Pointer",
        _ => return None,
    };
    Some(name)
}

fn exif_tag_name(id: u16) -> Option<&'static str> {
    let name = match id {
        0x8298 => "Copyright",
        0x829A => "Exposure Time",
        0x829D => "F Number",
        0x8822 => "Exposure Program",
        0x8824 => "Spectral Sensitivity",
        0x8827 => "ISO Speed Ratings",
        0x8828 => "Opto-Electric Conversion Factor",
        0x882A => "Time Zone Offset",
        0x882B => "Self Timer Mode",
        0x8830 => "Sensitivity Type",
        0x8832 => "Recommended Exposure Index",
        0x9000 => "Exif Version",
        0x9003 => "Date Time Original",
        0x9004 => "Create Date",
        0x9010 => "Offset Time",
        0x9011 => "Offset Time Original",
        0x9012 => "Offset Time Digitized",
        0x9101 => "Components Configuration",
        0x9102 => "Compressed Bits Per Pixel",
        0x9201 => "Shutter Speed Value",
        0x9202 => "Aperture Value",
        0x9203 => "Brightness Value",
        0x9204 => "Exposure Compensation",
        0x9205 => "Max Aperture Value",
        0x9206 => "Subject Distance",
        0x9207 => "Metering Mode",
        0x9208 => "Light Source",
        0x9209 => "Flash",
        0x920A => "Focal Length",
        0x9214 => "Subject Area",
        0x927C => "Maker Note",
        0x9286 => "User Comment",
        0x9290 => "Sub Sec Time",
        0x9291 => "Sub Sec Time Original",
        0x9292 => "Sub Sec Time Digitized",
        0xA000 => "Flashpix Version",
        0xA001 => "Color Space",
        0xA002 => "Pixel X Dimension",
        0xA003 => "Pixel Y Dimension",
        0xA004 => "Related Sound File",
        TAG_INTEROP_IFD_POINTER => "Interop Offset",
        0xA20B => "Flash Energy",
        0xA20C => "Spatial Frequency Response",
        0xA20E => "Focal Plane X Resolution",
        0xA20F => "Focal Plane Y Resolution",
        0xA210 => "Focal Plane Resolution Unit",
        0xA214 => "Subject Location",
        0xA215 => "Exposure Index",
        0xA217 => "Sensing Method",
        0xA300 => "File Source",
        0xA301 => "Scene Type",
        0xA302 => "CFA Pattern",
        0xA401 => "Custom Rendered",
        0xA402 => "Exposure Mode",
        0xA403 => "White Balance",
        0xA404 => "Digital Zoom Ratio",
        0xA405 => "Focal Length In 35mm Film",
        0xA406 => "Scene Capture Type",
        0xA407 => "Gain Control",
        0xA408 => "Contrast",
        0xA409 => "Saturation",
        0xA40A => "Sharpness",
        0xA40C => "Subject Distance Range",
        0xA420 => "Image Unique ID",
        0xA430 => "Camera Owner Name",
        0xA431 => "Body Serial Number",
        0xA432 => "Lens Specification",
        0xA433 => "Lens Make",
        0xA434 => "Lens Model",
        0xA435 => "Lens Serial Number",
        _ => return None,
    };
    Some(name)
}

fn gps_tag_name(id: u16) -> Option<&'static str> {
    let name = match id {
        0x0000 => "GPS Version ID",
        0x0001 => "GPS Latitude Ref",
        0x0002 => "GPS Latitude",
        0x0003 => "GPS Longitude Ref",
        0x0004 => "GPS Longitude",
        0x0005 => "GPS Altitude Ref",
        0x0006 => "GPS Altitude",
        0x0007 => "GPS Time Stamp",
        0x0008 => "GPS Satellites",
        0x0009 => "GPS Status",
        0x000A => "GPS Measure Mode",
        0x000B => "GPS DOP",
        0x000C => "GPS Speed Ref",
        0x000D => "GPS Speed",
        0x000E => "GPS Track Ref",
        0x000F => "GPS Track",
        0x0010 => "GPS Img Direction Ref",
        0x0011 => "GPS Img Direction",
        0x0012 => "GPS Map Datum",
        0x0013 => "GPS Dest Latitude Ref",
        0x0014 => "GPS Dest Latitude",
        0x0015 => "GPS Dest Longitude Ref",
        0x0016 => "GPS Dest Longitude",
        0x0017 => "GPS Dest Bearing Ref",
        0x0018 => "GPS Dest Bearing",
        0x0019 => "GPS Dest Distance Ref",
        0x001A => "GPS Dest Distance",
        0x001B => "GPS Processing Method",
        0x001C => "GPS Area Information",
        0x001D => "GPS Date Stamp",
        0x001E => "GPS Differential",
        0x001F => "GPS H Positioning Error",
        _ => return None,
    };
    Some(name)
}

fn interop_tag_name(id: u16) -> Option<&'static str> {
    let name = match id {
        0x0001 => "Interop Index",
        0x0002 => "Interop Version",
        0x1000 => "Related Image File Format",
        0x1001 => "Related Image Width",
        0x1002 => "Related Image Length",
        _ => return None,
    };
    Some(name)
}

// =============================================================================
// Tests
// =============================================================================
