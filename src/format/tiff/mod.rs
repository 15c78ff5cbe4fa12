//! TIFF decoder for Exif metadata.
//!
//! An Exif APP1 segment embeds a small classic-TIFF structure: a header
//! followed by Image File Directories (IFDs) of tagged values.
//!
//! # Key Concepts
//!
//! - **Byte order**: The header declares its endianness (II = little-endian,
//!   MM = big-endian). All multi-byte values are read respecting this order.
//!
//! - **IFD (Image File Directory)**: A count followed by 12-byte entries.
//!   IFD0 describes the primary image; pointer tags link the Exif, GPS and
//!   Interoperability sub-directories.
//!
//! - **Inline vs offset values**: Values of 4 bytes or fewer are stored in the
//!   entry itself. Larger values live at an offset relative to the TIFF header.

mod header;
mod ifd;
mod reader;
mod tags;
mod values;

pub use header::{TiffHeader, TIFF_MAGIC};
pub use ifd::{decode_ifd, IfdEntry, Tag, IFD_ENTRY_SIZE};
pub use reader::decode_tiff;
pub use tags::{
    tag_name, type_size, FieldType, IfdKind, TAG_EXIF_IFD_POINTER, TAG_GPS_IFD_POINTER,
    TAG_INTEROP_IFD_POINTER,
};
pub use values::{decode_value, DecodedValue, Rational, SRational};
