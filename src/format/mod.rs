//! Metadata decoders for JPEG files.
//!
//! [`jpeg::scan`] walks the JPEG marker stream and hands the Exif APP1
//! segment to the [`tiff`] decoder. The result is a [`MetadataSet`] holding
//! the tags of IFD0 and its Exif, GPS and Interoperability sub-directories,
//! plus the JFIF header when one is present.

pub mod jfif;
pub mod jpeg;
pub mod metadata;
pub mod tiff;

pub use jfif::{DensityUnits, JfifHeader};
pub use jpeg::scan;
pub use metadata::MetadataSet;
