//! Decoded metadata for a single image.

use serde::Serialize;

use super::jfif::JfifHeader;
use super::tiff::{IfdKind, Tag};

/// Tags grouped by the directory they were read from, in file order.
///
/// A freshly decoded set only ever holds what the decoder found; kinds that
/// were not present in the file are simply empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MetadataSet {
    main: Vec<Tag>,
    exif: Vec<Tag>,
    gps: Vec<Tag>,
    interop: Vec<Tag>,

    #[serde(skip_serializing_if = "Option::is_none")]
    jfif: Option<JfifHeader>,
}

impl MetadataSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tags of one kind, in the order they appear in the IFD.
    pub fn tags(&self, kind: IfdKind) -> &[Tag] {
        match kind {
            IfdKind::Main => &self.main,
            IfdKind::Exif => &self.exif,
            IfdKind::Gps => &self.gps,
            IfdKind::Interop => &self.interop,
        }
    }

    fn tags_mut(&mut self, kind: IfdKind) -> &mut Vec<Tag> {
        match kind {
            IfdKind::Main => &mut self.main,
            IfdKind::Exif => &mut self.exif,
            IfdKind::Gps => &mut self.gps,
            IfdKind::Interop => &mut self.interop,
        }
    }

    /// First tag with `id` in the given directory.
    pub fn get(&self, kind: IfdKind, id: u16) -> Option<&Tag> {
        self.tags(kind).iter().find(|tag| tag.id == id)
    }

    /// Append decoded tags to a directory.
    pub(crate) fn insert(&mut self, kind: IfdKind, tags: Vec<Tag>) {
        self.tags_mut(kind).extend(tags);
    }

    /// All tags as `(kind, tag)` pairs: Main, Exif, GPS, then Interop.
    pub fn iter(&self) -> impl Iterator<Item = (IfdKind, &Tag)> + '_ {
        IfdKind::ALL
            .into_iter()
            .flat_map(move |kind| self.tags(kind).iter().map(move |tag| (kind, tag)))
    }

    /// Total number of tags across all directories.
    pub fn len(&self) -> usize {
        self.main.len() + self.exif.len() + self.gps.len() + self.interop.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// JFIF header from APP0, if the image had one.
    pub fn jfif(&self) -> Option<&JfifHeader> {
        self.jfif.as_ref()
    }

    pub(crate) fn set_jfif(&mut self, header: Option<JfifHeader>) {
        self.jfif = header;
    }
}

// =============================================================================
// Tests
// =============================================================================
