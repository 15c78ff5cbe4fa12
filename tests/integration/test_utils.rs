//! Test utilities for integration tests.
//!
//! Builders for synthetic TIFF structures and the JPEG streams that carry
//! them, in either byte order. Sub-IFD pointer tags are inserted
//! automatically when the corresponding directory is present.

// =============================================================================
// Byte Order
// =============================================================================

#[derive(Clone, Copy, Debug)]
pub enum ByteOrderType {
    LittleEndian,
    BigEndian,
}

impl ByteOrderType {
    pub fn u16_bytes(self, value: u16) -> [u8; 2] {
        match self {
            ByteOrderType::LittleEndian => value.to_le_bytes(),
            ByteOrderType::BigEndian => value.to_be_bytes(),
        }
    }

    pub fn u32_bytes(self, value: u32) -> [u8; 4] {
        match self {
            ByteOrderType::LittleEndian => value.to_le_bytes(),
            ByteOrderType::BigEndian => value.to_be_bytes(),
        }
    }

    /// Encode SHORT values.
    pub fn shorts(self, values: &[u16]) -> Vec<u8> {
        values.iter().flat_map(|&v| self.u16_bytes(v)).collect()
    }

    /// Encode RATIONAL values as (numerator, denominator) pairs.
    pub fn rationals(self, values: &[(u32, u32)]) -> Vec<u8> {
        values
            .iter()
            .flat_map(|&(n, d)| {
                let mut pair = self.u32_bytes(n).to_vec();
                pair.extend(self.u32_bytes(d));
                pair
            })
            .collect()
    }

    /// Encode SRATIONAL values as (numerator, denominator) pairs.
    pub fn srationals(self, values: &[(i32, i32)]) -> Vec<u8> {
        let unsigned: Vec<(u32, u32)> = values.iter().map(|&(n, d)| (n as u32, d as u32)).collect();
        self.rationals(&unsigned)
    }
}

// =============================================================================
// IFD Builder
// =============================================================================

struct IfdEntryBuilder {
    tag: u16,
    field_type: u16,
    count: u32,
    /// Value bytes already in file byte order
    data: Vec<u8>,
}

/// Builder for one IFD. Entries are written in insertion order.
#[derive(Default)]
pub struct IfdBuilder {
    entries: Vec<IfdEntryBuilder>,
}

impl IfdBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single-valued integer tag (BYTE, SHORT or LONG), stored inline.
    pub fn add_entry(
        &mut self,
        byte_order: ByteOrderType,
        tag: u16,
        field_type: u16,
        value: u32,
    ) -> &mut Self {
        let data = match field_type_size(field_type) {
            1 => vec![value as u8],
            2 => byte_order.u16_bytes(value as u16).to_vec(),
            _ => byte_order.u32_bytes(value).to_vec(),
        };
        self.add_entry_with_data(tag, field_type, 1, data)
    }

    /// Add a tag with raw value bytes. Values over 4 bytes go out of line.
    pub fn add_entry_with_data(
        &mut self,
        tag: u16,
        field_type: u16,
        count: u32,
        data: Vec<u8>,
    ) -> &mut Self {
        self.entries.push(IfdEntryBuilder {
            tag,
            field_type,
            count,
            data,
        });
        self
    }

    /// Add an ASCII tag. The NUL terminator is appended and counted.
    pub fn add_ascii(&mut self, tag: u16, value: &str) -> &mut Self {
        let mut data = value.as_bytes().to_vec();
        data.push(0);
        let count = data.len() as u32;
        self.add_entry_with_data(tag, 2, count, data)
    }

    fn external_len(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.data.len() > 4)
            .map(|e| e.data.len())
            .sum()
    }

    /// Bytes this IFD occupies, including its out-of-line values.
    fn size(&self) -> usize {
        2 + self.entries.len() * 12 + 4 + self.external_len()
    }

    /// Serialize at `base`, a TIFF-relative offset.
    fn write_to(&self, data: &mut Vec<u8>, byte_order: ByteOrderType, base: usize) {
        data.extend(byte_order.u16_bytes(self.entries.len() as u16));

        let mut external: Vec<u8> = Vec::new();
        let mut external_offset = base + 2 + self.entries.len() * 12 + 4;

        for entry in &self.entries {
            data.extend(byte_order.u16_bytes(entry.tag));
            data.extend(byte_order.u16_bytes(entry.field_type));
            data.extend(byte_order.u32_bytes(entry.count));

            if entry.data.len() <= 4 {
                let mut inline = entry.data.clone();
                inline.resize(4, 0);
                data.extend(inline);
            } else {
                data.extend(byte_order.u32_bytes(external_offset as u32));
                external.extend(&entry.data);
                external_offset += entry.data.len();
            }
        }

        // Next IFD offset
        data.extend(byte_order.u32_bytes(0));
        data.extend(external);
    }
}

fn field_type_size(field_type: u16) -> usize {
    match field_type {
        1 | 2 | 6 | 7 => 1,
        3 | 8 => 2,
        4 | 9 | 11 => 4,
        5 | 10 | 12 => 8,
        _ => 1,
    }
}

// =============================================================================
// TIFF Builder
// =============================================================================

/// Builder for the TIFF structure inside an Exif segment.
///
/// Layout: header, IFD0, Exif IFD, Interop IFD, GPS IFD, each directory
/// immediately followed by its out-of-line values.
pub struct TiffBuilder {
    byte_order: ByteOrderType,
    main: IfdBuilder,
    exif: Option<IfdBuilder>,
    gps: Option<IfdBuilder>,
    interop: Option<IfdBuilder>,
}

impl TiffBuilder {
    pub fn new(byte_order: ByteOrderType) -> Self {
        Self {
            byte_order,
            main: IfdBuilder::new(),
            exif: None,
            gps: None,
            interop: None,
        }
    }

    pub fn byte_order(&self) -> ByteOrderType {
        self.byte_order
    }

    pub fn main(mut self, ifd: IfdBuilder) -> Self {
        self.main = ifd;
        self
    }

    pub fn exif(mut self, ifd: IfdBuilder) -> Self {
        self.exif = Some(ifd);
        self
    }

    pub fn gps(mut self, ifd: IfdBuilder) -> Self {
        self.gps = Some(ifd);
        self
    }

    /// Interop IFD, linked from the Exif IFD (an empty one is created if needed).
    pub fn interop(mut self, ifd: IfdBuilder) -> Self {
        self.interop = Some(ifd);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let order = self.byte_order;
        let mut main = self.main;
        let mut exif = self.exif;
        let gps = self.gps;
        let interop = self.interop;

        if interop.is_some() && exif.is_none() {
            exif = Some(IfdBuilder::new());
        }

        // Pointer entries first with placeholder values so sizes are final
        if exif.is_some() {
            main.add_entry(order, 0x8769, 4, 0);
        }
        if gps.is_some() {
            main.add_entry(order, 0x8825, 4, 0);
        }
        if let (Some(exif), Some(_)) = (exif.as_mut(), interop.as_ref()) {
            exif.add_entry(order, 0xA005, 4, 0);
        }

        let main_offset = 8;
        let exif_offset = main_offset + main.size();
        let interop_offset = exif_offset + exif.as_ref().map_or(0, IfdBuilder::size);
        let gps_offset = interop_offset + interop.as_ref().map_or(0, IfdBuilder::size);

        set_pointer(&mut main, order, 0x8769, exif_offset);
        set_pointer(&mut main, order, 0x8825, gps_offset);
        if let Some(exif) = exif.as_mut() {
            set_pointer(exif, order, 0xA005, interop_offset);
        }

        let mut data = match order {
            ByteOrderType::LittleEndian => b"II".to_vec(),
            ByteOrderType::BigEndian => b"MM".to_vec(),
        };
        data.extend(order.u16_bytes(42));
        data.extend(order.u32_bytes(main_offset as u32));

        main.write_to(&mut data, order, main_offset);
        if let Some(exif) = &exif {
            exif.write_to(&mut data, order, exif_offset);
        }
        if let Some(interop) = &interop {
            interop.write_to(&mut data, order, interop_offset);
        }
        if let Some(gps) = &gps {
            gps.write_to(&mut data, order, gps_offset);
        }

        data
    }
}

fn set_pointer(ifd: &mut IfdBuilder, order: ByteOrderType, tag: u16, offset: usize) {
    for entry in ifd.entries.iter_mut().filter(|e| e.tag == tag) {
        entry.data = order.u32_bytes(offset as u32).to_vec();
    }
}

// =============================================================================
// JPEG Builder
// =============================================================================

pub const EXIF_IDENTIFIER: &[u8] = b"Exif\0\0";

/// Builder for a JPEG marker stream. Starts with SOI.
pub struct JpegBuilder {
    data: Vec<u8>,
}

impl JpegBuilder {
    pub fn new() -> Self {
        Self {
            data: vec![0xFF, 0xD8],
        }
    }

    /// Append a length-prefixed segment.
    pub fn segment(mut self, marker: u8, payload: &[u8]) -> Self {
        self.data.extend([0xFF, marker]);
        self.data
            .extend(((payload.len() + 2) as u16).to_be_bytes());
        self.data.extend(payload);
        self
    }

    /// Append an APP0 JFIF segment with a `width x height` RGB thumbnail.
    pub fn jfif(self, thumb_width: u8, thumb_height: u8) -> Self {
        let mut payload = b"JFIF\0".to_vec();
        payload.extend([1, 2, 1]);
        payload.extend(72u16.to_be_bytes());
        payload.extend(72u16.to_be_bytes());
        payload.extend([thumb_width, thumb_height]);
        payload.extend(vec![0x80; thumb_width as usize * thumb_height as usize * 3]);
        self.segment(0xE0, &payload)
    }

    /// Append an APP1 Exif segment wrapping `tiff`.
    pub fn exif(self, tiff: &[u8]) -> Self {
        let mut payload = EXIF_IDENTIFIER.to_vec();
        payload.extend(tiff);
        self.segment(0xE1, &payload)
    }

    /// Append a bare marker (no length or payload).
    pub fn marker(mut self, marker: u8) -> Self {
        self.data.extend([0xFF, marker]);
        self
    }

    /// Append EOI and return the stream.
    pub fn finish(self) -> Vec<u8> {
        self.marker(0xD9).build()
    }

    pub fn build(self) -> Vec<u8> {
        self.data
    }
}

impl Default for JpegBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Ready-made Images
// =============================================================================

/// A camera-like Exif structure exercising all four directories.
///
/// - IFD0: Make "Canon", Model "EOS R5", Orientation 1, XResolution 72/1
/// - Exif: ExposureTime 1/250, ISO 400, ExposureBiasValue -1/3
/// - Interop: InteroperabilityIndex "R98"
/// - GPS: GPSLatitudeRef "N", GPSLatitude 40/1 26/1 4614/100
pub fn camera_tiff(order: ByteOrderType) -> Vec<u8> {
    let mut main = IfdBuilder::new();
    main.add_ascii(0x010F, "Canon")
        .add_ascii(0x0110, "EOS R5")
        .add_entry(order, 0x0112, 3, 1)
        .add_entry_with_data(0x011A, 5, 1, order.rationals(&[(72, 1)]));

    let mut exif = IfdBuilder::new();
    exif.add_entry_with_data(0x829A, 5, 1, order.rationals(&[(1, 250)]))
        .add_entry(order, 0x8827, 3, 400)
        .add_entry_with_data(0x9204, 10, 1, order.srationals(&[(-1, 3)]));

    let mut interop = IfdBuilder::new();
    interop.add_ascii(0x0001, "R98");

    let mut gps = IfdBuilder::new();
    gps.add_ascii(0x0001, "N").add_entry_with_data(
        0x0002,
        5,
        3,
        order.rationals(&[(40, 1), (26, 1), (4614, 100)]),
    );

    TiffBuilder::new(order)
        .main(main)
        .exif(exif)
        .interop(interop)
        .gps(gps)
        .build()
}

/// SOI, APP0 JFIF, Exif APP1 holding [`camera_tiff`], EOI.
pub fn camera_jpeg(order: ByteOrderType) -> Vec<u8> {
    JpegBuilder::new()
        .jfif(0, 0)
        .exif(&camera_tiff(order))
        .finish()
}

/// SOI, Exif APP1 with a single Orientation tag, EOI.
pub fn minimal_jpeg() -> Vec<u8> {
    let order = ByteOrderType::BigEndian;
    let mut main = IfdBuilder::new();
    main.add_entry(order, 0x0112, 3, 6);
    JpegBuilder::new()
        .exif(&TiffBuilder::new(order).main(main).build())
        .finish()
}
