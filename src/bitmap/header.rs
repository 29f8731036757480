use crate::foundation::error::{OverError, OverResult};

/// `"BM"` read as a little-endian `u16`.
pub const BMP_MAGIC: u16 = 0x4D42;

/// Serialized header size; pixel data follows immediately.
pub const HEADER_LEN: usize = 70;

/// Value of the info-header size field written for new images.
pub const INFO_HEADER_LEN: u32 = 56;

/// Default channel masks (alpha in the lowest byte, then blue, green, red).
pub const RED_MASK: u32 = 0xFF00_0000;
/// See [`RED_MASK`].
pub const GREEN_MASK: u32 = 0x00FF_0000;
/// See [`RED_MASK`].
pub const BLUE_MASK: u32 = 0x0000_FF00;
/// See [`RED_MASK`].
pub const ALPHA_MASK: u32 = 0x0000_00FF;

/// Fixed 70-byte BM header with a 56-byte info header and explicit channel masks.
///
/// Fields are kept exactly as read; nothing here checks their mutual consistency. Use
/// [`BmpHeader::from_bytes`] / [`BmpHeader::to_bytes`] for the on-disk layout; the in-memory
/// struct layout is never written directly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct BmpHeader {
    /// Offset 0, must be [`BMP_MAGIC`].
    pub magic: u16,
    /// Offset 2, header plus pixel data size.
    pub file_size: u32,
    /// Offset 6.
    pub reserved1: u16,
    /// Offset 8.
    pub reserved2: u16,
    /// Offset 10, where pixel data starts.
    pub data_offset: u32,
    /// Offset 14.
    pub header_size: u32,
    /// Offset 18, pixels per row.
    pub width: u32,
    /// Offset 22, number of rows.
    pub height: u32,
    /// Offset 26.
    pub planes: u16,
    /// Offset 28.
    pub bits_per_pixel: u16,
    /// Offset 30, 0 = uncompressed.
    pub compression: u32,
    /// Offset 34, `width * height * 4`.
    pub image_size: u32,
    /// Offset 38, pixels per meter.
    pub h_resolution: u32,
    /// Offset 42, pixels per meter.
    pub v_resolution: u32,
    /// Offset 46.
    pub colors_used: u32,
    /// Offset 50.
    pub colors_required: u32,
    /// Offset 54.
    pub red_mask: u32,
    /// Offset 58.
    pub green_mask: u32,
    /// Offset 62.
    pub blue_mask: u32,
    /// Offset 66.
    pub alpha_mask: u32,
}

impl BmpHeader {
    /// Header for a new 32-bit uncompressed image of the given size.
    ///
    /// Fails when `width * height * 4` (or the file size) does not fit the 32-bit size fields.
    pub fn for_dimensions(width: u32, height: u32) -> OverResult<Self> {
        let image_size = width
            .checked_mul(height)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| {
                OverError::allocation(format!("{width}x{height} pixel data exceeds u32 range"))
            })?;
        let file_size = image_size.checked_add(HEADER_LEN as u32).ok_or_else(|| {
            OverError::allocation(format!("{width}x{height} file size exceeds u32 range"))
        })?;

        Ok(Self {
            magic: BMP_MAGIC,
            file_size,
            reserved1: 0,
            reserved2: 0,
            data_offset: HEADER_LEN as u32,
            header_size: INFO_HEADER_LEN,
            width,
            height,
            planes: 1,
            bits_per_pixel: 32,
            compression: 0,
            image_size,
            h_resolution: 0,
            v_resolution: 0,
            colors_used: 0,
            colors_required: 0,
            red_mask: RED_MASK,
            green_mask: GREEN_MASK,
            blue_mask: BLUE_MASK,
            alpha_mask: ALPHA_MASK,
        })
    }

    /// Number of pixel bytes implied by `width` and `height`.
    pub fn pixel_len(&self) -> OverResult<usize> {
        (self.width as usize)
            .checked_mul(self.height as usize)
            .and_then(|v| v.checked_mul(4))
            .ok_or_else(|| {
                OverError::allocation(format!(
                    "{}x{} pixel buffer size overflow",
                    self.width, self.height
                ))
            })
    }

    /// Parse the first [`HEADER_LEN`] bytes.
    ///
    /// Only the length and the magic number are checked.
    pub fn from_bytes(bytes: &[u8]) -> OverResult<Self> {
        let Some(raw) = bytes.get(..HEADER_LEN) else {
            return Err(OverError::malformed(format!(
                "header needs {HEADER_LEN} bytes, got {}",
                bytes.len()
            )));
        };

        let header = Self {
            magic: read_u16(raw, 0),
            file_size: read_u32(raw, 2),
            reserved1: read_u16(raw, 6),
            reserved2: read_u16(raw, 8),
            data_offset: read_u32(raw, 10),
            header_size: read_u32(raw, 14),
            width: read_u32(raw, 18),
            height: read_u32(raw, 22),
            planes: read_u16(raw, 26),
            bits_per_pixel: read_u16(raw, 28),
            compression: read_u32(raw, 30),
            image_size: read_u32(raw, 34),
            h_resolution: read_u32(raw, 38),
            v_resolution: read_u32(raw, 42),
            colors_used: read_u32(raw, 46),
            colors_required: read_u32(raw, 50),
            red_mask: read_u32(raw, 54),
            green_mask: read_u32(raw, 58),
            blue_mask: read_u32(raw, 62),
            alpha_mask: read_u32(raw, 66),
        };

        if header.magic != BMP_MAGIC {
            return Err(OverError::malformed(format!(
                "bad magic 0x{:04X}, expected 0x{BMP_MAGIC:04X}",
                header.magic
            )));
        }
        Ok(header)
    }

    /// Serialize to the fixed little-endian layout.
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let mut out = [0u8; HEADER_LEN];
        write_u16(&mut out, 0, self.magic);
        write_u32(&mut out, 2, self.file_size);
        write_u16(&mut out, 6, self.reserved1);
        write_u16(&mut out, 8, self.reserved2);
        write_u32(&mut out, 10, self.data_offset);
        write_u32(&mut out, 14, self.header_size);
        write_u32(&mut out, 18, self.width);
        write_u32(&mut out, 22, self.height);
        write_u16(&mut out, 26, self.planes);
        write_u16(&mut out, 28, self.bits_per_pixel);
        write_u32(&mut out, 30, self.compression);
        write_u32(&mut out, 34, self.image_size);
        write_u32(&mut out, 38, self.h_resolution);
        write_u32(&mut out, 42, self.v_resolution);
        write_u32(&mut out, 46, self.colors_used);
        write_u32(&mut out, 50, self.colors_required);
        write_u32(&mut out, 54, self.red_mask);
        write_u32(&mut out, 58, self.green_mask);
        write_u32(&mut out, 62, self.blue_mask);
        write_u32(&mut out, 66, self.alpha_mask);
        out
    }
}

fn read_u16(raw: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([raw[at], raw[at + 1]])
}

fn read_u32(raw: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([raw[at], raw[at + 1], raw[at + 2], raw[at + 3]])
}

fn write_u16(out: &mut [u8], at: usize, v: u16) {
    out[at..at + 2].copy_from_slice(&v.to_le_bytes());
}

fn write_u32(out: &mut [u8], at: usize, v: u32) {
    out[at..at + 4].copy_from_slice(&v.to_le_bytes());
}

#[cfg(test)]
#[path = "../../tests/unit/bitmap/header.rs"]
mod tests;
