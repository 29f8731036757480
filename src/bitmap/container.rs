use crate::{
    bitmap::header::BmpHeader,
    foundation::core::{Argb8, BYTES_PER_PIXEL},
    foundation::error::{OverError, OverResult},
};

/// A decoded 32-bit image: header plus a row-major `(a, r, g, b)` pixel buffer.
///
/// `pixels.len() == width * height * 4` holds for every value: the dimensions are fixed at
/// construction and only the descriptive header fields can be changed afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bitmap {
    header: BmpHeader,
    pixels: Vec<u8>,
}

impl Bitmap {
    /// Allocate a zero-filled (fully transparent) image with default header fields.
    pub fn new(width: u32, height: u32) -> OverResult<Self> {
        let header = BmpHeader::for_dimensions(width, height)?;
        let pixels = zeroed_pixels(header.pixel_len()?)?;
        Ok(Self { header, pixels })
    }

    /// Pair a header with an already-read pixel buffer.
    ///
    /// The buffer must hold exactly `width * height * 4` bytes.
    pub fn from_parts(header: BmpHeader, pixels: Vec<u8>) -> OverResult<Self> {
        let expected = header.pixel_len()?;
        if pixels.len() != expected {
            return Err(OverError::malformed(format!(
                "{}x{} image needs {expected} pixel bytes, got {}",
                header.width,
                header.height,
                pixels.len()
            )));
        }
        Ok(Self { header, pixels })
    }

    /// Pixels per row.
    pub fn width(&self) -> u32 {
        self.header.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.header.height
    }

    /// Header fields as held (written back verbatim on encode).
    pub fn header(&self) -> &BmpHeader {
        &self.header
    }

    /// Set the compression tag written back on encode. Pixels are not reinterpreted.
    pub fn set_compression(&mut self, compression: u32) {
        self.header.compression = compression;
    }

    /// Set the horizontal and vertical resolution fields.
    pub fn set_resolution(&mut self, h_resolution: u32, v_resolution: u32) {
        self.header.h_resolution = h_resolution;
        self.header.v_resolution = v_resolution;
    }

    /// Set the palette color counts.
    pub fn set_colors(&mut self, used: u32, required: u32) {
        self.header.colors_used = used;
        self.header.colors_required = required;
    }

    /// Raw pixel bytes.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Mutable raw pixel bytes.
    pub fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }

    /// Give up the container, keeping the pixel buffer.
    pub fn into_pixels(self) -> Vec<u8> {
        self.pixels
    }

    /// Bytes per row.
    pub fn row_len(&self) -> usize {
        self.width() as usize * BYTES_PER_PIXEL
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Argb8> {
        let at = self.offset_of(x, y)?;
        let px = self.pixels.get(at..at + BYTES_PER_PIXEL)?;
        px.try_into().ok().map(Argb8::from_bytes)
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set_pixel(&mut self, x: u32, y: u32, px: Argb8) -> OverResult<()> {
        let at = self.offset_of(x, y).ok_or_else(|| {
            OverError::validation(format!(
                "pixel ({x}, {y}) outside {}x{} image",
                self.width(),
                self.height()
            ))
        })?;
        self.pixels[at..at + BYTES_PER_PIXEL].copy_from_slice(&px.to_bytes());
        Ok(())
    }

    /// Fill every pixel with `px`.
    pub fn fill(&mut self, px: Argb8) {
        let bytes = px.to_bytes();
        for chunk in self.pixels.chunks_exact_mut(BYTES_PER_PIXEL) {
            chunk.copy_from_slice(&bytes);
        }
    }

    fn offset_of(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some((y as usize * self.width() as usize + x as usize) * BYTES_PER_PIXEL)
    }
}

/// Zeroed buffer whose allocation failure is reported instead of aborting.
pub(crate) fn zeroed_pixels(len: usize) -> OverResult<Vec<u8>> {
    let mut pixels = Vec::new();
    pixels
        .try_reserve_exact(len)
        .map_err(|e| OverError::allocation(format!("reserve {len} pixel bytes: {e}")))?;
    pixels.resize(len, 0);
    Ok(pixels)
}

#[cfg(test)]
#[path = "../../tests/unit/bitmap/container.rs"]
mod tests;
