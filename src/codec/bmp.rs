use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use anyhow::Context as _;

use crate::{
    bitmap::container::{Bitmap, zeroed_pixels},
    bitmap::header::{BmpHeader, HEADER_LEN},
    foundation::error::{OverError, OverResult},
};

/// Decode a 32-bit BM image from memory.
///
/// Pixel data is taken from the bytes right after the 70-byte header, whatever the stored
/// data-offset says. Anything past `width * height * 4` pixel bytes is ignored.
pub fn decode(bytes: &[u8]) -> OverResult<Bitmap> {
    let header = BmpHeader::from_bytes(bytes)?;
    let len = header.pixel_len()?;

    let payload = &bytes[HEADER_LEN..];
    let Some(src) = payload.get(..len) else {
        return Err(OverError::malformed(format!(
            "{}x{} image needs {len} pixel bytes, got {}",
            header.width,
            header.height,
            payload.len()
        )));
    };

    let mut pixels = zeroed_pixels(len)?;
    pixels.copy_from_slice(src);
    Bitmap::from_parts(header, pixels)
}

/// Encode to the header followed by exactly `width * height * 4` pixel bytes.
pub fn encode(bmp: &Bitmap) -> Vec<u8> {
    let mut out = Vec::with_capacity(HEADER_LEN + bmp.pixels().len());
    out.extend_from_slice(&bmp.header().to_bytes());
    out.extend_from_slice(bmp.pixels());
    out
}

/// Stream the encoded image into `w`.
pub fn encode_to<W: Write>(bmp: &Bitmap, mut w: W) -> OverResult<()> {
    w.write_all(&bmp.header().to_bytes())
        .map_err(|e| OverError::write(format!("header: {e}")))?;
    w.write_all(bmp.pixels())
        .map_err(|e| OverError::write(format!("pixel data: {e}")))?;
    w.flush()
        .map_err(|e| OverError::write(format!("flush: {e}")))?;
    Ok(())
}

/// Read and decode an image file.
#[tracing::instrument]
pub fn read_file(path: &Path) -> OverResult<Bitmap> {
    let bytes = std::fs::read(path).with_context(|| format!("read '{}'", path.display()))?;
    let bmp = decode(&bytes)?;
    tracing::debug!(
        width = bmp.width(),
        height = bmp.height(),
        bytes = bytes.len(),
        "decoded bitmap"
    );
    Ok(bmp)
}

/// Encode and write an image file.
///
/// A file that cannot be created or fully written is a [`OverError::Write`]; a partially
/// written file is left in place.
#[tracing::instrument(skip(bmp))]
pub fn write_file(bmp: &Bitmap, path: &Path) -> OverResult<()> {
    let f = File::create(path)
        .map_err(|e| OverError::write(format!("create '{}': {e}", path.display())))?;
    encode_to(bmp, BufWriter::new(f))?;
    tracing::debug!(width = bmp.width(), height = bmp.height(), "wrote bitmap");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/bmp.rs"]
mod tests;
