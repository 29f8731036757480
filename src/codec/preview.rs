use std::path::Path;

use anyhow::Context as _;

use crate::{
    bitmap::container::Bitmap,
    foundation::core::BYTES_PER_PIXEL,
    foundation::error::{OverError, OverResult},
};

/// Reorder `(a, r, g, b)` pixels into an [`image::RgbaImage`] (straight alpha).
pub fn to_rgba_image(bmp: &Bitmap) -> OverResult<image::RgbaImage> {
    let mut rgba = Vec::with_capacity(bmp.pixels().len());
    for px in bmp.pixels().chunks_exact(BYTES_PER_PIXEL) {
        rgba.extend_from_slice(&[px[1], px[2], px[3], px[0]]);
    }
    image::RgbaImage::from_raw(bmp.width(), bmp.height(), rgba)
        .ok_or_else(|| OverError::validation("rgba buffer does not match image dimensions"))
}

/// Build a bitmap with default header fields from an RGBA image.
pub fn from_rgba_image(img: &image::RgbaImage) -> OverResult<Bitmap> {
    let (width, height) = img.dimensions();
    let mut bmp = Bitmap::new(width, height)?;
    for (dst, src) in bmp
        .pixels_mut()
        .chunks_exact_mut(BYTES_PER_PIXEL)
        .zip(img.as_raw().chunks_exact(BYTES_PER_PIXEL))
    {
        dst.copy_from_slice(&[src[3], src[0], src[1], src[2]]);
    }
    Ok(bmp)
}

/// Write a PNG preview of `bmp`.
pub fn save_png(bmp: &Bitmap, path: &Path) -> OverResult<()> {
    let rgba = to_rgba_image(bmp)?;
    image::save_buffer_with_format(
        path,
        rgba.as_raw(),
        rgba.width(),
        rgba.height(),
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/codec/preview.rs"]
mod tests;
