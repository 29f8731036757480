//! bmpover composites one 32-bit BM bitmap over another.
//!
//! # Pipeline overview
//!
//! 1. **Decode**: bytes -> [`Bitmap`] (70-byte header + row-major `(a, r, g, b)` pixels)
//! 2. **Blend**: background + foreground + offset -> new [`Bitmap`], two pixels per step
//! 3. **Encode**: [`Bitmap`] -> bytes, header fields written back verbatim
//!
//! The blend runs the straight-alpha "over" formula in `f64` lanes, two pixels at a time
//! ([`F64x2`]), with explicit channel gather/pack/merge steps between packed bytes and lanes.
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate; lanes are portable arrays.
//! - **Deterministic**: sequential and parallel blends produce identical bytes.
//! - **Preserved hazards are visible**: zero result alpha and 8-bit wrap are not corrected,
//!   but [`BlendStats`] counts them.
//! - **Checked placement**: a foreground that does not fit is an error, never an
//!   out-of-bounds access.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod bitmap;
mod codec;
mod composite;
mod foundation;
mod render;

pub use bitmap::container::Bitmap;
pub use bitmap::header::{
    ALPHA_MASK, BLUE_MASK, BMP_MAGIC, BmpHeader, GREEN_MASK, HEADER_LEN, INFO_HEADER_LEN,
    RED_MASK,
};
pub use codec::bmp::{decode, encode, encode_to, read_file, write_file};
pub use codec::preview::{from_rgba_image, save_png, to_rgba_image};
pub use composite::channels::{
    ZERO, extract_channel, lane_fits_u8, merge_channels, pack_channel, pack_lane, shuffle,
};
pub use composite::lanes::F64x2;
pub use composite::over::{PairHazards, blend_pixel, blend_pixel_pair, blend_pixel_pair_checked};
pub use foundation::core::{
    Argb8, BYTES_PER_PIXEL, Channel, PAIR_PIXELS, PixelPair, pair_from_pixels, pixels_from_pair,
};
pub use foundation::error::{OverError, OverResult};
pub use render::blend::{BlendOpts, BlendStats, blend, blend_with_opts};
