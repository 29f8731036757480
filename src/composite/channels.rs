//! Moves one channel of a pixel pair between packed bytes and [`F64x2`] lanes.
//!
//! Both directions are byte shuffles driven by per-channel mask tables: a mask entry names the
//! source byte to copy, or [`ZERO`] to clear the destination byte.

use crate::{
    composite::lanes::F64x2,
    foundation::core::{BYTES_PER_PIXEL, Channel, PixelPair},
};

/// Mask entry that clears the destination byte.
pub const ZERO: u8 = 0x80;

const PAIR_LEN: usize = BYTES_PER_PIXEL * 2;

/// Gather masks: the channel byte of each pixel lands in the low byte of that pixel's 32-bit
/// slot, so the slot read as a little-endian `u32` is the channel value.
const GATHER: [[u8; PAIR_LEN]; 4] = [
    [0, ZERO, ZERO, ZERO, 4, ZERO, ZERO, ZERO],
    [1, ZERO, ZERO, ZERO, 5, ZERO, ZERO, ZERO],
    [2, ZERO, ZERO, ZERO, 6, ZERO, ZERO, ZERO],
    [3, ZERO, ZERO, ZERO, 7, ZERO, ZERO, ZERO],
];

/// Scatter masks: source bytes 0 and 1 (the two packed lanes) go to the channel position of
/// pixel 0 and pixel 1.
const SCATTER: [[u8; PAIR_LEN]; 4] = [
    [0, ZERO, ZERO, ZERO, 1, ZERO, ZERO, ZERO],
    [ZERO, 0, ZERO, ZERO, ZERO, 1, ZERO, ZERO],
    [ZERO, ZERO, 0, ZERO, ZERO, ZERO, 1, ZERO],
    [ZERO, ZERO, ZERO, 0, ZERO, ZERO, ZERO, 1],
];

/// Byte shuffle: `out[i] = src[mask[i] & 7]`, or 0 when the mask entry has its high bit set.
pub fn shuffle(src: &PixelPair, mask: &[u8; PAIR_LEN]) -> PixelPair {
    let mut out = [0u8; PAIR_LEN];
    for (o, &m) in out.iter_mut().zip(mask) {
        if m & ZERO == 0 {
            *o = src[usize::from(m & 0x07)];
        }
    }
    out
}

/// Gather `channel` of both pixels into lanes, each in `[0.0, 255.0]`.
pub fn extract_channel(pair: &PixelPair, channel: Channel) -> F64x2 {
    let masked = shuffle(pair, &GATHER[channel.index()]);
    let lane0 = u32::from_le_bytes([masked[0], masked[1], masked[2], masked[3]]);
    let lane1 = u32::from_le_bytes([masked[4], masked[5], masked[6], masked[7]]);
    F64x2::new(f64::from(lane0), f64::from(lane1))
}

/// Truncate one lane toward zero and keep the low 8 bits.
///
/// The integer conversion follows the packed-double truncation instruction: NaN and values
/// outside the `i32` range become `i32::MIN`, whose low byte is 0. In-range values wrap rather
/// than saturate, so `300.7` packs to `44`.
pub fn pack_lane(v: f64) -> u8 {
    let t = v.trunc();
    let as_i32 = if t.is_nan() || t < f64::from(i32::MIN) || t > f64::from(i32::MAX) {
        i32::MIN
    } else {
        t as i32
    };
    as_i32 as u8
}

/// Whether a lane packs without wrapping (NaN counts as not representable).
pub fn lane_fits_u8(v: f64) -> bool {
    v > -1.0 && v < 256.0
}

/// Pack both lanes into `channel` of a pixel pair; every other byte is zero.
pub fn pack_channel(lanes: F64x2, channel: Channel) -> PixelPair {
    let [l0, l1] = lanes.lanes();
    let packed = [pack_lane(l0), pack_lane(l1), 0, 0, 0, 0, 0, 0];
    shuffle(&packed, &SCATTER[channel.index()])
}

/// Combine four single-channel patterns; their populated bytes are disjoint, so XOR is a
/// plain merge.
pub fn merge_channels(parts: [PixelPair; 4]) -> PixelPair {
    let mut out = [0u8; PAIR_LEN];
    for part in parts {
        for (o, b) in out.iter_mut().zip(part) {
            *o ^= b;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/composite/channels.rs"]
mod tests;
