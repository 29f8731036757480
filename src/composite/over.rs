use crate::{
    composite::channels::{
        extract_channel, lane_fits_u8, merge_channels, pack_channel, pack_lane,
    },
    composite::lanes::F64x2,
    foundation::core::{Argb8, Channel, PixelPair},
};

/// Hazards hit while blending one pair. Results are the same whether or not anyone looks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PairHazards {
    /// Lanes whose result alpha was exactly zero, making the color division by zero.
    pub zero_alpha_lanes: u32,
    /// Finite channel lanes (alpha included) that wrapped when packed to 8 bits.
    pub wrapped_lanes: u32,
}

impl PairHazards {
    /// No hazard was hit.
    pub fn is_clean(&self) -> bool {
        self.zero_alpha_lanes == 0 && self.wrapped_lanes == 0
    }
}

/// Blend two foreground pixels over two background pixels.
///
/// Straight (non-premultiplied) alpha, evaluated in `f64` lanes:
///
/// ```text
/// fgA = fg.a / 255          invA = 1 - fgA          bgA = bg.a / 255
/// resA = bgA * invA + fgA
/// resC = (bg.c * invA + fg.c * fgA) / resA          for c in r, g, b
/// out  = (resA * 255, resR, resG, resB), each truncated and wrapped to 8 bits
/// ```
///
/// `resA == 0` (both alphas zero) is not guarded: the resulting NaN or infinite lanes pack
/// to 0. Color results above 255 (possible when the background is not opaque) wrap. See
/// [`blend_pixel_pair_checked`] to detect either case.
pub fn blend_pixel_pair(bg: &PixelPair, fg: &PixelPair) -> PixelPair {
    blend_pixel_pair_checked(bg, fg).0
}

/// [`blend_pixel_pair`] plus the hazards it ran into.
pub fn blend_pixel_pair_checked(bg: &PixelPair, fg: &PixelPair) -> (PixelPair, PairHazards) {
    let m255 = F64x2::splat(255.0);
    let ones = F64x2::splat(1.0);

    let fg_a = extract_channel(fg, Channel::Alpha) / m255;
    let inv_a = ones - fg_a;
    let bg_a = extract_channel(bg, Channel::Alpha) / m255;
    let res_a = bg_a * inv_a + fg_a;

    let mut hazards = PairHazards {
        zero_alpha_lanes: res_a.lanes().iter().filter(|&&a| a == 0.0).count() as u32,
        wrapped_lanes: 0,
    };

    let mut parts = [[0u8; 8]; 4];
    for ch in Channel::COLORS {
        let bg_c = extract_channel(bg, ch);
        let fg_c = extract_channel(fg, ch);
        let res_c = (bg_c * inv_a + fg_c * fg_a) / res_a;
        hazards.wrapped_lanes += count_wrapped(res_c);
        parts[ch.index()] = pack_channel(res_c, ch);
    }

    let res_a = res_a * m255;
    hazards.wrapped_lanes += count_wrapped(res_a);
    parts[Channel::Alpha.index()] = pack_channel(res_a, Channel::Alpha);

    (merge_channels(parts), hazards)
}

/// Scalar form of the same formula for one pixel; agrees bit-for-bit with either lane of
/// [`blend_pixel_pair`].
pub fn blend_pixel(bg: Argb8, fg: Argb8) -> Argb8 {
    let fg_a = f64::from(fg.a) / 255.0;
    let inv_a = 1.0 - fg_a;
    let bg_a = f64::from(bg.a) / 255.0;
    let res_a = bg_a * inv_a + fg_a;

    let color = |b: u8, f: u8| {
        pack_lane((f64::from(b) * inv_a + f64::from(f) * fg_a) / res_a)
    };

    Argb8::new(
        pack_lane(res_a * 255.0),
        color(bg.r, fg.r),
        color(bg.g, fg.g),
        color(bg.b, fg.b),
    )
}

fn count_wrapped(lanes: F64x2) -> u32 {
    lanes
        .lanes()
        .iter()
        .filter(|v| v.is_finite() && !lane_fits_u8(**v))
        .count() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/composite/over.rs"]
mod tests;
