/// Bytes per stored pixel (alpha, red, green, blue).
pub const BYTES_PER_PIXEL: usize = 4;

/// Pixels processed per lane group.
pub const PAIR_PIXELS: usize = 2;

/// Two consecutive packed pixels, `[a0, r0, g0, b0, a1, r1, g1, b1]`.
pub type PixelPair = [u8; BYTES_PER_PIXEL * PAIR_PIXELS];

/// Channel selector; the discriminant is the byte index inside a stored pixel.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[repr(u8)]
pub enum Channel {
    /// Opacity, 0 = transparent, 255 = opaque.
    Alpha = 0,
    /// Red color channel.
    Red = 1,
    /// Green color channel.
    Green = 2,
    /// Blue color channel.
    Blue = 3,
}

impl Channel {
    /// All channels in storage order.
    pub const ALL: [Channel; 4] = [Channel::Alpha, Channel::Red, Channel::Green, Channel::Blue];

    /// Color channels only, in storage order.
    pub const COLORS: [Channel; 3] = [Channel::Red, Channel::Green, Channel::Blue];

    /// Byte offset of this channel inside one pixel.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// One stored pixel, not premultiplied.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Argb8 {
    /// Alpha.
    pub a: u8,
    /// Red.
    pub r: u8,
    /// Green.
    pub g: u8,
    /// Blue.
    pub b: u8,
}

impl Argb8 {
    /// Fully transparent black, the value of a freshly allocated pixel.
    pub const TRANSPARENT: Argb8 = Argb8::new(0, 0, 0, 0);

    /// Build a pixel from its four channels.
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Storage byte order.
    pub fn to_bytes(self) -> [u8; BYTES_PER_PIXEL] {
        [self.a, self.r, self.g, self.b]
    }

    /// Read a pixel from its storage bytes.
    pub fn from_bytes(bytes: [u8; BYTES_PER_PIXEL]) -> Self {
        let [a, r, g, b] = bytes;
        Self { a, r, g, b }
    }

    /// Value of one channel.
    pub fn channel(self, channel: Channel) -> u8 {
        self.to_bytes()[channel.index()]
    }
}

/// Join two pixels into a lane-group input.
pub fn pair_from_pixels(p0: Argb8, p1: Argb8) -> PixelPair {
    let mut out = [0u8; BYTES_PER_PIXEL * PAIR_PIXELS];
    out[..BYTES_PER_PIXEL].copy_from_slice(&p0.to_bytes());
    out[BYTES_PER_PIXEL..].copy_from_slice(&p1.to_bytes());
    out
}

/// Split a lane-group result back into its two pixels.
pub fn pixels_from_pair(pair: &PixelPair) -> (Argb8, Argb8) {
    let [a0, r0, g0, b0, a1, r1, g1, b1] = *pair;
    (Argb8::new(a0, r0, g0, b0), Argb8::new(a1, r1, g1, b1))
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
