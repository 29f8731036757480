//! Alpha compositing over two-pixel `f64` lane groups.

/// Channel gather/pack/merge between packed bytes and lanes.
pub mod channels;
/// Two-lane `f64` arithmetic.
pub mod lanes;
/// The "over" blend formula.
pub mod over;
