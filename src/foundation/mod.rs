//! Error taxonomy and pixel/channel primitives shared by every other module.

/// Pixel, pair and channel primitives.
pub mod core;
/// Crate error type.
pub mod error;
