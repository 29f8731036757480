//! Storage codecs.

/// BM bitmap decode/encode and file IO.
pub mod bmp;
/// PNG preview export through the `image` crate.
pub mod preview;
