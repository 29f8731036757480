//! In-memory 32-bit image container and its fixed-layout header.

/// Header plus owned pixel buffer.
pub mod container;
/// 70-byte BM header and its byte-exact (de)serializer.
pub mod header;
