//! Drives the compositor across the foreground footprint.

/// Blend driver, options and stats.
pub mod blend;
