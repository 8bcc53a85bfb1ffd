// File: crates/houdini-core/src/types.rs
// Summary: Shared types and constants (surface size, plot insets).

/// Default surface width in pixels.
pub const WIDTH: i32 = 1024;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 640;

/// Margins around the plot area, in pixels; labels and titles live here.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// No margins: painters cover the whole surface.
    pub const fn zero() -> Self { Self::new(0, 0, 0, 0) }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(72, 32, 56, 64)
    }
}
