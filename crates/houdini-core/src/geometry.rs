// File: crates/houdini-core/src/geometry.rs
// Summary: Lightweight geometry types shared by the mapper, the painters and the layout.

use serde::{Deserialize, Serialize};

/// Point in drawing-space units (pixels, percentages or data-space units).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct NormalizedPoint {
    pub x: f64,
    pub y: f64,
}

impl NormalizedPoint {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Target size handed to the coordinate mapper.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub x: f64,
    pub y: f64,
}

impl Size {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Data-space units covering one full axis; the `--path-range` wire value.
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Range {
    pub x: f64,
    pub y: f64,
}

/// Range plus the zero-baseline offset of the value axis.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct MapRange {
    pub x: f64,
    pub y: f64,
    pub zero_y: f64,
}

impl MapRange {
    pub const fn new(x: f64, y: f64, zero_y: f64) -> Self { Self { x, y, zero_y } }
}

impl From<MapRange> for Range {
    fn from(r: MapRange) -> Self { Range { x: r.x, y: r.y } }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }
}
