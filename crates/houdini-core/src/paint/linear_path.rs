// File: crates/houdini-core/src/paint/linear_path.rs
// Summary: Linear-path painter: polyline through serialized points.

use skia_safe as skia;

use super::{PaintProperties, PaintSize, Painter};
use crate::geometry::{NormalizedPoint, Range};

pub const POINTS: &str = "--path-points";
pub const RANGE: &str = "--path-range";
pub const COLOR: &str = "--path-color";
pub const DEFAULT_COLOR: &str = "#000";
pub const STROKE_WIDTH: f32 = 2.0;

/// Strokes the points of `--path-points` in order.
///
/// Positions: `x = w * (p.x / range.x + centerX)`, `y = h - h * (p.y / range.y)`,
/// where `centerX = 100 / range.x / 2 / 100` puts each point at the middle of its segment.
#[derive(Default)]
pub struct LinearPathPainter;

impl Painter for LinearPathPainter {
    fn input_properties(&self) -> &'static [&'static str] {
        &[POINTS, RANGE, COLOR]
    }

    fn paint(&self, canvas: &skia::Canvas, size: PaintSize, properties: &PaintProperties) {
        let Some((points, range)) = decode_points(properties, POINTS, RANGE) else { return };
        let Some((first, rest)) = points.split_first() else { return };

        let mut path = skia::Path::new();
        path.move_to(surface_position(first, range, size));
        for p in rest {
            path.line_to(surface_position(p, range, size));
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(STROKE_WIDTH);
        stroke.set_color(properties.color(COLOR, DEFAULT_COLOR));

        canvas.draw_path(&path, &stroke);
    }
}

/// Point list plus range, or `None` if either is missing, malformed or the range is degenerate.
pub(crate) fn decode_points(
    properties: &PaintProperties,
    points_name: &str,
    range_name: &str,
) -> Option<(Vec<NormalizedPoint>, Range)> {
    let points: Vec<NormalizedPoint> = properties.json(points_name)?;
    let range: Range = properties.json(range_name)?;
    let usable = |v: f64| v.is_finite() && v > 0.0;
    if !usable(range.x) || !usable(range.y) {
        log::debug!("ignoring degenerate `{range_name}`: {range:?}");
        return None;
    }
    Some((points, range))
}

/// Pixel position of a data-space point on a surface of `size`, y flipped.
pub fn surface_position(p: &NormalizedPoint, range: Range, size: PaintSize) -> (f32, f32) {
    let width = size.width as f64;
    let height = size.height as f64;
    let center_x = 100.0 / range.x / 2.0 / 100.0;
    let x = width * (p.x / range.x + center_x);
    let y = height - height * (p.y / range.y);
    (x as f32, y as f32)
}
