// File: crates/houdini-core/src/paint/grid.rs
// Summary: Grid painter: evenly spaced vertical and horizontal gridlines.

use skia_safe as skia;

use super::{PaintProperties, PaintSize, Painter, MAX_SEGMENTS};

pub const SEGMENTS_X: &str = "--grid-segmentsX";
pub const SEGMENTS_Y: &str = "--grid-segmentsY";
pub const COLOR: &str = "--grid-color";
pub const DEFAULT_COLOR: &str = "#ccc";

/// Draws `segmentsX` vertical lines at `x = i * w / segmentsX` and `segmentsY`
/// horizontal lines at `y = i * h / segmentsY`, `i` in `0..n`.
#[derive(Default)]
pub struct GridPainter;

impl Painter for GridPainter {
    fn input_properties(&self) -> &'static [&'static str] {
        &[SEGMENTS_X, SEGMENTS_Y, COLOR]
    }

    fn paint(&self, canvas: &skia::Canvas, size: PaintSize, properties: &PaintProperties) {
        let mut paint = skia::Paint::default();
        paint.set_color(properties.color(COLOR, DEFAULT_COLOR));
        paint.set_anti_alias(false);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);

        // verticals
        for x in line_offsets(size.width, segments(properties, SEGMENTS_X)) {
            canvas.draw_line((x, 0.0), (x, size.height), &paint);
        }
        // horizontals
        for y in line_offsets(size.height, segments(properties, SEGMENTS_Y)) {
            canvas.draw_line((0.0, y), (size.width, y), &paint);
        }
    }
}

fn segments(properties: &PaintProperties, name: &str) -> usize {
    properties.count(name, 0, MAX_SEGMENTS).unwrap_or(0)
}

/// Pixel-centered offsets so each 1px line covers exactly one row/column.
pub fn line_offsets(length: f32, segments: usize) -> impl Iterator<Item = f32> {
    let step = if segments == 0 { 0.0 } else { length / segments as f32 };
    (0..segments).map(move |i| (i as f32 * step).floor() + 0.5)
}
