// File: crates/houdini-core/src/paint/bubble_border.rs
// Summary: Bubble-border painter: a bordered circle marker per data point.

use skia_safe as skia;

use super::linear_path::{decode_points, surface_position};
use super::{PaintProperties, PaintSize, Painter};

pub const POINTS: &str = "--bubble-points";
pub const RANGE: &str = "--bubble-range";
pub const RADIUS: &str = "--bubble-radius";
pub const COLOR: &str = "--bubble-color";
pub const BORDER_COLOR: &str = "--bubble-border-color";
pub const BORDER_WIDTH: &str = "--bubble-border-width";

pub const DEFAULT_RADIUS: f32 = 5.0;
pub const DEFAULT_BORDER_WIDTH: f32 = 2.0;
pub const DEFAULT_COLOR: &str = "#000";
pub const DEFAULT_BORDER_COLOR: &str = "#fff";

/// Markers share the linear path's placement so they sit on its vertices.
#[derive(Default)]
pub struct BubbleBorderPainter;

impl Painter for BubbleBorderPainter {
    fn input_properties(&self) -> &'static [&'static str] {
        &[POINTS, RANGE, RADIUS, COLOR, BORDER_COLOR, BORDER_WIDTH]
    }

    fn paint(&self, canvas: &skia::Canvas, size: PaintSize, properties: &PaintProperties) {
        let Some((points, range)) = decode_points(properties, POINTS, RANGE) else { return };

        let radius = positive_or(properties.number(RADIUS), DEFAULT_RADIUS);
        let border_width = properties
            .number(BORDER_WIDTH)
            .filter(|w| *w >= 0.0)
            .map(|w| w as f32)
            .unwrap_or(DEFAULT_BORDER_WIDTH);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(properties.color(COLOR, DEFAULT_COLOR));

        let mut border = skia::Paint::default();
        border.set_anti_alias(true);
        border.set_style(skia::paint::Style::Stroke);
        border.set_stroke_width(border_width);
        border.set_color(properties.color(BORDER_COLOR, DEFAULT_BORDER_COLOR));

        for p in &points {
            let center = surface_position(p, range, size);
            canvas.draw_circle(center, radius, &fill);
            if border_width > 0.0 {
                canvas.draw_circle(center, radius, &border);
            }
        }
    }
}

fn positive_or(value: Option<f64>, fallback: f32) -> f32 {
    value.filter(|v| *v > 0.0).map(|v| v as f32).unwrap_or(fallback)
}
