// File: crates/houdini-core/src/paint/radar.rs
// Summary: Radar grid (rings + spokes) and radar path (closed polygon) painters.
// Notes:
// - Radar points live in unit-circle space: origin at the surface center, y up,
//   radius 1 on the outer ring. The pixel radius is RADIUS_FRACTION of the
//   shorter surface side.

use std::f64::consts::{FRAC_PI_2, TAU};

use skia_safe as skia;

use super::{PaintProperties, PaintSize, Painter, MAX_SEGMENTS};
use crate::geometry::NormalizedPoint;

pub const AXES: &str = "--radar-axes";
pub const RINGS: &str = "--radar-rings";
pub const GRID_COLOR: &str = "--grid-color";
pub const POINTS: &str = "--radar-points";
pub const PATH_COLOR: &str = "--path-color";

pub const DEFAULT_GRID_COLOR: &str = "#ccc";
pub const DEFAULT_PATH_COLOR: &str = "#000";
pub const RADIUS_FRACTION: f32 = 0.45;
/// Alpha applied to the polygon fill.
pub const FILL_ALPHA: u8 = 64;

/// Unit-circle vertex for axis `index` of `axes` at radius `r`; axis 0 points up, clockwise.
pub fn radar_vertex(index: usize, axes: usize, r: f64) -> NormalizedPoint {
    let angle = FRAC_PI_2 - TAU * index as f64 / axes.max(1) as f64;
    NormalizedPoint::new(r * angle.cos(), r * angle.sin())
}

fn to_surface(p: &NormalizedPoint, size: PaintSize) -> (f32, f32) {
    let radius = size.width.min(size.height) * RADIUS_FRACTION;
    let cx = size.width * 0.5;
    let cy = size.height * 0.5;
    (cx + p.x as f32 * radius, cy - p.y as f32 * radius)
}

fn closed_path<'a>(points: impl IntoIterator<Item = &'a NormalizedPoint>, size: PaintSize) -> Option<skia::Path> {
    let mut iter = points.into_iter();
    let first = iter.next()?;
    let mut path = skia::Path::new();
    path.move_to(to_surface(first, size));
    for p in iter {
        path.line_to(to_surface(p, size));
    }
    path.close();
    Some(path)
}

/// Concentric ring polygons (one per tick interval) and one spoke per axis.
#[derive(Default)]
pub struct RadarGridPainter;

impl Painter for RadarGridPainter {
    fn input_properties(&self) -> &'static [&'static str] {
        &[AXES, RINGS, GRID_COLOR]
    }

    fn paint(&self, canvas: &skia::Canvas, size: PaintSize, properties: &PaintProperties) {
        let Some(axes) = properties.count(AXES, 3, MAX_SEGMENTS) else { return };
        let rings = match properties.get(RINGS) {
            None => 1,
            Some(_) => match properties.count(RINGS, 1, MAX_SEGMENTS) {
                Some(rings) => rings,
                None => return,
            },
        };

        let mut paint = skia::Paint::default();
        paint.set_color(properties.color(GRID_COLOR, DEFAULT_GRID_COLOR));
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(1.0);

        for ring in 1..=rings {
            let r = ring as f64 / rings as f64;
            let vertices: Vec<NormalizedPoint> = (0..axes).map(|i| radar_vertex(i, axes, r)).collect();
            if let Some(path) = closed_path(&vertices, size) {
                canvas.draw_path(&path, &paint);
            }
        }

        let center = to_surface(&NormalizedPoint::default(), size);
        for i in 0..axes {
            canvas.draw_line(center, to_surface(&radar_vertex(i, axes, 1.0), size), &paint);
        }
    }
}

/// Closed, translucently filled polygon through `--radar-points`.
#[derive(Default)]
pub struct RadarPathPainter;

impl Painter for RadarPathPainter {
    fn input_properties(&self) -> &'static [&'static str] {
        &[POINTS, PATH_COLOR]
    }

    fn paint(&self, canvas: &skia::Canvas, size: PaintSize, properties: &PaintProperties) {
        let Some(points) = properties.json::<Vec<NormalizedPoint>>(POINTS) else { return };
        let Some(path) = closed_path(&points, size) else { return };
        let color = properties.color(PATH_COLOR, DEFAULT_PATH_COLOR);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color.with_a(FILL_ALPHA));
        canvas.draw_path(&path, &fill);

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(2.0);
        stroke.set_color(color);
        canvas.draw_path(&path, &stroke);
    }
}
