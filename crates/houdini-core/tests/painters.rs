// File: crates/houdini-core/tests/painters.rs
// Purpose: Built-in painters rasterized on a small CPU surface.

use houdini_core::paint::{bubble_border, grid, linear_path, names, radar};
use houdini_core::skia::Color;
use houdini_core::{rasterize_layers, PaintHost, PaintLayer, PaintProperties};

const W: i32 = 100;
const H: i32 = 100;

struct Raster {
    px: Vec<u8>,
    stride: usize,
}

impl Raster {
    fn paint(layers: &[PaintLayer]) -> Self {
        let host = PaintHost::with_builtin();
        let (px, w, h, stride) = rasterize_layers(&host, layers, W, H, Color::WHITE).expect("rasterize");
        assert_eq!((w, h), (W as u32, H as u32));
        Self { px, stride }
    }

    fn rgba(&self, x: usize, y: usize) -> [u8; 4] {
        let i = y * self.stride + x * 4;
        [self.px[i], self.px[i + 1], self.px[i + 2], self.px[i + 3]]
    }

    fn is_white(&self, x: usize, y: usize) -> bool {
        self.rgba(x, y)[..3] == [255, 255, 255]
    }

    fn all_white(&self) -> bool {
        self.px.chunks_exact(4).all(|p| p[..3] == [255, 255, 255])
    }
}

fn grid_layer(x: &str, y: &str, color: &str) -> PaintLayer {
    PaintLayer::new(
        names::GRID,
        PaintProperties::new()
            .with(grid::SEGMENTS_X, x)
            .with(grid::SEGMENTS_Y, y)
            .with(grid::COLOR, color),
    )
}

fn path_layer(points: &str, range: &str, color: &str) -> PaintLayer {
    PaintLayer::new(
        names::LINEAR_PATH,
        PaintProperties::new()
            .with(linear_path::POINTS, points)
            .with(linear_path::RANGE, range)
            .with(linear_path::COLOR, color),
    )
}

#[test]
fn grid_lines_at_segment_starts() {
    let r = Raster::paint(&[grid_layer("4", "2", "#000")]);

    let dark_columns: Vec<usize> = (0..W as usize).filter(|&x| !r.is_white(x, 10)).collect();
    assert_eq!(dark_columns, vec![0, 25, 50, 75]);

    let dark_rows: Vec<usize> = (0..H as usize).filter(|&y| !r.is_white(10, y)).collect();
    assert_eq!(dark_rows, vec![0, 50]);

    assert_eq!(r.rgba(25, 90), [0, 0, 0, 255]);
}

#[test]
fn grid_with_zero_segments_draws_nothing() {
    let r = Raster::paint(&[grid_layer("0", "0", "#000")]);
    assert!(r.all_white());
}

#[test]
fn oversized_grid_counts_are_ignored() {
    let r = Raster::paint(&[grid_layer("1e12", "2", "#000")]);
    // no verticals; horizontals still drawn
    assert!((0..W as usize).all(|x| r.is_white(x, 10)));
    assert!(!r.is_white(10, 50));

    assert!(Raster::paint(&[grid_layer("1e12", "1e12", "#000")]).all_white());
}

#[test]
fn linear_path_runs_bottom_left_to_top_right() {
    // two points: value 0 then the full range, each centered in its half
    let r = Raster::paint(&[path_layer(r#"[{"x":0,"y":0},{"x":1,"y":10}]"#, r#"{"x":2,"y":10}"#, "#f00")]);

    let [red, green, _, _] = r.rgba(49, 51);
    assert!(red > 200 && green < 128, "midpoint should be red, got {:?}", r.rgba(49, 51));
    assert!(r.is_white(25, 50));
    assert!(r.is_white(75, 50));
    assert!(r.is_white(5, 5));
}

#[test]
fn unit_range_path_heads_for_top_right() {
    // centerX = 0.5: starts at bottom middle, second point lies past the right edge
    let r = Raster::paint(&[path_layer(r#"[{"x":0,"y":0},{"x":1,"y":1}]"#, r#"{"x":1,"y":1}"#, "#000")]);

    for (x, y) in [(55, 94), (75, 74), (99, 50)] {
        let [red, ..] = r.rgba(x, y);
        assert!(red < 128, "({x}, {y}) should be on the path, got {:?}", r.rgba(x, y));
    }
    assert!(r.is_white(25, 75));
    assert!(r.is_white(75, 25));
}

#[test]
fn malformed_properties_leave_surface_untouched() {
    let r = Raster::paint(&[
        path_layer("not json", r#"{"x":2,"y":10}"#, "#f00"),
        path_layer(r#"[{"x":0,"y":0},{"x":1,"y":10}]"#, r#"{"x":0,"y":10}"#, "#f00"),
        path_layer(r#"[{"x":0,"y":0},{"x":1,"y":10}]"#, "", "#f00"),
        grid_layer("many", "lots", "#000"),
    ]);
    assert!(r.all_white());
}

#[test]
fn unparsable_color_falls_back_to_default() {
    let r = Raster::paint(&[path_layer(r#"[{"x":0,"y":0},{"x":1,"y":10}]"#, r#"{"x":2,"y":10}"#, "not-a-color")]);
    let [red, green, blue, _] = r.rgba(49, 51);
    assert!(red < 128 && green < 128 && blue < 128, "expected default black, got {:?}", r.rgba(49, 51));
}

#[test]
fn bubble_markers_sit_on_path_vertices() {
    let props = PaintProperties::new()
        .with(bubble_border::POINTS, r#"[{"x":0,"y":5}]"#)
        .with(bubble_border::RANGE, r#"{"x":1,"y":10}"#)
        .with(bubble_border::RADIUS, "6")
        .with(bubble_border::COLOR, "#00f")
        .with(bubble_border::BORDER_WIDTH, "0");
    let r = Raster::paint(&[PaintLayer::new(names::BUBBLE_BORDER, props)]);

    // single segment: centered at x = 50, y = 50
    assert_eq!(r.rgba(50, 50), [0, 0, 255, 255]);
    assert!(r.is_white(50, 40));
    assert!(r.is_white(60, 50));
}

#[test]
fn radar_grid_needs_three_axes() {
    let props = |axes: &str| {
        PaintProperties::new()
            .with(radar::AXES, axes)
            .with(radar::RINGS, "2")
            .with(radar::GRID_COLOR, "#000")
    };
    assert!(Raster::paint(&[PaintLayer::new(names::GRID_RADAR, props("2"))]).all_white());

    let r = Raster::paint(&[PaintLayer::new(names::GRID_RADAR, props("4"))]);
    // vertical spoke through the center, corners untouched
    assert!(!r.is_white(50, 30));
    assert!(r.is_white(2, 2));
}

#[test]
fn oversized_radar_counts_are_ignored() {
    let props = |axes: &str, rings: &str| {
        PaintProperties::new()
            .with(radar::AXES, axes)
            .with(radar::RINGS, rings)
            .with(radar::GRID_COLOR, "#000")
    };
    assert!(Raster::paint(&[PaintLayer::new(names::GRID_RADAR, props("1e12", "2"))]).all_white());
    assert!(Raster::paint(&[PaintLayer::new(names::GRID_RADAR, props("5", "1e12"))]).all_white());
}

#[test]
fn radar_path_fills_translucently() {
    let props = PaintProperties::new()
        .with(radar::POINTS, r#"[{"x":0,"y":1},{"x":1,"y":0},{"x":0,"y":-1},{"x":-1,"y":0}]"#)
        .with(radar::PATH_COLOR, "#000");
    let r = Raster::paint(&[PaintLayer::new(names::RADAR_PATH, props)]);

    let [inside, _, _, _] = r.rgba(50, 50);
    assert!(inside < 255 && inside > 128, "fill should be translucent, got {inside}");
    assert!(r.is_white(2, 2));
}
