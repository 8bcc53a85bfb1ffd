// File: crates/houdini-core/tests/registry.rs
// Purpose: Painter registration, feature detection and property filtering.

use std::sync::{Arc, Mutex};

use houdini_core::paint::{names, PainterFactory, MAX_SEGMENTS};
use houdini_core::skia;
use houdini_core::{
    register_builtin_painters, ChartError, PaintHost, PaintProperties, PaintSize, Painter, PainterRegistry,
};

/// Records the property names it was handed.
struct Recorder(Arc<Mutex<Vec<String>>>);

impl Painter for Recorder {
    fn input_properties(&self) -> &'static [&'static str] {
        &["--a", "--b"]
    }

    fn paint(&self, _canvas: &skia::Canvas, _size: PaintSize, properties: &PaintProperties) {
        let mut seen = self.0.lock().unwrap();
        for name in ["--a", "--b", "--c"] {
            if properties.get(name).is_some() {
                seen.push(name.to_string());
            }
        }
    }
}

/// A surface without custom paint support.
struct LegacyHost;

impl PainterRegistry for LegacyHost {
    fn supports_custom_paint(&self) -> bool {
        false
    }

    fn register(&mut self, _name: &str, _factory: PainterFactory) -> houdini_core::Result<()> {
        panic!("nothing should be registered on an unsupported host");
    }
}

#[test]
fn builtin_painters_are_registered() {
    let host = PaintHost::with_builtin();
    assert_eq!(
        host.painter_names(),
        vec![names::BUBBLE_BORDER, names::GRID, names::GRID_RADAR, names::LINEAR_PATH, names::RADAR_PATH]
    );
}

#[test]
fn duplicate_name_is_rejected() {
    let mut host = PaintHost::with_builtin();
    let err = register_builtin_painters(&mut host).unwrap_err();
    assert!(matches!(err, ChartError::DuplicatePainter(ref n) if n == names::GRID));
}

#[test]
fn unsupported_host_registers_nothing() {
    let err = register_builtin_painters(&mut LegacyHost).unwrap_err();
    assert!(matches!(err, ChartError::UnsupportedHost));
}

#[test]
fn painter_only_sees_declared_properties() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut host = PaintHost::new();
    let shared = seen.clone();
    let factory: PainterFactory = Box::new(move || Box::new(Recorder(shared.clone())) as Box<dyn Painter>);
    host.register("recorder", factory).unwrap();

    let mut surface = skia::surfaces::raster_n32_premul((8, 8)).unwrap();
    let props = PaintProperties::new().with("--a", "1").with("--c", "3");
    assert!(host.paint("recorder", surface.canvas(), PaintSize::new(8.0, 8.0), &props));

    assert_eq!(*seen.lock().unwrap(), vec!["--a".to_string()]);
}

#[test]
fn unknown_painter_is_skipped() {
    let host = PaintHost::new();
    let mut surface = skia::surfaces::raster_n32_premul((8, 8)).unwrap();
    assert!(!host.paint("nope", surface.canvas(), PaintSize::new(8.0, 8.0), &PaintProperties::new()));
}

#[test]
fn property_accessors_recover_from_bad_values() {
    let props = PaintProperties::new()
        .with("--n", " 4 ")
        .with("--bad", "four")
        .with("--inf", "inf")
        .with("--color", "'#ff0000'");
    assert_eq!(props.number("--n"), Some(4.0));
    assert_eq!(props.number("--bad"), None);
    assert_eq!(props.number("--inf"), None);
    assert_eq!(props.json::<Vec<f64>>("--bad"), None);
    assert_eq!(props.color("--color", "#000"), skia::Color::from_rgb(255, 0, 0));
    assert_eq!(props.color("--missing", "#00f"), skia::Color::from_rgb(0, 0, 255));
}

#[test]
fn counts_outside_bounds_are_rejected() {
    let props = PaintProperties::new().with("--n", "4").with("--huge", "1e12").with("--neg", "-3");
    assert_eq!(props.count("--n", 0, MAX_SEGMENTS), Some(4));
    assert_eq!(props.count("--n", 5, MAX_SEGMENTS), None);
    assert_eq!(props.count("--huge", 0, MAX_SEGMENTS), None);
    assert_eq!(props.count("--neg", 0, MAX_SEGMENTS), None);
}
