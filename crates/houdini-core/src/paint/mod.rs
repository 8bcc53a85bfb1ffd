// File: crates/houdini-core/src/paint/mod.rs
// Summary: Painter contract, paint-time property wire format, and the host registry.
// Notes:
// - A painter sees only the properties it declares. Structured values travel as
//   JSON strings and colors as CSS strings; decoding failures fall back to
//   defaults inside the painter instead of aborting the paint.

pub mod bubble_border;
pub mod color;
pub mod grid;
pub mod linear_path;
pub mod radar;

use std::collections::{BTreeMap, HashMap};

use serde::de::DeserializeOwned;
use serde::Serialize;
use skia_safe as skia;

use crate::error::{ChartError, Result};

pub use bubble_border::BubbleBorderPainter;
pub use color::parse_css_color;
pub use grid::GridPainter;
pub use linear_path::LinearPathPainter;
pub use radar::{RadarGridPainter, RadarPathPainter};

/// Surface size handed to a painter, in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PaintSize {
    pub width: f32,
    pub height: f32,
}

impl PaintSize {
    pub const fn new(width: f32, height: f32) -> Self { Self { width, height } }
}

/// Named custom property values for one paint call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PaintProperties {
    values: BTreeMap<String, String>,
}

impl PaintProperties {
    pub fn new() -> Self { Self::default() }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), value.into());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Store `value` JSON-encoded.
    pub fn set_json<T: Serialize + ?Sized>(&mut self, name: impl Into<String>, value: &T) -> Result<&mut Self> {
        let encoded = serde_json::to_string(value)?;
        Ok(self.set(name, encoded))
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Decode a JSON-encoded property; malformed or absent values give `None`.
    pub fn json<T: DeserializeOwned>(&self, name: &str) -> Option<T> {
        let raw = self.get(name)?;
        match serde_json::from_str(raw.trim()) {
            Ok(v) => Some(v),
            Err(e) => {
                log::debug!("ignoring malformed `{name}`: {e}");
                None
            }
        }
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        let raw = self.get(name)?.trim();
        match raw.parse::<f64>() {
            Ok(v) if v.is_finite() => Some(v),
            _ => {
                log::debug!("ignoring non-numeric `{name}`: {raw:?}");
                None
            }
        }
    }

    /// Whole count in `[min, max]`; anything outside is treated as malformed.
    pub fn count(&self, name: &str, min: usize, max: usize) -> Option<usize> {
        let n = self.number(name)?.round();
        if n < min as f64 || n > max as f64 {
            log::debug!("ignoring out-of-range `{name}`: {n} not in [{min}, {max}]");
            return None;
        }
        Some(n as usize)
    }

    /// CSS color of `name`, or `fallback` when absent or unparsable.
    pub fn color(&self, name: &str, fallback: &str) -> skia::Color {
        color::css_color_or(self.get(name), fallback)
    }

    /// Copy restricted to `names`.
    pub fn filtered(&self, names: &[&str]) -> Self {
        let values = self
            .values
            .iter()
            .filter(|(k, _)| names.contains(&k.as_str()))
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        Self { values }
    }

    pub fn len(&self) -> usize { self.values.len() }
    pub fn is_empty(&self) -> bool { self.values.is_empty() }
}

/// Upper bound for any line, axis or ring count read from paint properties.
pub const MAX_SEGMENTS: usize = 4096;

/// Stateless rasterization routine invoked once per paint.
pub trait Painter: Send + Sync {
    /// Custom properties this painter reads; nothing else is passed in.
    fn input_properties(&self) -> &'static [&'static str];
    fn paint(&self, canvas: &skia::Canvas, size: PaintSize, properties: &PaintProperties);
}

pub type PainterFactory = Box<dyn Fn() -> Box<dyn Painter> + Send + Sync>;

/// Factory producing a fresh default `P` per paint.
pub fn factory_of<P: Painter + Default + 'static>() -> PainterFactory {
    Box::new(|| Box::new(P::default()) as Box<dyn Painter>)
}

/// Extension point of a host rendering surface that accepts custom painters.
pub trait PainterRegistry {
    /// Feature detection: whether the host can run custom painters at all.
    fn supports_custom_paint(&self) -> bool { true }
    fn register(&mut self, name: &str, factory: PainterFactory) -> Result<()>;
}

/// Painter names as referenced by paint layers.
pub mod names {
    pub const GRID: &str = "grid";
    pub const LINEAR_PATH: &str = "linearPath";
    pub const BUBBLE_BORDER: &str = "bubbleBorder";
    pub const GRID_RADAR: &str = "gridRadar";
    pub const RADAR_PATH: &str = "radarPath";
}

/// Register every built-in painter with `registry`.
pub fn register_builtin_painters(registry: &mut dyn PainterRegistry) -> Result<()> {
    if !registry.supports_custom_paint() {
        return Err(ChartError::UnsupportedHost);
    }
    registry.register(names::GRID, factory_of::<GridPainter>())?;
    registry.register(names::LINEAR_PATH, factory_of::<LinearPathPainter>())?;
    registry.register(names::BUBBLE_BORDER, factory_of::<BubbleBorderPainter>())?;
    registry.register(names::GRID_RADAR, factory_of::<RadarGridPainter>())?;
    registry.register(names::RADAR_PATH, factory_of::<RadarPathPainter>())?;
    Ok(())
}

/// One painter invocation: which painter, with which property values.
#[derive(Clone, Debug, PartialEq)]
pub struct PaintLayer {
    pub painter: &'static str,
    pub properties: PaintProperties,
}

impl PaintLayer {
    pub fn new(painter: &'static str, properties: PaintProperties) -> Self {
        Self { painter, properties }
    }
}

/// In-process host surface: owns the registered painter factories and runs paints.
#[derive(Default)]
pub struct PaintHost {
    factories: HashMap<String, PainterFactory>,
}

impl PaintHost {
    pub fn new() -> Self { Self::default() }

    /// Host with all built-in painters registered.
    pub fn with_builtin() -> Self {
        let mut host = Self::new();
        // a fresh host always supports custom paint and has no name clashes
        if let Err(e) = register_builtin_painters(&mut host) {
            log::warn!("built-in painter registration failed: {e}");
        }
        host
    }

    pub fn is_registered(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn painter_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Run painter `name` on `canvas`. Returns false when no such painter exists.
    pub fn paint(&self, name: &str, canvas: &skia::Canvas, size: PaintSize, properties: &PaintProperties) -> bool {
        let Some(factory) = self.factories.get(name) else {
            log::warn!("no painter registered as `{name}`");
            return false;
        };
        let painter = factory();
        let declared = properties.filtered(painter.input_properties());
        painter.paint(canvas, size, &declared);
        true
    }

    /// Run `layer` inside `rect`, translating so the painter draws from (0, 0).
    pub fn paint_layer(&self, canvas: &skia::Canvas, rect: skia::Rect, layer: &PaintLayer) -> bool {
        canvas.save();
        canvas.translate((rect.left, rect.top));
        canvas.clip_rect(skia::Rect::from_wh(rect.width(), rect.height()), None, Some(true));
        let painted = self.paint(layer.painter, canvas, PaintSize::new(rect.width(), rect.height()), &layer.properties);
        canvas.restore();
        painted
    }
}

impl PainterRegistry for PaintHost {
    fn register(&mut self, name: &str, factory: PainterFactory) -> Result<()> {
        if self.factories.contains_key(name) {
            return Err(ChartError::DuplicatePainter(name.to_string()));
        }
        self.factories.insert(name.to_string(), factory);
        Ok(())
    }
}
