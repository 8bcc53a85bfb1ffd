// File: crates/houdini-core/src/lib.rs
// Summary: Core library entry point; exports the public API for chart scaling, painting and rendering.

pub mod axis;
pub mod chart;
pub mod config;
pub mod date_scale;
pub mod error;
pub mod extent;
pub mod geometry;
pub mod layout;
pub mod mapper;
pub mod paint;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;

pub use chrono;
pub use skia_safe as skia;

pub use axis::Axis;
pub use chart::{rasterize_layers, Chart, RenderOptions};
pub use config::{ChartConfig, ChartData, ChartKind, ScaleSettings, XAxisType};
pub use date_scale::{resolve_date_scale, DateScale, TickInterval};
pub use error::{ChartError, Result};
pub use extent::{flatten_dataset, get_max, get_min};
pub use geometry::{NormalizedPoint, Range, Size};
pub use layout::{chart_layers, ScaleModel};
pub use mapper::{map_dates, map_numeric};
pub use paint::{register_builtin_painters, PaintHost, PaintLayer, PaintProperties, PaintSize, Painter, PainterRegistry};
pub use scale::NiceScale;
pub use series::{DataValue, Series, XValue};
pub use text::TextShaper;
pub use theme::Theme;
