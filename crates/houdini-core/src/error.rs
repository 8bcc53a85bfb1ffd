// File: crates/houdini-core/src/error.rs
// Summary: Error type shared by the scale engine, the paint host and the render pipeline.

use crate::date_scale::TickInterval;

/// Errors surfaced synchronously to the caller of the scale/coordinate engine.
///
/// Painter-side decoding problems never show up here: painters recover locally
/// and fall back to defaults.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    /// No value exists on the requested axis.
    #[error("dataset is empty: at least one point is required")]
    EmptyDataset,

    /// Non-finite bounds or `min > max`.
    #[error("invalid range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    /// `scale.auto` is false but a bound is absent.
    #[error("scale.auto is false but `{0}` is missing")]
    MissingScaleBound(&'static str),

    /// Date label that does not match `yyyy LLL dd`.
    #[error("invalid date '{value}': expected `yyyy LLL dd`")]
    InvalidDate { value: String },

    /// Date labels and values are paired by position.
    #[error("{dates} date labels for {values} values")]
    LengthMismatch { dates: usize, values: usize },

    /// Granularity bucket without a label generator.
    #[error("date scale for `{0}` granularity is not implemented")]
    UnresolvedDateScale(TickInterval),

    #[error("painter `{0}` is already registered")]
    DuplicatePainter(String),

    /// Registry reports no custom paint support.
    #[error("host rendering surface does not support custom paint")]
    UnsupportedHost,

    #[error("chart descriptor: {0}")]
    Config(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to create raster surface {width}x{height}")]
    Surface { width: i32, height: i32 },

    #[error("encode {0} failed")]
    Encode(&'static str),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ChartError>;
