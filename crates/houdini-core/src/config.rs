// File: crates/houdini-core/src/config.rs
// Summary: Chart descriptor (JSON): chart kind, titles, options and the data block.

use std::path::Path;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChartError, Result};
use crate::series::Series;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Line,
    Radar,
}

impl<'de> Deserialize<'de> for ChartKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        match raw.to_ascii_lowercase().as_str() {
            "line" => Ok(ChartKind::Line),
            "radar" => Ok(ChartKind::Radar),
            other => Err(serde::de::Error::unknown_variant(other, &["line", "radar"])),
        }
    }
}

/// `{auto, min?, max?}`; when `auto` is false both bounds are required.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScaleSettings {
    pub auto: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl ScaleSettings {
    pub const fn auto() -> Self { Self { auto: true, min: None, max: None } }

    pub const fn fixed(min: f64, max: f64) -> Self { Self { auto: false, min: Some(min), max: Some(max) } }

    /// Manual bounds; errors if either is missing.
    pub fn bounds(&self) -> Result<(f64, f64)> {
        let min = self.min.ok_or(ChartError::MissingScaleBound("min"))?;
        let max = self.max.ok_or(ChartError::MissingScaleBound("max"))?;
        Ok((min, max))
    }
}

impl Default for ScaleSettings {
    fn default() -> Self { Self::auto() }
}

/// How x values are interpreted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum XAxisType {
    /// Points are positioned by index over the label count.
    #[default]
    Category,
    /// `x` holds `yyyy LLL dd` dates; labels come from the date scale.
    Date,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartData {
    #[serde(default)]
    pub scale: ScaleSettings,
    #[serde(default)]
    pub datasets: Vec<Series>,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub x_type: XAxisType,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleAxis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title_axis: Option<TitleAxis>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grid_color: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfig {
    pub chart_type: ChartKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<ChartOptions>,
    pub data: ChartData,
}

impl ChartConfig {
    pub fn new(chart_type: ChartKind, data: ChartData) -> Self {
        Self { chart_type, title: None, options: None, data }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn grid_color(&self) -> Option<&str> {
        self.options.as_ref().and_then(|o| o.grid_color.as_deref())
    }

    pub fn axis_title(&self, axis: crate::axis::Axis) -> Option<&str> {
        let titles = self.options.as_ref()?.title_axis.as_ref()?;
        match axis {
            crate::axis::Axis::X => titles.x.as_deref(),
            crate::axis::Axis::Y => titles.y.as_deref(),
        }
    }
}
