// File: crates/houdini-core/src/series.rs
// Summary: Series model: named, optionally colored, ordered sequences of {x, y} points.
// Notes:
// - `x` is either a category index or a `yyyy LLL dd` date string; the same
//   series type feeds both the numeric and the date-indexed coordinate mapper.

use serde::{Deserialize, Serialize};

use crate::axis::Axis;

/// X coordinate of a data point.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum XValue {
    Index(f64),
    Date(String),
}

impl XValue {
    pub fn as_index(&self) -> Option<f64> {
        match self {
            XValue::Index(v) => Some(*v),
            XValue::Date(_) => None,
        }
    }

    pub fn as_date(&self) -> Option<&str> {
        match self {
            XValue::Index(_) => None,
            XValue::Date(s) => Some(s),
        }
    }
}

impl From<f64> for XValue {
    fn from(v: f64) -> Self { XValue::Index(v) }
}

impl From<&str> for XValue {
    fn from(s: &str) -> Self { XValue::Date(s.to_string()) }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataValue {
    pub x: XValue,
    pub y: f64,
}

impl DataValue {
    pub fn new(x: impl Into<XValue>, y: f64) -> Self {
        Self { x: x.into(), y }
    }

    /// Numeric value on `axis`; date-indexed x values have none.
    pub fn axis_value(&self, axis: Axis) -> Option<f64> {
        match axis {
            Axis::X => self.x.as_index(),
            Axis::Y => Some(self.y),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub values: Vec<DataValue>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), color: None, values: Vec::new() }
    }

    /// Series whose x values are the positions `0..n` of `ys`.
    pub fn from_values(name: impl Into<String>, ys: &[f64]) -> Self {
        let values = ys
            .iter()
            .enumerate()
            .map(|(i, &y)| DataValue::new(i as f64, y))
            .collect();
        Self { name: name.into(), color: None, values }
    }

    /// Series indexed by `yyyy LLL dd` dates.
    pub fn from_dated(name: impl Into<String>, points: &[(&str, f64)]) -> Self {
        let values = points.iter().map(|&(d, y)| DataValue::new(d, y)).collect();
        Self { name: name.into(), color: None, values }
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn ys(&self) -> Vec<f64> {
        self.values.iter().map(|v| v.y).collect()
    }

    /// Date labels of the points, in order; `None` if any x is not a date.
    pub fn dates(&self) -> Option<Vec<&str>> {
        self.values.iter().map(|v| v.x.as_date()).collect()
    }
}
