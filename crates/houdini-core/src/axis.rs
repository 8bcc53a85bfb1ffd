// File: crates/houdini-core/src/axis.rs
// Summary: Axis selector and y-axis tick label formatting.

use serde::{Deserialize, Serialize};

use crate::scale::NiceScale;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    Y,
}

/// Labels for every tick of `scale`, from `niceMinimum` up to `niceMaximum`.
///
/// Precision follows the tick spacing so float noise such as
/// `0.30000000000000004` never reaches the axis.
pub fn tick_labels(scale: &NiceScale) -> Vec<String> {
    let decimals = label_decimals(scale.tick_spacing);
    scale
        .ticks()
        .map(|v| {
            // avoid "-0"
            let v = if v.abs() < scale.tick_spacing * 1e-9 { 0.0 } else { v };
            format!("{:.*}", decimals, v)
        })
        .collect()
}

fn label_decimals(step: f64) -> usize {
    if !step.is_finite() || step <= 0.0 || step >= 1.0 {
        return 0;
    }
    (-step.log10().floor()).max(0.0) as usize
}
