// File: crates/houdini-core/src/scale.rs
// Summary: "Nice numbers" axis scale: rounded bounds and tick spacing for the value axis.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// Number of tick intervals the calculator aims for.
pub const DESIRED_TICKS: f64 = 10.0;

/// Rounded axis bounds plus the distance between adjacent ticks.
///
/// Contract: `nice_minimum <= raw min`, `nice_maximum >= raw max`,
/// `tick_spacing > 0`, and the span is a whole number of tick spacings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NiceScale {
    pub nice_minimum: f64,
    pub nice_maximum: f64,
    pub tick_spacing: f64,
}

impl NiceScale {
    /// Compute the nice scale covering `[min, max]`.
    ///
    /// A zero-span input is widened by 1 on each side first, or by a few ulps
    /// of `min` when 1 is below its precision.
    pub fn new(min: f64, max: f64) -> Result<Self> {
        if !min.is_finite() || !max.is_finite() || min > max {
            return Err(ChartError::InvalidRange { min, max });
        }
        let (min, max) = if min == max {
            let pad = (min.abs() * f64::EPSILON * 16.0).max(1.0);
            (min - pad, max + pad)
        } else {
            (min, max)
        };

        let tick_spacing = nice_step((max - min) / DESIRED_TICKS);
        if tick_spacing <= 0.0 || !tick_spacing.is_finite() {
            return Err(ChartError::InvalidRange { min, max });
        }

        let mut nice_minimum = (min / tick_spacing).floor() * tick_spacing;
        let mut nice_maximum = (max / tick_spacing).ceil() * tick_spacing;
        // floor/ceil of a rounded quotient can land one step inside the raw range
        if nice_minimum > min { nice_minimum -= tick_spacing; }
        if nice_maximum < max { nice_maximum += tick_spacing; }

        Ok(Self { nice_minimum, nice_maximum, tick_spacing })
    }

    #[inline]
    pub fn span(&self) -> f64 { self.nice_maximum - self.nice_minimum }

    /// Number of tick intervals between the bounds.
    pub fn segments(&self) -> usize {
        (self.span() / self.tick_spacing).round().max(1.0) as usize
    }

    /// Normalized position of `nice_minimum` relative to the span (the zeroY baseline).
    pub fn zero_offset(&self) -> f64 {
        self.nice_minimum / self.span()
    }

    /// Tick values from `nice_minimum` to `nice_maximum` inclusive.
    pub fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        // by index: repeated addition drifts
        (0..=self.segments()).map(move |i| self.nice_minimum + self.tick_spacing * i as f64)
    }
}

/// Round `raw_step` up to the nearest value in {1, 2, 5, 10} x 10^k.
pub fn nice_step(raw_step: f64) -> f64 {
    let exponent = raw_step.log10().floor();
    let magnitude = 10f64.powf(exponent);
    let fraction = raw_step / magnitude;

    let nice = [1.0, 2.0, 5.0]
        .into_iter()
        .find(|&candidate| fraction <= candidate)
        .unwrap_or(10.0);
    nice * magnitude
}
