// File: crates/houdini-core/src/mapper.rs
// Summary: Coordinate mapper: raw values to normalized drawing-space points.
// Notes:
// - Both variants are pure: one output point per input, input order kept,
//   nothing cached between calls.

use chrono::NaiveDate;

use crate::date_scale::{days_between, parse_date};
use crate::error::{ChartError, Result};
use crate::geometry::{MapRange, NormalizedPoint, Size};

/// Map values positioned by index: `x = size.x * i / range.x`,
/// `y = size.y * (v / range.y - range.zero_y)`.
pub fn map_numeric(values: &[f64], size: Size, range: MapRange) -> Vec<NormalizedPoint> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| NormalizedPoint::new(size.x * (i as f64 / range.x), map_y(v, size, range)))
        .collect()
}

/// Map date-indexed values. `x` is the day offset from `origin` (the date
/// scale's `first_month_start`) over `range.x` (the date scale's `max_value`).
///
/// `dates` and `values` are paired by position; both must have the same length.
pub fn map_dates(
    values: &[f64],
    dates: &[&str],
    origin: NaiveDate,
    size: Size,
    range: MapRange,
) -> Result<Vec<NormalizedPoint>> {
    if values.len() != dates.len() {
        return Err(ChartError::LengthMismatch { dates: dates.len(), values: values.len() });
    }

    values
        .iter()
        .zip(dates)
        .map(|(&v, date)| {
            let days = days_between(parse_date(date)?, origin) as f64;
            Ok(NormalizedPoint::new(size.x * (days / range.x), map_y(v, size, range)))
        })
        .collect()
}

#[inline]
fn map_y(v: f64, size: Size, range: MapRange) -> f64 {
    size.y * (v / range.y - range.zero_y)
}
