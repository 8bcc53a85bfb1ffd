// File: crates/houdini-core/src/extent.rs
// Summary: Global minimum/maximum along one axis across every series.

use crate::axis::Axis;
use crate::error::{ChartError, Result};
use crate::series::Series;

/// Every numeric value on `axis`, series by series, in point order.
pub fn flatten_dataset<'a, I>(datasets: I, axis: Axis) -> Vec<f64>
where
    I: IntoIterator<Item = &'a Series>,
{
    datasets
        .into_iter()
        .flat_map(|s| s.values.iter().filter_map(move |v| v.axis_value(axis)))
        .collect()
}

/// Smallest value on `axis`. Fails with [`ChartError::EmptyDataset`] when there is none.
pub fn get_min(datasets: &[Series], axis: Axis) -> Result<f64> {
    fold_extent(datasets, axis, f64::min)
}

/// Largest value on `axis`. Fails with [`ChartError::EmptyDataset`] when there is none.
pub fn get_max(datasets: &[Series], axis: Axis) -> Result<f64> {
    fold_extent(datasets, axis, f64::max)
}

fn fold_extent(datasets: &[Series], axis: Axis, pick: fn(f64, f64) -> f64) -> Result<f64> {
    flatten_dataset(datasets, axis)
        .into_iter()
        .reduce(pick)
        .ok_or(ChartError::EmptyDataset)
}
