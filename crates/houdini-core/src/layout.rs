// File: crates/houdini-core/src/layout.rs
// Summary: Per-render scale model and the chart-kind strategies that turn it into paint layers.
// Notes:
// - The model is rebuilt on every render; strategies share one nice scale and
//   one coordinate mapper and differ only in the layers they emit.

use crate::axis::Axis;
use crate::config::{ChartConfig, ChartData, ChartKind, XAxisType};
use crate::date_scale::{resolve_date_scale, DateScale};
use crate::error::{ChartError, Result};
use crate::extent::{get_max, get_min};
use crate::geometry::{MapRange, NormalizedPoint, Range, Size};
use crate::mapper::{map_dates, map_numeric};
use crate::paint::{bubble_border, grid, linear_path, names, radar, PaintLayer, PaintProperties};
use crate::scale::NiceScale;
use crate::series::Series;
use crate::theme::Theme;

/// What the x axis spans.
#[derive(Clone, Debug, PartialEq)]
pub enum XDomain {
    Categories(Vec<String>),
    Dates(DateScale),
}

impl XDomain {
    pub fn labels(&self) -> &[String] {
        match self {
            XDomain::Categories(labels) => labels,
            XDomain::Dates(scale) => &scale.labels,
        }
    }
}

/// Everything derived from the data before painting: nice scale, range, segments.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaleModel {
    pub nice: NiceScale,
    pub x_domain: XDomain,
    pub range: MapRange,
    pub segments_x: usize,
    pub segments_y: usize,
}

impl ScaleModel {
    pub fn build(data: &ChartData) -> Result<Self> {
        let (min, max) = if data.scale.auto {
            (get_min(&data.datasets, Axis::Y)?, get_max(&data.datasets, Axis::Y)?)
        } else {
            data.scale.bounds()?
        };
        let nice = NiceScale::new(min, max)?;

        let (x_domain, range_x) = match data.x_type {
            XAxisType::Category => {
                let count = category_count(data);
                if count == 0 {
                    return Err(ChartError::EmptyDataset);
                }
                // unlabeled trailing positions are numbered from 1
                let mut labels = data.labels.clone();
                let have = labels.len();
                labels.extend((have..count).map(|i| (i + 1).to_string()));
                (XDomain::Categories(labels), count as f64)
            }
            XAxisType::Date => {
                let scale = resolve_date_scale(&date_labels(data)?)?;
                let max_value = scale.max_value;
                (XDomain::Dates(scale), max_value)
            }
        };

        let segments_x = x_domain.labels().len();
        Ok(Self {
            range: MapRange::new(range_x, nice.span(), nice.zero_offset()),
            segments_x,
            segments_y: nice.segments(),
            nice,
            x_domain,
        })
    }

    /// Points of `series` in data-space units offset by `nice_minimum`, the
    /// shape `--path-points` expects.
    pub fn data_space_points(&self, series: &Series) -> Result<Vec<NormalizedPoint>> {
        let size = Size::new(self.range.x, self.range.y);
        let ys = series.ys();
        match &self.x_domain {
            XDomain::Categories(_) => Ok(map_numeric(&ys, size, self.range)),
            XDomain::Dates(scale) => {
                let dates = series.dates().ok_or_else(|| ChartError::InvalidDate {
                    value: format!("non-date x in series `{}`", series.name),
                })?;
                // every series shares the scale's origin, not its own first date
                map_dates(&ys, &dates, scale.first_month_start, size, self.range)
            }
        }
    }

    pub fn wire_range(&self) -> Range {
        self.range.into()
    }
}

fn category_count(data: &ChartData) -> usize {
    let longest = data.datasets.iter().map(|s| s.values.len()).max().unwrap_or(0);
    data.labels.len().max(longest)
}

/// Date labels: the explicit labels, else the x values of the first series.
fn date_labels(data: &ChartData) -> Result<Vec<&str>> {
    if !data.labels.is_empty() {
        return Ok(data.labels.iter().map(String::as_str).collect());
    }
    let first = data.datasets.first().ok_or(ChartError::EmptyDataset)?;
    first.dates().ok_or_else(|| ChartError::InvalidDate {
        value: format!("non-date x in series `{}`", first.name),
    })
}

/// Layer styling shared by every strategy.
#[derive(Clone, Copy, Debug)]
pub struct LayerStyle<'a> {
    pub theme: &'a Theme,
    pub grid_color: &'a str,
    pub draw_markers: bool,
}

/// Chart-kind specific rendering over the shared scale model.
pub trait ChartStrategy {
    fn layers(&self, model: &ScaleModel, data: &ChartData, style: &LayerStyle<'_>) -> Result<Vec<PaintLayer>>;
}

pub fn strategy_for(kind: ChartKind) -> &'static dyn ChartStrategy {
    match kind {
        ChartKind::Line => &LineStrategy,
        ChartKind::Radar => &RadarStrategy,
    }
}

/// Build the paint layers for `config`.
pub fn chart_layers(config: &ChartConfig, theme: &Theme, draw_markers: bool) -> Result<(ScaleModel, Vec<PaintLayer>)> {
    let model = ScaleModel::build(&config.data)?;
    let style = LayerStyle {
        theme,
        grid_color: config.grid_color().unwrap_or(theme.grid),
        draw_markers,
    };
    let layers = strategy_for(config.chart_type).layers(&model, &config.data, &style)?;
    log::debug!("{:?} chart: {} paint layers", config.chart_type, layers.len());
    Ok((model, layers))
}

fn series_color<'a>(series: &'a Series, idx: usize, theme: &Theme) -> &'a str {
    series.color.as_deref().unwrap_or_else(|| theme.series_color(idx))
}

/// Grid, then one path and one marker layer per series.
pub struct LineStrategy;

impl ChartStrategy for LineStrategy {
    fn layers(&self, model: &ScaleModel, data: &ChartData, style: &LayerStyle<'_>) -> Result<Vec<PaintLayer>> {
        let mut layers = Vec::with_capacity(1 + data.datasets.len() * 2);
        layers.push(PaintLayer::new(
            names::GRID,
            PaintProperties::new()
                .with(grid::SEGMENTS_X, model.segments_x.to_string())
                .with(grid::SEGMENTS_Y, model.segments_y.to_string())
                .with(grid::COLOR, style.grid_color),
        ));

        let range = model.wire_range();
        for (idx, series) in data.datasets.iter().enumerate() {
            let points = model.data_space_points(series)?;
            let color = series_color(series, idx, style.theme);

            let mut path = PaintProperties::new();
            path.set_json(linear_path::POINTS, &points)?;
            path.set_json(linear_path::RANGE, &range)?;
            path.set(linear_path::COLOR, color);
            layers.push(PaintLayer::new(names::LINEAR_PATH, path));

            if style.draw_markers {
                let mut bubbles = PaintProperties::new();
                bubbles.set_json(bubble_border::POINTS, &points)?;
                bubbles.set_json(bubble_border::RANGE, &range)?;
                bubbles.set(bubble_border::COLOR, color);
                bubbles.set(bubble_border::BORDER_COLOR, style.theme.marker_border);
                layers.push(PaintLayer::new(names::BUBBLE_BORDER, bubbles));
            }
        }
        Ok(layers)
    }
}

/// Radar grid, then one closed polygon per series. Labels are the axes.
pub struct RadarStrategy;

impl RadarStrategy {
    /// Unit-circle vertices: value `v` on axis `i` sits at radius `(v - nice_minimum) / span`.
    pub fn radar_points(model: &ScaleModel, series: &Series) -> Vec<NormalizedPoint> {
        let axes = model.segments_x;
        let radii = map_numeric(&series.ys(), Size::new(1.0, 1.0), model.range);
        radii
            .iter()
            .take(axes)
            .enumerate()
            .map(|(i, p)| radar::radar_vertex(i, axes, p.y))
            .collect()
    }
}

impl ChartStrategy for RadarStrategy {
    fn layers(&self, model: &ScaleModel, data: &ChartData, style: &LayerStyle<'_>) -> Result<Vec<PaintLayer>> {
        let mut layers = Vec::with_capacity(1 + data.datasets.len());
        layers.push(PaintLayer::new(
            names::GRID_RADAR,
            PaintProperties::new()
                .with(radar::AXES, model.segments_x.to_string())
                .with(radar::RINGS, model.segments_y.to_string())
                .with(radar::GRID_COLOR, style.grid_color),
        ));

        for (idx, series) in data.datasets.iter().enumerate() {
            let points = Self::radar_points(model, series);
            let mut path = PaintProperties::new();
            path.set_json(radar::POINTS, &points)?;
            path.set(radar::PATH_COLOR, series_color(series, idx, style.theme));
            layers.push(PaintLayer::new(names::RADAR_PATH, path));
        }
        Ok(layers)
    }
}
