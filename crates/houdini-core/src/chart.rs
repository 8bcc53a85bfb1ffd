// File: crates/houdini-core/src/chart.rs
// Summary: Chart struct and headless rendering pipeline: paint layers rasterized on a Skia CPU surface.

use skia_safe as skia;

use crate::axis::{tick_labels, Axis};
use crate::config::{ChartConfig, ChartKind};
use crate::error::{ChartError, Result};
use crate::geometry::RectI32;
use crate::layout::{chart_layers, ScaleModel};
use crate::paint::radar::{radar_vertex, RADIUS_FRACTION};
use crate::paint::{PaintHost, PaintLayer};
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

const TITLE_PX: f32 = 20.0;
const AXIS_TITLE_PX: f32 = 14.0;
const LABEL_PX: f32 = 12.0;

pub struct RenderOptions {
    pub width: i32,
    pub height: i32,
    pub insets: Insets,
    pub theme: Theme,
    /// Title, axis titles and tick labels; off gives platform-independent pixels.
    pub draw_labels: bool,
    /// Bubble-border markers on line charts.
    pub draw_markers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            draw_markers: true,
        }
    }
}

impl RenderOptions {
    fn plot_rect(&self) -> RectI32 {
        RectI32::from_ltrb(
            self.insets.left as i32,
            self.insets.top as i32,
            self.width - self.insets.right as i32,
            self.height - self.insets.bottom as i32,
        )
    }
}

pub struct Chart {
    pub config: ChartConfig,
    host: PaintHost,
}

impl Chart {
    pub fn new(config: ChartConfig) -> Self {
        Self { config, host: PaintHost::with_builtin() }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(Self::new(ChartConfig::from_json_str(json)?))
    }

    /// Host running this chart's painters; exposed so callers can add painters.
    pub fn host_mut(&mut self) -> &mut PaintHost {
        &mut self.host
    }

    pub fn scale_model(&self) -> Result<ScaleModel> {
        ScaleModel::build(&self.config.data)
    }

    /// Paint layers for the current data, in paint order.
    pub fn layers(&self, opts: &RenderOptions) -> Result<Vec<PaintLayer>> {
        Ok(chart_layers(&self.config, &opts.theme, opts.draw_markers)?.1)
    }

    /// Render the chart to a PNG at `output_png_path`.
    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }

    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let mut surface = self.draw(opts)?;
        encode_png(&mut surface)
    }

    /// Render to a tightly packed RGBA8 buffer: `(pixels, width, height, row_bytes)`.
    pub fn render_to_rgba8(&self, opts: &RenderOptions) -> Result<(Vec<u8>, u32, u32, usize)> {
        let mut surface = self.draw(opts)?;
        read_rgba8(&mut surface)
    }

    fn draw(&self, opts: &RenderOptions) -> Result<skia::Surface> {
        let (model, layers) = chart_layers(&self.config, &opts.theme, opts.draw_markers)?;

        let mut surface = new_surface(opts.width, opts.height)?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        let plot = opts.plot_rect();
        if plot.width() <= 0 || plot.height() <= 0 {
            return Err(ChartError::Surface { width: plot.width(), height: plot.height() });
        }
        let rect = skia::Rect::from_ltrb(plot.left as f32, plot.top as f32, plot.right as f32, plot.bottom as f32);

        for layer in &layers {
            self.host.paint_layer(canvas, rect, layer);
        }

        if opts.draw_labels {
            let shaper = TextShaper::new();
            draw_titles(canvas, &shaper, &self.config, opts, rect);
            match self.config.chart_type {
                ChartKind::Line => draw_line_labels(canvas, &shaper, &model, opts, rect),
                ChartKind::Radar => draw_radar_labels(canvas, &shaper, &model, opts, rect),
            }
        }
        Ok(surface)
    }
}

/// Paint `layers` with `host` onto a fresh `width` x `height` surface and read it back as RGBA8.
pub fn rasterize_layers(
    host: &PaintHost,
    layers: &[PaintLayer],
    width: i32,
    height: i32,
    background: skia::Color,
) -> Result<(Vec<u8>, u32, u32, usize)> {
    let mut surface = new_surface(width, height)?;
    let canvas = surface.canvas();
    canvas.clear(background);
    let rect = skia::Rect::from_wh(width as f32, height as f32);
    for layer in layers {
        host.paint_layer(canvas, rect, layer);
    }
    read_rgba8(&mut surface)
}

// ---- helpers ----------------------------------------------------------------

fn new_surface(width: i32, height: i32) -> Result<skia::Surface> {
    if width <= 0 || height <= 0 {
        return Err(ChartError::Surface { width, height });
    }
    skia::surfaces::raster_n32_premul((width, height)).ok_or(ChartError::Surface { width, height })
}

fn encode_png(surface: &mut skia::Surface) -> Result<Vec<u8>> {
    let image = surface.image_snapshot();
    #[allow(deprecated)]
    let data = image
        .encode_to_data(skia::EncodedImageFormat::PNG)
        .ok_or(ChartError::Encode("PNG"))?;
    Ok(data.as_bytes().to_vec())
}

fn read_rgba8(surface: &mut skia::Surface) -> Result<(Vec<u8>, u32, u32, usize)> {
    let (w, h) = (surface.width(), surface.height());
    let info = skia::ImageInfo::new((w, h), skia::ColorType::RGBA8888, skia::AlphaType::Unpremul, None);
    let row_bytes = w as usize * 4;
    let mut pixels = vec![0u8; row_bytes * h as usize];
    if !surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
        return Err(ChartError::Encode("RGBA8"));
    }
    Ok((pixels, w as u32, h as u32, row_bytes))
}

fn draw_titles(canvas: &skia::Canvas, shaper: &TextShaper, config: &ChartConfig, opts: &RenderOptions, plot: skia::Rect) {
    let theme = &opts.theme;
    if let Some(title) = config.title.as_deref() {
        let y = opts.insets.top as f32 * 0.5;
        shaper.draw(canvas, title, (opts.width as f32 * 0.5, y), Anchor::Center, TITLE_PX, theme.title, true);
    }
    if let Some(title) = config.axis_title(Axis::Y) {
        shaper.draw_vertical(canvas, title, (AXIS_TITLE_PX, plot.center_y()), AXIS_TITLE_PX, theme.axis_label);
    }
    if let Some(title) = config.axis_title(Axis::X) {
        let y = opts.height as f32 - AXIS_TITLE_PX;
        shaper.draw(canvas, title, (plot.center_x(), y), Anchor::Center, AXIS_TITLE_PX, theme.axis_label, false);
    }
}

fn draw_line_labels(canvas: &skia::Canvas, shaper: &TextShaper, model: &ScaleModel, opts: &RenderOptions, plot: skia::Rect) {
    let color = opts.theme.axis_label;

    // y ticks, bottom to top
    let segments = model.segments_y.max(1) as f32;
    for (j, label) in tick_labels(&model.nice).iter().enumerate() {
        let y = plot.bottom - plot.height() * (j as f32 / segments);
        shaper.draw(canvas, label, (plot.left - 8.0, y), Anchor::Right, LABEL_PX, color, false);
    }

    // x labels centered in their segment
    let labels = model.x_domain.labels();
    let step = plot.width() / labels.len().max(1) as f32;
    for (i, label) in labels.iter().enumerate() {
        let x = plot.left + step * (i as f32 + 0.5);
        shaper.draw(canvas, label, (x, plot.bottom + 16.0), Anchor::Center, LABEL_PX, color, false);
    }
}

fn draw_radar_labels(canvas: &skia::Canvas, shaper: &TextShaper, model: &ScaleModel, opts: &RenderOptions, plot: skia::Rect) {
    let color = opts.theme.axis_label;
    let radius = plot.width().min(plot.height()) * RADIUS_FRACTION;
    let (cx, cy) = (plot.center_x(), plot.center_y());

    let labels = model.x_domain.labels();
    for (i, label) in labels.iter().enumerate() {
        let v = radar_vertex(i, labels.len(), 1.12);
        let anchor = if v.x > 0.05 {
            Anchor::Left
        } else if v.x < -0.05 {
            Anchor::Right
        } else {
            Anchor::Center
        };
        let at = (cx + v.x as f32 * radius, cy - v.y as f32 * radius);
        shaper.draw(canvas, label, at, anchor, LABEL_PX, color, false);
    }

    // ring values along the first spoke
    let segments = model.segments_y.max(1) as f32;
    for (j, label) in tick_labels(&model.nice).iter().enumerate().skip(1) {
        let y = cy - radius * (j as f32 / segments);
        shaper.draw(canvas, label, (cx + 4.0, y), Anchor::Left, LABEL_PX - 2.0, color, false);
    }
}
