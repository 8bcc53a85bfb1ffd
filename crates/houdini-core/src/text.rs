// File: crates/houdini-core/src/text.rs
// Summary: Text overlay for titles and axis labels using Skia textlayout.

use skia_safe as skia;
use skia::textlayout::{FontCollection, Paragraph, ParagraphBuilder, ParagraphStyle, TextStyle};

/// Horizontal anchor of a label relative to its x coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Anchor {
    Left,
    Center,
    Right,
}

pub struct TextShaper {
    fonts: FontCollection,
}

impl TextShaper {
    pub fn new() -> Self {
        let mut fc = FontCollection::new();
        fc.set_default_font_manager(skia::FontMgr::default(), None);
        Self { fonts: fc }
    }

    fn make_style(size: f32, color: skia::Color, bold: bool) -> TextStyle {
        let mut ts = TextStyle::new();
        ts.set_font_size(size.max(1.0));
        ts.set_color(color);
        ts.set_font_families(&["Segoe UI", "Arial", "Helvetica", "Roboto", "DejaVu Sans", "sans-serif"]);
        if bold {
            ts.set_font_style(skia::FontStyle::bold());
        }
        ts
    }

    pub fn layout(&self, text: &str, size: f32, color: skia::Color, bold: bool) -> Paragraph {
        let mut pstyle = ParagraphStyle::new();
        pstyle.set_text_align(skia::textlayout::TextAlign::Left);
        let mut builder = ParagraphBuilder::new(&pstyle, &self.fonts);
        builder.push_style(&Self::make_style(size, color, bold));
        builder.add_text(text);
        let mut paragraph = builder.build();
        paragraph.layout(10_000.0);
        paragraph
    }

    /// Draw `text` with its vertical middle at `y`.
    pub fn draw(
        &self,
        canvas: &skia::Canvas,
        text: &str,
        (x, y): (f32, f32),
        anchor: Anchor,
        size: f32,
        color: skia::Color,
        bold: bool,
    ) {
        let p = self.layout(text, size, color, bold);
        let width = p.longest_line();
        let left = match anchor {
            Anchor::Left => x,
            Anchor::Center => x - width * 0.5,
            Anchor::Right => x - width,
        };
        p.paint(canvas, (left, y - p.height() * 0.5));
    }

    /// Draw `text` rotated 90° counter-clockwise, centered on `(x, y)`.
    pub fn draw_vertical(&self, canvas: &skia::Canvas, text: &str, (x, y): (f32, f32), size: f32, color: skia::Color) {
        canvas.save();
        canvas.translate((x, y));
        canvas.rotate(-90.0, None);
        self.draw(canvas, text, (0.0, 0.0), Anchor::Center, size, color, false);
        canvas.restore();
    }
}

impl Default for TextShaper {
    fn default() -> Self { Self::new() }
}
