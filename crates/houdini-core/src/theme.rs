// File: crates/houdini-core/src/theme.rs
// Summary: Light/Dark theming: surface colors plus the CSS defaults handed to painters.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub title: skia::Color,
    pub axis_label: skia::Color,
    /// `--grid-color` when the chart options name none.
    pub grid: &'static str,
    /// `--bubble-border-color` for point markers.
    pub marker_border: &'static str,
    /// Series colors, cycled for series without their own color.
    pub palette: &'static [&'static str],
}

/// Microsoft Office series palette.
const OFFICE_PALETTE: [&str; 6] = ["#4472C4", "#ED7D31", "#A5A5A5", "#FFC000", "#5B9BD5", "#70AD47"];

const MOCHA_PALETTE: [&str; 6] = ["#89B4FA", "#A6E3A1", "#F9E2AF", "#F38BA8", "#CBA6F7", "#94E2D5"];

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            title: skia::Color::from_argb(255, 20, 20, 30),
            axis_label: skia::Color::from_argb(255, 80, 80, 90),
            grid: "#ccc",
            marker_border: "#fff",
            palette: &OFFICE_PALETTE,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 30, 30, 46),
            title: skia::Color::from_argb(255, 235, 235, 245),
            axis_label: skia::Color::from_argb(255, 186, 194, 222),
            grid: "#585b70",
            marker_border: "#1e1e2e",
            palette: &MOCHA_PALETTE,
        }
    }

    /// Color for series number `idx`.
    pub fn series_color(&self, idx: usize) -> &'static str {
        self.palette[idx % self.palette.len()]
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
