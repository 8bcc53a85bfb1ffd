// File: crates/houdini-core/src/paint/color.rs
// Summary: CSS color strings (hex, rgb()/rgba(), a few names) to Skia colors.

use skia_safe as skia;

/// Parse a CSS color string. Returns `None` for anything unrecognized.
pub fn parse_css_color(value: &str) -> Option<skia::Color> {
    let v = value.trim().trim_matches(|c| c == '"' || c == '\'').trim();
    if v.is_empty() {
        return None;
    }
    if let Some(hex) = v.strip_prefix('#') {
        return from_hex(hex);
    }
    let lower = v.to_ascii_lowercase();
    if let Some(args) = lower.strip_prefix("rgba(").or_else(|| lower.strip_prefix("rgb(")) {
        return from_rgb_args(args.strip_suffix(')')?);
    }
    named(&lower)
}

/// Parse `value`, or fall back to `fallback` (which must itself be valid).
pub fn css_color_or(value: Option<&str>, fallback: &str) -> skia::Color {
    value
        .and_then(parse_css_color)
        .or_else(|| parse_css_color(fallback))
        .unwrap_or(skia::Color::BLACK)
}

fn from_hex(hex: &str) -> Option<skia::Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok().map(|n| n * 17);
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 => Some(skia::Color::from_argb(255, nibble(0)?, nibble(1)?, nibble(2)?)),
        4 => Some(skia::Color::from_argb(nibble(3)?, nibble(0)?, nibble(1)?, nibble(2)?)),
        6 => Some(skia::Color::from_argb(255, byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(skia::Color::from_argb(byte(6)?, byte(0)?, byte(2)?, byte(4)?)),
        _ => None,
    }
}

fn from_rgb_args(args: &str) -> Option<skia::Color> {
    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let channel = |s: &str| -> Option<u8> {
        let n: f64 = s.parse().ok()?;
        Some(n.round().clamp(0.0, 255.0) as u8)
    };
    match parts.as_slice() {
        [r, g, b] => Some(skia::Color::from_argb(255, channel(r)?, channel(g)?, channel(b)?)),
        [r, g, b, a] => {
            let alpha: f64 = a.parse().ok()?;
            let alpha = (alpha.clamp(0.0, 1.0) * 255.0).round() as u8;
            Some(skia::Color::from_argb(alpha, channel(r)?, channel(g)?, channel(b)?))
        }
        _ => None,
    }
}

fn named(name: &str) -> Option<skia::Color> {
    let (r, g, b) = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "gray" | "grey" => (128, 128, 128),
        "silver" => (192, 192, 192),
        "teal" => (0, 128, 128),
        "navy" => (0, 0, 128),
        "transparent" => return Some(skia::Color::TRANSPARENT),
        _ => return None,
    };
    Some(skia::Color::from_argb(255, r, g, b))
}
