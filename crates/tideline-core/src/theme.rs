// File: crates/tideline-core/src/theme.rs
// Summary: Light/Dark theming for chart scene colors.

use serde::{Deserialize, Deserializer};

/// Backend-independent RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// `#rrggbb`, alpha ignored.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Alpha as a fraction in `[0, 1]`.
    pub fn alpha_f(&self) -> f32 {
        self.a as f32 / 255.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Color,
    pub grid: Color,
    pub axis_line: Color,
    pub axis_label: Color,
    /// Stroke and marker color of a single-series chart.
    pub line_stroke: Color,
    /// Fixed per-series colors of a multi-series chart, in series order.
    pub series: [Color; 3],
    pub legend_fill: Color,
    pub legend_stroke: Color,
    pub legend_text: Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::from_rgb(255, 255, 255),
            grid: Color::from_rgb(0, 0, 0),
            axis_line: Color::from_rgb(0, 0, 0),
            axis_label: Color::from_rgb(0, 0, 0),
            line_stroke: Color::from_rgb(0x25, 0x63, 0xeb),
            series: [
                Color::from_rgb(0x25, 0x63, 0xeb), // blue
                Color::from_rgb(0x16, 0xa3, 0x4a), // green
                Color::from_rgb(0xdc, 0x26, 0x26), // red
            ],
            legend_fill: Color::from_argb(204, 255, 255, 255),
            legend_stroke: Color::from_rgb(0xcc, 0xcc, 0xcc),
            legend_text: Color::from_rgb(0x33, 0x33, 0x33),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::from_rgb(18, 18, 20),
            grid: Color::from_rgb(150, 150, 160),
            axis_line: Color::from_rgb(180, 180, 190),
            axis_label: Color::from_rgb(235, 235, 245),
            line_stroke: Color::from_rgb(64, 160, 255),
            series: [
                Color::from_rgb(64, 160, 255),
                Color::from_rgb(40, 200, 120),
                Color::from_rgb(220, 80, 80),
            ],
            legend_fill: Color::from_argb(204, 40, 40, 45),
            legend_stroke: Color::from_rgb(90, 90, 100),
            legend_text: Color::from_rgb(235, 235, 245),
        }
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
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

/// Serde adapter: themes are configured by preset name.
pub fn deserialize_by_name<'de, D: Deserializer<'de>>(d: D) -> Result<Theme, D::Error> {
    let name = String::deserialize(d)?;
    Ok(find(&name))
}
