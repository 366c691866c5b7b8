// File: crates/tideline-core/src/types.rs
// Summary: Shared layout constants (chart height, width floor, margins).

use serde::Deserialize;

/// Total chart height in pixels, margins included.
pub const HEIGHT: f32 = 400.0;
/// Minimum plot content width in pixels.
pub const MIN_CONTENT_WIDTH: f64 = 800.0;
/// Horizontal pixels reserved per data point once the width floor is exceeded.
pub const PX_PER_POINT: f64 = 0.1;
/// Placeholder Y-domain used when no visible series contributes a value.
pub const FALLBACK_Y_DOMAIN: (f64, f64) = (0.0, 100.0);
/// Placeholder X-domain used when the dataset has no points at all.
pub const FALLBACK_X_DOMAIN: (f64, f64) = (0.0, 1.0);

/// Margins between the outer chart box and the plot area, in pixels.
/// Keys left out of a config table keep their default.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Left plus right; the outer width is `content_width + hsum()`.
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Top plus bottom; subtract from `HEIGHT` for the plot height.
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(50, 30, 20, 40)
    }
}
