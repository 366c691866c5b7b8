// File: crates/tideline-core/src/axis.rs
// Summary: Axis model: orientation, tick positions and labels derived from a scale.

use crate::scale::{LinearScale, DEFAULT_TICKS};

/// Length of the outer tick marks, in pixels.
pub const TICK_SIZE: f32 = 6.0;
/// Gap between a tick mark and its label, in pixels.
pub const TICK_PADDING: f32 = 3.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orient {
    /// Horizontal axis below the plot; ticks point down.
    Bottom,
    /// Vertical axis left of the plot; ticks point left.
    Left,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tick {
    pub value: f64,
    /// Pixel offset along the axis.
    pub offset: f32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Axis {
    pub orient: Orient,
    /// Pixel extent along the axis (`range` of the scale).
    pub start: f32,
    pub end: f32,
    pub ticks: Vec<Tick>,
}

impl Axis {
    pub fn new(orient: Orient, scale: &LinearScale) -> Self {
        let format = scale.tick_format(DEFAULT_TICKS);
        let ticks = scale
            .ticks(DEFAULT_TICKS)
            .into_iter()
            .map(|value| Tick { value, offset: scale.map(value) as f32, label: format(value) })
            .collect();
        Self { orient, start: scale.range.0 as f32, end: scale.range.1 as f32, ticks }
    }

    pub fn bottom(scale: &LinearScale) -> Self {
        Self::new(Orient::Bottom, scale)
    }

    pub fn left(scale: &LinearScale) -> Self {
        Self::new(Orient::Left, scale)
    }
}
