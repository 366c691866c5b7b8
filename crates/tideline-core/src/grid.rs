// File: crates/tideline-core/src/grid.rs
// Summary: Gridlines: axis ticks extended across the plot's perpendicular dimension.

use crate::axis::{Axis, Orient};
use crate::geometry::Pos;

/// Dash pattern of gridlines, in pixels (on, off).
pub const GRID_DASH: [f32; 2] = [3.0, 3.0];
/// Gridline opacity.
pub const GRID_OPACITY: f32 = 0.3;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLine {
    pub from: Pos,
    pub to: Pos,
}

/// One gridline per tick of `axis`. `span` is the plot size perpendicular to
/// the axis (plot height for the X axis, content width for the Y axis).
pub fn gridlines(axis: &Axis, span: f32) -> Vec<GridLine> {
    axis.ticks
        .iter()
        .map(|t| match axis.orient {
            Orient::Bottom => GridLine { from: Pos::new(t.offset, span), to: Pos::new(t.offset, 0.0) },
            Orient::Left => GridLine { from: Pos::new(0.0, t.offset), to: Pos::new(span, t.offset) },
        })
        .collect()
}
