// File: crates/tideline-core/src/scene.rs
// Summary: Backend-independent scene description produced fresh on every render.
// Notes:
// - Coordinates of items are local to the plot origin; backends translate by
//   `origin` (the left/top margins) before drawing.
// - Items are stored in draw order.

use crate::curve::PathCmd;
use crate::geometry::{Pos, RectF};
use crate::theme::Color;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub color: Color,
    pub width: f32,
    /// `(on, off)` dash lengths; solid when `None`.
    pub dash: Option<[f32; 2]>,
    pub opacity: f32,
}

impl Stroke {
    pub const fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None, opacity: 1.0 }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Element {
    Line { from: Pos, to: Pos, stroke: Stroke },
    Path { cmds: Vec<PathCmd>, stroke: Stroke },
    Circle { center: Pos, radius: f32, fill: Color },
    Rect { rect: RectF, corner_radius: f32, fill: Color, stroke: Option<Stroke> },
    Text {
        pos: Pos,
        text: String,
        size: f32,
        color: Color,
        anchor: TextAnchor,
        /// Baseline shift in em units (positive moves down).
        dy_em: f32,
    },
}

/// Which part of the chart an item belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Layer {
    Grid,
    Axis,
    Series,
    Markers,
    Legend,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SceneItem {
    pub layer: Layer,
    pub element: Element,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// Full surface size (content plus margins).
    pub width: f32,
    pub height: f32,
    /// Translation from surface to plot-local coordinates.
    pub origin: Pos,
    pub background: Color,
    /// Pointer-sensitive region in plot-local coordinates.
    pub plot: RectF,
    items: Vec<SceneItem>,
}

impl Scene {
    pub fn new(width: f32, height: f32, origin: Pos, plot: RectF, background: Color) -> Self {
        Self { width, height, origin, background, plot, items: Vec::new() }
    }

    pub fn push(&mut self, layer: Layer, element: Element) {
        self.items.push(SceneItem { layer, element });
    }

    pub fn extend(&mut self, layer: Layer, elements: impl IntoIterator<Item = Element>) {
        self.items.extend(elements.into_iter().map(|element| SceneItem { layer, element }));
    }

    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    pub fn layer(&self, layer: Layer) -> impl Iterator<Item = &Element> {
        self.items.iter().filter(move |it| it.layer == layer).map(|it| &it.element)
    }

    pub fn count(&self, layer: Layer) -> usize {
        self.layer(layer).count()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
