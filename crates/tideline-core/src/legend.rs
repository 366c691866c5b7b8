// File: crates/tideline-core/src/legend.rs
// Summary: Legend layout: one swatch + label row per series over a semi-opaque panel.

use crate::geometry::{Pos, RectF};
use crate::scene::{Element, Stroke, TextAnchor};
use crate::series::{SERIES_COUNT, SERIES_NAMES};
use crate::text::TextMeasure;
use crate::theme::Theme;

pub const ROW_PITCH: f32 = 25.0;
pub const SWATCH: f32 = 14.0;
pub const LABEL_X: f32 = 20.0;
pub const FONT_SIZE: f32 = 14.0;
/// Distance of the legend's left edge from the right end of the content.
pub const RIGHT_OFFSET: f32 = 150.0;
pub const TOP: f32 = 20.0;
const PANEL_PAD: f32 = 5.0;
const PANEL_EXTRA_WIDTH: f32 = 40.0;
const PANEL_RADIUS: f32 = 5.0;

/// Panel rectangle for labels whose longest width is `max_label`.
pub fn panel_rect(content_width: f32, max_label: f32) -> RectF {
    let origin = Pos::new(content_width - RIGHT_OFFSET, TOP);
    RectF::from_ltwh(
        origin.x - PANEL_PAD,
        origin.y - PANEL_PAD,
        max_label + PANEL_EXTRA_WIDTH,
        SERIES_COUNT as f32 * ROW_PITCH + 2.0 * PANEL_PAD,
    )
}

/// Legend elements in draw order: panel first, then one swatch and label per
/// series. All series are listed whatever their visibility.
pub fn legend_elements(content_width: f32, theme: &Theme, measure: &dyn TextMeasure) -> Vec<Element> {
    let max_label = SERIES_NAMES
        .iter()
        .map(|name| measure.measure_width(name, FONT_SIZE))
        .fold(0.0f32, f32::max);

    let origin = Pos::new(content_width - RIGHT_OFFSET, TOP);
    let mut out = Vec::with_capacity(1 + 2 * SERIES_COUNT);
    out.push(Element::Rect {
        rect: panel_rect(content_width, max_label),
        corner_radius: PANEL_RADIUS,
        fill: theme.legend_fill,
        stroke: Some(Stroke::solid(theme.legend_stroke, 1.0)),
    });
    for (i, name) in SERIES_NAMES.iter().enumerate() {
        let row_y = origin.y + i as f32 * ROW_PITCH;
        out.push(Element::Rect {
            rect: RectF::from_ltwh(origin.x, row_y, SWATCH, SWATCH),
            corner_radius: 0.0,
            fill: theme.series[i],
            stroke: None,
        });
        out.push(Element::Text {
            pos: Pos::new(origin.x + LABEL_X, row_y + 11.0),
            text: (*name).to_string(),
            size: FONT_SIZE,
            color: theme.legend_text,
            anchor: TextAnchor::Start,
            dy_em: 0.35,
        });
    }
    out
}
