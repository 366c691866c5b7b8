// File: crates/tideline-core/src/tooltip.rs
// Summary: Pointer-driven nearest-sample lookup and the floating tooltip it feeds.

use std::fmt::Write as _;

use tracing::trace;

use crate::classify::ChartKind;
use crate::dataset::{Record, Value};
use crate::scale::LinearScale;
use crate::series::{SERIES_COUNT, SERIES_NAMES};
use crate::theme::{Color, Theme};

/// Tooltip offset from the pointer, in page pixels.
pub const OFFSET_X: f64 = 10.0;
pub const OFFSET_Y: f64 = -20.0;

/// Index of the record nearest to timestamp `t`.
///
/// Bisects (left bias) from index 1 so there is always a left candidate, then
/// compares it with its right neighbour. The right one wins only when strictly
/// closer: an exact midpoint resolves to the left record. Positions before the
/// first or past the last record clamp to that record.
pub fn nearest_index(t: f64, records: &[Record]) -> Option<usize> {
    if records.is_empty() {
        return None;
    }
    let i = 1 + records[1..].partition_point(|r| r.timestamp() < t);
    let left = i - 1;
    match records.get(i) {
        Some(right) if t - records[left].timestamp() > right.timestamp() - t => Some(i),
        _ => Some(left),
    }
}

/// Record nearest to plot-local pointer position `pointer_x`.
pub fn locate<'a>(pointer_x: f64, scale: &LinearScale, records: &'a [Record]) -> Option<&'a Record> {
    let t = scale.invert(pointer_x);
    let idx = nearest_index(t, records)?;
    trace!(pointer_x, t, idx, "tooltip lookup");
    records.get(idx)
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipRow {
    pub name: String,
    pub color: Color,
    /// `None` renders as "N/A".
    pub value: Option<f64>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TooltipContent {
    pub timestamp: f64,
    pub rows: Vec<TooltipRow>,
}

impl TooltipContent {
    /// Multi-series records get one row per series; single-series records a
    /// single "Value" row.
    pub fn for_record(record: &Record, kind: ChartKind, theme: &Theme) -> Self {
        let rows = match kind {
            ChartKind::Multi => (0..SERIES_COUNT)
                .map(|i| TooltipRow {
                    name: SERIES_NAMES[i].to_string(),
                    color: theme.series[i],
                    value: record.value().and_then(|v| v.component(i)),
                })
                .collect(),
            ChartKind::Single => vec![TooltipRow {
                name: "Value".to_string(),
                color: theme.line_stroke,
                value: record.value().and_then(Value::as_scalar),
            }],
        };
        Self { timestamp: record.timestamp(), rows }
    }

    /// Timestamp line followed by one color-coded `name: value` line per row.
    pub fn to_html(&self) -> String {
        let mut html = format!("<strong>Time:</strong> {}<br/>", self.timestamp);
        for row in &self.rows {
            let _ = write!(html, "<span style=\"color:{}\">{}:</span> ", row.color.to_hex(), row.name);
            match row.value {
                Some(v) => {
                    let _ = write!(html, "{v:.2}");
                }
                None => html.push_str("N/A"),
            }
            html.push_str("<br/>");
        }
        html
    }
}

/// Pointer position in both coordinate systems the chart cares about.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    /// Relative to the plot origin; drives the lookup.
    pub plot_x: f64,
    pub plot_y: f64,
    /// Absolute page position; drives tooltip placement.
    pub page_x: f64,
    pub page_y: f64,
}

/// Floating tooltip. Hiding keeps the last content and only drops visibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Tooltip {
    content: Option<TooltipContent>,
    position: (f64, f64),
    visible: bool,
}

impl Tooltip {
    pub fn show(&mut self, content: TooltipContent, page_x: f64, page_y: f64) {
        self.content = Some(content);
        self.position = (page_x + OFFSET_X, page_y + OFFSET_Y);
        self.visible = true;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn opacity(&self) -> f32 {
        if self.visible { 1.0 } else { 0.0 }
    }

    pub fn content(&self) -> Option<&TooltipContent> {
        self.content.as_ref()
    }

    pub fn html(&self) -> Option<String> {
        self.content.as_ref().map(TooltipContent::to_html)
    }

    /// Top-left corner in page coordinates.
    pub fn position(&self) -> (f64, f64) {
        self.position
    }
}
