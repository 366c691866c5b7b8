// File: crates/tideline-core/src/chart.rs
// Summary: Chart orchestrator: owns one dataset, memoized classification, visibility and tooltip
//          state, and rebuilds the scene on every data or visibility change.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::classify::{classify, ChartData, ChartKind};
use crate::dataset::Dataset;
use crate::geometry::Pos;
use crate::render::build_scene;
use crate::scene::Scene;
use crate::text::{ApproxTextMeasure, TextMeasure};
use crate::theme::{self, Theme};
use crate::tooltip::{locate, PointerEvent, Tooltip, TooltipContent};
use crate::types::{Insets, HEIGHT, MIN_CONTENT_WIDTH, PX_PER_POINT};
use crate::view::ChartView;
use crate::visibility::Visibility;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Total height including margins.
    pub height: f32,
    pub insets: Insets,
    pub min_content_width: f64,
    pub px_per_point: f64,
    pub line_width: f32,
    pub marker_radius: f32,
    pub draw_labels: bool,
    #[serde(deserialize_with = "theme::deserialize_by_name")]
    pub theme: Theme,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            height: HEIGHT,
            insets: Insets::default(),
            min_content_width: MIN_CONTENT_WIDTH,
            px_per_point: PX_PER_POINT,
            line_width: 2.0,
            marker_radius: 4.0,
            draw_labels: true,
            theme: Theme::light(),
        }
    }
}

/// Input events, handled one at a time to completion.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    PointerMove(PointerEvent),
    PointerLeave,
    ToggleSeries(usize),
    DatasetChanged(Dataset),
}

pub struct Chart {
    dataset: Dataset,
    data: ChartData,
    visibility: Visibility,
    tooltip: Tooltip,
    opts: RenderOptions,
    measure: Box<dyn TextMeasure>,
    view: ChartView,
    scene: Scene,
}

impl Chart {
    /// Chart with default options and approximate text metrics.
    pub fn new(dataset: Dataset) -> Self {
        Self::with_options(dataset, RenderOptions::default(), Box::new(ApproxTextMeasure::default()))
    }

    pub fn with_options(dataset: Dataset, opts: RenderOptions, measure: Box<dyn TextMeasure>) -> Self {
        let kind = classify(&dataset.data);
        let data = ChartData::derive(kind, &dataset.data);
        let visibility = Visibility::default();
        let view = ChartView::build(&data, &visibility, &opts);
        let scene = build_scene(&data, &visibility, &view, &opts, measure.as_ref());
        debug!(title = %dataset.title, %kind, records = dataset.data.len(), "chart created");
        Self { dataset, data, visibility, tooltip: Tooltip::default(), opts, measure, view, scene }
    }

    pub fn dataset(&self) -> &Dataset { &self.dataset }
    pub fn title(&self) -> &str { &self.dataset.title }
    pub fn kind(&self) -> ChartKind { self.data.kind() }
    pub fn data(&self) -> &ChartData { &self.data }
    pub fn visibility(&self) -> &Visibility { &self.visibility }
    pub fn view(&self) -> &ChartView { &self.view }
    pub fn scene(&self) -> &Scene { &self.scene }
    pub fn tooltip(&self) -> &Tooltip { &self.tooltip }
    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Caption shown under the chart, e.g. "Chart Type: Multi Series".
    pub fn caption(&self) -> String {
        format!("Chart Type: {}", self.kind())
    }

    /// Dispatch one event. Returns `true` when the scene was rebuilt.
    pub fn handle(&mut self, event: ChartEvent) -> bool {
        match event {
            ChartEvent::PointerMove(p) => {
                self.pointer_move(p);
                false
            }
            ChartEvent::PointerLeave => {
                self.pointer_leave();
                false
            }
            ChartEvent::ToggleSeries(i) => self.toggle_series(i),
            ChartEvent::DatasetChanged(ds) => self.set_dataset(ds),
        }
    }

    /// Flip the visibility of series `index` and redraw. No-op for single
    /// series charts and out-of-range indices.
    pub fn toggle_series(&mut self, index: usize) -> bool {
        if self.kind() != ChartKind::Multi {
            debug!(index, "series toggle ignored for single-series chart");
            return false;
        }
        if !self.visibility.toggle(index) {
            warn!(index, "series toggle ignored: index out of range");
            return false;
        }
        self.redraw();
        true
    }

    /// Replace the dataset. Classification is recomputed only here; an equal
    /// dataset leaves everything untouched.
    pub fn set_dataset(&mut self, dataset: Dataset) -> bool {
        if dataset == self.dataset {
            return false;
        }
        let kind = classify(&dataset.data);
        if kind != self.kind() {
            debug!(from = %self.kind(), to = %kind, "classification changed; switching render path");
        }
        self.data = ChartData::derive(kind, &dataset.data);
        self.dataset = dataset;
        self.tooltip.hide();
        self.redraw();
        true
    }

    /// Show the tooltip for the sample nearest to the pointer. Positions
    /// outside the plot behave like a pointer leave; a lookup without result
    /// leaves the tooltip as it was.
    pub fn pointer_move(&mut self, p: PointerEvent) {
        if !self.scene.plot.contains(Pos::new(p.plot_x as f32, p.plot_y as f32)) {
            self.tooltip.hide();
            return;
        }
        if let Some(record) = locate(p.plot_x, &self.view.x, &self.dataset.data) {
            let content = TooltipContent::for_record(record, self.kind(), &self.opts.theme);
            self.tooltip.show(content, p.page_x, p.page_y);
        }
    }

    pub fn pointer_leave(&mut self) {
        self.tooltip.hide();
    }

    /// Rebuild scales and the scene from scratch.
    pub fn redraw(&mut self) {
        self.view = ChartView::build(&self.data, &self.visibility, &self.opts);
        self.scene = build_scene(&self.data, &self.visibility, &self.view, &self.opts, self.measure.as_ref());
    }
}
