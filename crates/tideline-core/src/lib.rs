// File: crates/tideline-core/src/lib.rs
// Summary: Core library entry point; exports the charting engine API.

pub mod error;
pub mod types;
pub mod geometry;
pub mod theme;
pub mod dataset;
pub mod series;
pub mod classify;
pub mod scale;
pub mod axis;
pub mod grid;
pub mod curve;
pub mod visibility;
pub mod text;
pub mod legend;
pub mod scene;
pub mod view;
pub mod render;
pub mod tooltip;
pub mod chart;
pub mod page;

pub use chart::{Chart, ChartEvent, RenderOptions};
pub use classify::{classify, ChartData, ChartKind};
pub use dataset::{Dataset, Record, Value};
pub use error::{Error, Result};
pub use page::{load_datasets, parse_datasets, Page};
pub use scale::LinearScale;
pub use scene::{Element, Layer, Scene};
pub use series::{Point, SeriesSet};
pub use text::{ApproxTextMeasure, TextMeasure};
pub use theme::{Color, Theme};
pub use tooltip::{locate, PointerEvent, Tooltip, TooltipContent};
pub use view::ChartView;
pub use visibility::{visible_y_domain, Visibility};
