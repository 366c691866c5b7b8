// File: crates/tideline-core/src/view.rs
// Summary: Chart view: X/Y scales and content size derived from the data and current visibility.

use crate::chart::RenderOptions;
use crate::classify::ChartData;
use crate::scale::{LinearScale, DEFAULT_TICKS};
use crate::series::extent;
use crate::types::{FALLBACK_X_DOMAIN, FALLBACK_Y_DOMAIN};
use crate::visibility::{visible_y_domain, Visibility};

/// Plot content width: wide datasets scroll instead of compressing.
pub fn content_width(point_count: usize, min_width: f64, px_per_point: f64) -> f64 {
    min_width.max(point_count as f64 * px_per_point)
}

/// X-domain over every point of the dataset, independent of visibility so
/// toggling series never rescales the time axis.
pub fn x_domain(data: &ChartData) -> (f64, f64) {
    let xs: Box<dyn Iterator<Item = f64> + '_> = match data {
        ChartData::Single(points) => Box::new(points.iter().map(|p| p.x)),
        ChartData::Multi { series, .. } => Box::new(series.all_points().map(|p| p.x)),
    };
    extent(xs).unwrap_or(FALLBACK_X_DOMAIN)
}

/// Raw (un-niced) Y-domain of whatever is currently drawn.
pub fn y_domain(data: &ChartData, visibility: &Visibility) -> (f64, f64) {
    match data {
        ChartData::Single(points) => extent(points.iter().map(|p| p.y)).unwrap_or(FALLBACK_Y_DOMAIN),
        ChartData::Multi { series, .. } => visible_y_domain(series, visibility),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartView {
    pub x: LinearScale,
    pub y: LinearScale,
    pub content_width: f64,
    pub plot_height: f64,
}

impl ChartView {
    pub fn build(data: &ChartData, visibility: &Visibility, opts: &RenderOptions) -> Self {
        let content_width = content_width(data.point_count(), opts.min_content_width, opts.px_per_point);
        let plot_height = (opts.height as f64 - opts.insets.vsum() as f64).max(1.0);
        let x = LinearScale::new(x_domain(data), (0.0, content_width));
        let y = LinearScale::new(y_domain(data, visibility), (plot_height, 0.0)).nice(DEFAULT_TICKS);
        Self { x, y, content_width, plot_height }
    }

    /// Data point to plot-local pixel coordinates.
    #[inline]
    pub fn to_px(&self, x: f64, y: f64) -> (f64, f64) {
        (self.x.map(x), self.y.map(y))
    }
}
