// File: crates/tideline-core/src/series.rs
// Summary: Derived series model: points and the fixed three-series set.

/// Number of series in a multi-series chart.
pub const SERIES_COUNT: usize = 3;

/// Display names, in series order.
pub const SERIES_NAMES: [&str; SERIES_COUNT] = ["Series 1", "Series 2", "Series 3"];

/// A data point in domain space (timestamp, value).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self { Self { x, y } }
}

/// Exactly three ordered point sequences. Lengths may differ because null
/// slots are dropped per series.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SeriesSet {
    series: [Vec<Point>; SERIES_COUNT],
}

impl SeriesSet {
    pub fn new(series: [Vec<Point>; SERIES_COUNT]) -> Self {
        Self { series }
    }

    pub fn get(&self, index: usize) -> Option<&[Point]> {
        self.series.get(index).map(Vec::as_slice)
    }

    pub(crate) fn push(&mut self, index: usize, p: Point) {
        self.series[index].push(p);
    }

    /// `(index, points)` pairs in series order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &[Point])> {
        self.series.iter().enumerate().map(|(i, s)| (i, s.as_slice()))
    }

    /// Every point of every series, ignoring visibility.
    pub fn all_points(&self) -> impl Iterator<Item = &Point> {
        self.series.iter().flatten()
    }

    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Vec::is_empty)
    }
}

/// Extent of `values` as `(min, max)`; `None` when no finite value is present.
pub fn extent<I: IntoIterator<Item = f64>>(values: I) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    for v in values {
        if v.is_finite() {
            lo = lo.min(v);
            hi = hi.max(v);
        }
    }
    if lo <= hi { Some((lo, hi)) } else { None }
}
