// File: crates/tideline-core/src/classify.rs
// Summary: Series classification (single vs multi) and point derivation from raw records.

use std::fmt;

use tracing::warn;

use crate::dataset::{Record, Value};
use crate::series::{Point, SeriesSet, SERIES_COUNT};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Single,
    Multi,
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartKind::Single => f.write_str("Single Series"),
            ChartKind::Multi => f.write_str("Multi Series"),
        }
    }
}

/// The first non-null value decides: array-shaped means multi, anything
/// else single. All-null and empty inputs are single.
pub fn classify(records: &[Record]) -> ChartKind {
    records
        .iter()
        .find_map(Record::value)
        .map(|v| if v.is_array() { ChartKind::Multi } else { ChartKind::Single })
        .unwrap_or(ChartKind::Single)
}

/// Points of a single-series chart: records with a finite numeric value.
pub fn single_points(records: &[Record]) -> Vec<Point> {
    records
        .iter()
        .filter_map(|r| r.value().and_then(Value::as_scalar).map(|y| Point::new(r.timestamp(), y)))
        .collect()
}

/// Split array records into three series. Null or non-numeric slots are
/// dropped for their series only; records without at least three slots are
/// skipped.
pub fn split_series(records: &[Record]) -> SeriesSet {
    let mut set = SeriesSet::default();
    let mut malformed = 0usize;
    for r in records {
        let value = match r.value() {
            Some(v) if v.slot_count() >= SERIES_COUNT => v,
            None => continue,
            Some(_) => {
                malformed += 1;
                continue;
            }
        };
        for i in 0..SERIES_COUNT {
            if let Some(y) = value.component(i).filter(|y| y.is_finite()) {
                set.push(i, Point::new(r.timestamp(), y));
            }
        }
    }
    if malformed > 0 {
        warn!(malformed, "dropped records without three value slots");
    }
    set
}

/// Points derived for one chart, shaped by its classification.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartData {
    Single(Vec<Point>),
    Multi {
        series: SeriesSet,
        /// Raw record count; drives the content width in multi mode.
        records: usize,
    },
}

impl ChartData {
    pub fn derive(kind: ChartKind, records: &[Record]) -> Self {
        match kind {
            ChartKind::Single => ChartData::Single(single_points(records)),
            ChartKind::Multi => ChartData::Multi { series: split_series(records), records: records.len() },
        }
    }

    pub fn kind(&self) -> ChartKind {
        match self {
            ChartData::Single(_) => ChartKind::Single,
            ChartData::Multi { .. } => ChartKind::Multi,
        }
    }

    /// Count used for the width rule: plotted points (single) or records (multi).
    pub fn point_count(&self) -> usize {
        match self {
            ChartData::Single(points) => points.len(),
            ChartData::Multi { records, .. } => *records,
        }
    }
}
