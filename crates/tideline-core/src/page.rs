// File: crates/tideline-core/src/page.rs
// Summary: Ordered collection of charts built from a JSON dataset array.

use std::path::Path;

use tracing::info;

use crate::chart::{Chart, RenderOptions};
use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::text::TextMeasure;

/// Parse the `[ { "title", "data": [[t, v], ...] }, ... ]` input format.
pub fn parse_datasets(json: &str) -> Result<Vec<Dataset>> {
    Ok(serde_json::from_str(json)?)
}

pub fn load_datasets(path: impl AsRef<Path>) -> Result<Vec<Dataset>> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| Error::Io { path: path.to_path_buf(), source })?;
    let datasets = parse_datasets(&raw)?;
    info!(path = %path.display(), count = datasets.len(), "loaded datasets");
    Ok(datasets)
}

/// One chart per dataset, kept in input order.
pub struct Page {
    charts: Vec<Chart>,
}

impl Page {
    pub fn new(datasets: Vec<Dataset>) -> Self {
        Self { charts: datasets.into_iter().map(Chart::new).collect() }
    }

    /// Build every chart with `opts`; `measure` produces one text measurer per chart.
    pub fn with_options<F>(datasets: Vec<Dataset>, opts: &RenderOptions, mut measure: F) -> Self
    where
        F: FnMut() -> Box<dyn TextMeasure>,
    {
        let charts = datasets
            .into_iter()
            .map(|ds| Chart::with_options(ds, opts.clone(), measure()))
            .collect();
        Self { charts }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::new(parse_datasets(json)?))
    }

    pub fn charts(&self) -> &[Chart] { &self.charts }
    pub fn charts_mut(&mut self) -> &mut [Chart] { &mut self.charts }
    pub fn len(&self) -> usize { self.charts.len() }
    pub fn is_empty(&self) -> bool { self.charts.is_empty() }
}
