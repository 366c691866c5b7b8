// File: crates/tideline-demo/src/config.rs
// Summary: Optional TOML configuration for the demo (render options, output directory, sweep).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tideline_core::RenderOptions;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub out_dir: Option<PathBuf>,
    /// Number of pointer stops replayed across each plot.
    pub sweep_steps: usize,
    pub render: RenderOptions,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self { out_dir: None, sweep_steps: 4, render: RenderOptions::default() }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
