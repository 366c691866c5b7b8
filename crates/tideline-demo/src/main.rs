// File: crates/tideline-demo/src/main.rs
// Summary: Demo page: loads a dataset JSON file and renders every chart to PNG and SVG,
//          replaying a pointer sweep and series toggles against each chart.

mod config;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueHint};
use tideline_core::{load_datasets, Chart, ChartEvent, ChartKind, Page, PointerEvent, TextMeasure};
use tideline_render_skia::{scene_to_svg, SkiaRenderer, TextShaper};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

#[derive(Parser, Debug)]
#[command(author, version, about = "Render every chart of a dataset file to PNG and SVG", long_about = None)]
struct Args {
    /// Dataset JSON file (array of `{ title, data }`); defaults to the bundled sample.
    #[arg(value_hint = ValueHint::FilePath)]
    data: Option<PathBuf>,

    /// TOML file with render options and demo settings.
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Output directory; overrides `out_dir` from the config.
    #[arg(long = "out", value_hint = ValueHint::DirPath)]
    out_dir: Option<PathBuf>,
}

impl Args {
    fn data_path(&self) -> PathBuf {
        self.data
            .clone()
            .unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/data/sample.json")))
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let data_path = args.data_path();
    let cfg = match &args.config {
        Some(path) => DemoConfig::load(path)?,
        None => DemoConfig::default(),
    };
    let out_dir = args.out_dir.or(cfg.out_dir.clone()).unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir).with_context(|| format!("creating {}", out_dir.display()))?;

    let datasets = load_datasets(&data_path)
        .with_context(|| format!("failed to load datasets from '{}'", data_path.display()))?;
    if datasets.is_empty() {
        warn!(path = %data_path.display(), "dataset file holds no charts; nothing to render");
        return Ok(());
    }

    let mut page = Page::with_options(datasets, &cfg.render, || Box::new(TextShaper::new()) as Box<dyn TextMeasure>);
    let renderer = SkiaRenderer::new();

    for (index, chart) in page.charts_mut().iter_mut().enumerate() {
        info!(index, title = chart.title(), "{}", chart.caption());
        let stem = out_stem(&out_dir, index, chart.title());
        write_outputs(&renderer, chart, &stem, "")?;

        sweep_pointer(chart, cfg.sweep_steps);

        if chart.kind() == ChartKind::Multi {
            for series in 0..3 {
                chart.handle(ChartEvent::ToggleSeries(series));
                write_outputs(&renderer, chart, &stem, &format!("_hide{}", series + 1))?;
                chart.handle(ChartEvent::ToggleSeries(series));
            }
        }
    }
    Ok(())
}

/// Move the pointer across the plot, logging the tooltip at each stop, then leave.
fn sweep_pointer(chart: &mut Chart, steps: usize) {
    let plot = chart.scene().plot;
    let origin = chart.scene().origin;
    let y = plot.height() as f64 * 0.5;
    for i in 0..=steps {
        let x = plot.width() as f64 * i as f64 / steps.max(1) as f64;
        chart.handle(ChartEvent::PointerMove(PointerEvent {
            plot_x: x,
            plot_y: y,
            page_x: x + origin.x as f64,
            page_y: y + origin.y as f64,
        }));
        let tip = chart.tooltip();
        if tip.is_visible() {
            let (left, top) = tip.position();
            info!(left, top, html = %tip.html().unwrap_or_default(), "tooltip");
        }
    }
    chart.handle(ChartEvent::PointerLeave);
}

fn write_outputs(renderer: &SkiaRenderer, chart: &Chart, stem: &Path, suffix: &str) -> Result<()> {
    let name = stem.file_name().and_then(|s| s.to_str()).unwrap_or("chart");
    let png = stem.with_file_name(format!("{name}{suffix}.png"));
    renderer
        .render_to_png(chart.scene(), &png)
        .with_context(|| format!("rendering {}", png.display()))?;
    let svg = png.with_extension("svg");
    std::fs::write(&svg, scene_to_svg(chart.scene())).with_context(|| format!("writing {}", svg.display()))?;
    info!(png = %png.display(), svg = %svg.display(), "wrote chart");
    Ok(())
}

/// Produce an output stem like target/out/chart_01_temperature
fn out_stem(out_dir: &Path, index: usize, title: &str) -> PathBuf {
    let slug: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect::<String>()
        .split('_')
        .filter(|s| !s.is_empty())
        .take(4)
        .collect::<Vec<_>>()
        .join("_");
    if slug.is_empty() {
        out_dir.join(format!("chart_{:02}", index + 1))
    } else {
        out_dir.join(format!("chart_{:02}_{}", index + 1, slug))
    }
}
